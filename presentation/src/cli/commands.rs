//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for capital-ai
#[derive(Parser, Debug)]
#[command(name = "capital-ai")]
#[command(author, version, about = "HTTP service that answers questions and capital-city lookups through an LLM")]
#[command(long_about = r#"
capital-ai serves three JSON endpoints backed by an OpenAI-compatible
chat completion API:

  POST /ask              {"question": "..."}        -> {"answer": "..."}
  POST /capital          {"stateOrCountry": "..."}  -> {"answer": "<city>"}
  POST /capitalWithInfo  {"stateOrCountry": "..."}  -> {"answer": "<details>"}

Configuration files are loaded from (in priority order):
1. CAPITAL_AI_<SECTION>__<KEY>            Environment variables
2. --config <path>                        Explicit config file
3. ./capital-ai.toml                      Project-level config
4. ~/.config/capital-ai/config.toml       Global config

Example:
  OPENAI_API_KEY=sk-... capital-ai --bind 0.0.0.0:8080
  capital-ai --templates ./prompts -vv
"#)]
pub struct Cli {
    /// Listen address (overrides server.bind)
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Directory of template overrides (overrides templates.dir)
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Verbosity level (default = info, -v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Default log filter for the chosen verbosity; `RUST_LOG` takes precedence
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
