//! CLI entrypoint for capital-ai
//!
//! This is the main binary that wires together all layers by explicit
//! construction and serves the HTTP endpoints.

use anyhow::{Context, Result, bail};
use capital_application::{CompletionAdapter, PromptBuilder, QuestionService, TemplateStore};
use capital_domain::catalog;
use capital_infrastructure::{
    ConfigLoader, EmbeddedTemplateStore, FileConfig, FileTemplateStore, OpenAiGateway,
    OpenAiSettings,
};
use capital_presentation::{AppState, Cli};
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // RUST_LOG wins over -v flags
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?
    };
    apply_cli_overrides(&mut config, &cli);

    let mut fatal = false;
    for issue in config.validate() {
        if issue.is_error() {
            fatal = true;
            tracing::error!("{}", issue);
        } else {
            warn!("{}", issue);
        }
    }
    if fatal {
        bail!("Invalid configuration");
    }

    info!("Starting capital-ai");

    // === Dependency Injection ===
    let templates = template_store(&config);
    let prompts = PromptBuilder::new(templates);
    prompts
        .verify_templates(catalog::ALL)
        .context("Template check failed")?;

    let api_key = config.openai.resolve_api_key().with_context(|| {
        format!(
            "No OpenAI API key: set {} or openai.api_key",
            config.openai.api_key_env
        )
    })?;
    let gateway = OpenAiGateway::new(OpenAiSettings {
        base_url: config.openai.base_url.clone(),
        api_key,
        model: config.openai.model.clone(),
        temperature: config.openai.temperature,
    })?;

    let service = QuestionService::new(prompts, CompletionAdapter::new(Arc::new(gateway)));

    let listener = TcpListener::bind(config.server.bind.trim())
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;

    capital_presentation::serve(listener, AppState::new(service)).await?;

    info!("Stopped");
    Ok(())
}

fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(bind) = &cli.bind {
        config.server.bind = bind.clone();
    }
    if let Some(dir) = &cli.templates {
        config.templates.dir = Some(dir.clone());
    }
}

/// Bundled templates, overlaid by `templates.dir` when configured
fn template_store(config: &FileConfig) -> Arc<dyn TemplateStore> {
    let bundled = EmbeddedTemplateStore::new();
    debug!("Bundled templates: {}", bundled.ids().join(", "));
    let embedded: Arc<dyn TemplateStore> = Arc::new(bundled);
    match &config.templates.dir {
        Some(dir) => {
            info!("Loading templates from {}", dir.display());
            Arc::new(FileTemplateStore::new(dir).with_fallback(embedded))
        }
        None => embedded,
    }
}
