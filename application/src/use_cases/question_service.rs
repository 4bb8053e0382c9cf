//! Question service.
//!
//! The four operations behind the HTTP endpoints. Each builds a prompt with
//! [`PromptBuilder`] and sends it with [`CompletionAdapter`]; nothing is kept
//! between calls.

use crate::error::ServiceError;
use crate::use_cases::completion::CompletionAdapter;
use crate::use_cases::prompt_builder::PromptBuilder;
use capital_domain::util::truncate_str;
use capital_domain::{Answer, CapitalRequest, CapitalResponse, Question, catalog};
use std::collections::HashMap;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Answers free-form questions and capital-city lookups
#[derive(Clone)]
pub struct QuestionService {
    prompts: PromptBuilder,
    completions: CompletionAdapter,
}

impl QuestionService {
    pub fn new(prompts: PromptBuilder, completions: CompletionAdapter) -> Self {
        Self {
            prompts,
            completions,
        }
    }

    /// Copy of this service whose completion calls are bound to `token`.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            prompts: self.prompts.clone(),
            completions: self.completions.clone().with_cancellation(token),
        }
    }

    /// Send the question text verbatim and wrap the reply
    pub async fn answer(&self, question: &Question) -> Result<Answer, ServiceError> {
        let text = self.answer_text(question.text()).await?;
        Ok(Answer::new(text))
    }

    /// Send `question` verbatim and return the raw reply
    pub async fn answer_text(&self, question: &str) -> Result<String, ServiceError> {
        info!("Answering question: {}", truncate_str(question, 100));
        let prompt = self.prompts.build_from_text(question);
        self.completions.complete(&prompt).await
    }

    /// Ask for the capital of `request` and parse the reply into a city name
    pub async fn capital(&self, request: &CapitalRequest) -> Result<CapitalResponse, ServiceError> {
        info!("Looking up capital of {}", request.state_or_country());

        let format = self.completions.format_instructions::<CapitalResponse>();
        let variables = HashMap::from([
            (
                catalog::STATE_OR_COUNTRY.to_string(),
                request.state_or_country().to_string(),
            ),
            (catalog::FORMAT.to_string(), format),
        ]);
        let prompt = self
            .prompts
            .build_from_template(catalog::GET_CAPITAL, &variables)?;

        let response: CapitalResponse = self.completions.complete_structured(&prompt).await?;
        info!(
            "Capital of {} is {}",
            request.state_or_country(),
            response.answer()
        );
        Ok(response)
    }

    /// Ask for the capital of `request` with descriptive detail, unparsed
    pub async fn capital_with_info(&self, request: &CapitalRequest) -> Result<Answer, ServiceError> {
        info!(
            "Looking up capital with info for {}",
            request.state_or_country()
        );

        let variables = HashMap::from([(
            catalog::STATE_OR_COUNTRY.to_string(),
            request.state_or_country().to_string(),
        )]);
        let prompt = self
            .prompts
            .build_from_template(catalog::GET_CAPITAL_WITH_INFO, &variables)?;

        let text = self.completions.complete(&prompt).await?;
        Ok(Answer::new(text))
    }
}
