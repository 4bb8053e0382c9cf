//! Prompt Builder use case.
//!
//! Turns either raw text or a stored template plus variables into the final
//! prompt string sent to the completion provider.

use crate::error::ServiceError;
use crate::ports::template_store::TemplateStore;
use capital_domain::PromptTemplate;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Builds prompts from free text or from templates held by a [`TemplateStore`]
#[derive(Clone)]
pub struct PromptBuilder {
    templates: Arc<dyn TemplateStore>,
}

impl PromptBuilder {
    pub fn new(templates: Arc<dyn TemplateStore>) -> Self {
        Self { templates }
    }

    /// The prompt is the text itself; no placeholder processing happens here.
    pub fn build_from_text(&self, text: &str) -> String {
        text.to_string()
    }

    /// Load `template_id` and substitute every `{name}` from `variables`.
    ///
    /// Fails with [`ServiceError::TemplateNotFound`] when the store has no such
    /// template and with [`ServiceError::TemplateMismatch`] when a placeholder
    /// has no value.
    pub fn build_from_template(
        &self,
        template_id: &str,
        variables: &HashMap<String, String>,
    ) -> Result<String, ServiceError> {
        let source = self.templates.load(template_id)?;
        let template = PromptTemplate::new(template_id, &source);

        debug!(
            "Rendering template '{}' with placeholders {:?}",
            template_id,
            template.placeholders()
        );

        Ok(template.render(variables)?)
    }

    /// Check that every template in `ids` can be loaded.
    ///
    /// Logs presence at info and the template text at debug. Returns the first
    /// failure so startup can stop before serving requests.
    pub fn verify_templates(&self, ids: &[&str]) -> Result<(), ServiceError> {
        for id in ids {
            match self.templates.load(id) {
                Ok(text) => {
                    info!("Template exists: {}", id);
                    debug!("Template content ({}):\n{}", id, text);
                }
                Err(e) => {
                    warn!("Template check failed: {}", e);
                    return Err(e.into());
                }
            }
        }
        Ok(())
    }
}
