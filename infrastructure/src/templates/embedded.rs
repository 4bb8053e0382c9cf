//! Templates compiled into the binary

use capital_application::ports::template_store::{TemplateStore, TemplateStoreError};
use capital_domain::catalog;
use std::collections::HashMap;
use std::sync::Arc;

const GET_CAPITAL_PROMPT: &str = include_str!("../../templates/get-capital-prompt.st");
const GET_CAPITAL_WITH_INFO: &str = include_str!("../../templates/get-capital-with-info.st");

/// Read-only store over the bundled `.st` templates
#[derive(Debug, Clone)]
pub struct EmbeddedTemplateStore {
    templates: HashMap<&'static str, Arc<str>>,
}

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        let templates = HashMap::from([
            (catalog::GET_CAPITAL, Arc::from(GET_CAPITAL_PROMPT)),
            (catalog::GET_CAPITAL_WITH_INFO, Arc::from(GET_CAPITAL_WITH_INFO)),
        ]);
        Self { templates }
    }

    /// Identifiers of every bundled template
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.templates.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for EmbeddedTemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn load(&self, id: &str) -> Result<Arc<str>, TemplateStoreError> {
        self.templates
            .get(id)
            .cloned()
            .ok_or_else(|| TemplateStoreError::NotFound(id.to_string()))
    }
}
