//! Test doubles shared by the use case tests

use crate::ports::completion_gateway::{CompletionGateway, GatewayError};
use crate::ports::template_store::{TemplateStore, TemplateStoreError};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Gateway that replays scripted results and records every prompt
pub struct MockGateway {
    responses: Mutex<VecDeque<Result<String, GatewayError>>>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl MockGateway {
    pub fn new(responses: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from(responses)),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }

    pub fn failing(error: GatewayError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionGateway for MockGateway {
    async fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))
    }

    fn model(&self) -> &str {
        "mock-model"
    }
}

/// Gateway that never answers, for cancellation tests
pub struct PendingGateway {
    calls: AtomicUsize,
}

impl PendingGateway {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionGateway for PendingGateway {
    async fn complete(&self, _prompt: &str) -> Result<String, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::future::pending().await
    }

    fn model(&self) -> &str {
        "pending-model"
    }
}

/// In-memory template store
pub struct MapTemplateStore {
    templates: HashMap<String, Arc<str>>,
}

impl MapTemplateStore {
    pub fn new(templates: &[(&str, &str)]) -> Self {
        Self {
            templates: templates
                .iter()
                .map(|(id, text)| (id.to_string(), Arc::from(*text)))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self::new(&[])
    }
}

impl TemplateStore for MapTemplateStore {
    fn load(&self, id: &str) -> Result<Arc<str>, TemplateStoreError> {
        self.templates
            .get(id)
            .cloned()
            .ok_or_else(|| TemplateStoreError::NotFound(id.to_string()))
    }
}

/// The two bundled templates, in the same form as shipped
pub fn capital_templates() -> MapTemplateStore {
    MapTemplateStore::new(&[
        (
            "get-capital-prompt",
            "What is the capital of {stateOrCountry}?\n{format}",
        ),
        (
            "get-capital-with-info",
            "What is the capital of {stateOrCountry}? Tell me about its population and landmarks.",
        ),
    ])
}
