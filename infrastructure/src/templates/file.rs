//! Templates loaded from a directory of `<id>.st` files

use capital_application::ports::template_store::{TemplateStore, TemplateStoreError};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// File extension of template files
const TEMPLATE_EXTENSION: &str = "st";

/// Directory-backed template store
///
/// Each template is read once and kept for the life of the process; cached
/// entries are never replaced. Ids not present on disk fall back to the
/// optional `fallback` store (typically the embedded templates).
pub struct FileTemplateStore {
    dir: PathBuf,
    cache: RwLock<HashMap<String, Arc<str>>>,
    fallback: Option<Arc<dyn TemplateStore>>,
}

impl FileTemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: RwLock::new(HashMap::new()),
            fallback: None,
        }
    }

    /// Use `fallback` for ids with no file in the directory
    pub fn with_fallback(mut self, fallback: Arc<dyn TemplateStore>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Path of the file backing template `id`
    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.{TEMPLATE_EXTENSION}"))
    }

    fn cached(&self, id: &str) -> Option<Arc<str>> {
        self.cache
            .read()
            .ok()
            .and_then(|cache| cache.get(id).cloned())
    }

    fn read_file(&self, id: &str) -> Result<Arc<str>, TemplateStoreError> {
        // Ids are plain names; anything that could escape the directory is unknown
        if id.is_empty() || id.contains(['/', '\\']) || id.contains("..") {
            return Err(TemplateStoreError::NotFound(id.to_string()));
        }

        let path = self.path_for(id);
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                debug!("Loaded template '{}' from {}", id, path.display());
                Ok(Arc::from(text))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(TemplateStoreError::NotFound(id.to_string()))
            }
            Err(e) => Err(TemplateStoreError::Unreadable {
                id: id.to_string(),
                reason: format!("{}: {}", path.display(), e),
            }),
        }
    }
}

impl TemplateStore for FileTemplateStore {
    fn load(&self, id: &str) -> Result<Arc<str>, TemplateStoreError> {
        if let Some(text) = self.cached(id) {
            return Ok(text);
        }

        let text = match (self.read_file(id), &self.fallback) {
            (Ok(text), _) => text,
            (Err(TemplateStoreError::NotFound(_)), Some(fallback)) => fallback.load(id)?,
            (Err(e), _) => return Err(e),
        };

        if let Ok(mut cache) = self.cache.write() {
            // First writer wins so every caller sees the same text
            let entry = cache.entry(id.to_string()).or_insert(text);
            return Ok(Arc::clone(entry));
        }
        Ok(text)
    }
}
