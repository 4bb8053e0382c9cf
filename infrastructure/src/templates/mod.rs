//! Template store adapters
//!
//! - [`EmbeddedTemplateStore`]: the bundled `templates/*.st` files
//! - [`FileTemplateStore`]: a directory of overrides, falling back to another store

mod embedded;
mod file;

pub use embedded::EmbeddedTemplateStore;
pub use file::FileTemplateStore;
