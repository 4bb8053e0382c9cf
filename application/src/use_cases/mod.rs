//! Use cases (application services)
//!
//! - [`prompt_builder`]: free text or template + variables → prompt
//! - [`completion`]: prompt → completion text, optionally parsed
//! - [`question_service`]: the operations behind the HTTP endpoints

pub mod completion;
pub mod prompt_builder;
pub mod question_service;

#[cfg(test)]
pub(crate) mod test_support;
