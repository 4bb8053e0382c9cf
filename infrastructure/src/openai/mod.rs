//! OpenAI Chat Completions adapter

mod gateway;
pub mod protocol;

pub use gateway::{OpenAiGateway, OpenAiSettings};
