//! Format instructions and the matching parser for structured replies
//!
//! Both directions are driven by one [`OutputShape`], so what the prompt
//! asks for and what the parser accepts cannot drift apart.

use super::shape::{OutputShape, StructuredOutput};
use crate::util::truncate_str;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use thiserror::Error;

/// Maximum bytes of raw model output carried in an error
const RAW_PREVIEW_BYTES: usize = 200;

/// Errors raised when a model reply does not match the requested shape
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuredError {
    #[error("Output is not valid JSON ({reason}): {raw}")]
    InvalidJson { reason: String, raw: String },

    #[error("Output is not a JSON object: {raw}")]
    NotAnObject { raw: String },

    #[error("Output is missing field '{field}': {raw}")]
    MissingField { field: String, raw: String },

    #[error("Field '{field}' should be {expected}: {raw}")]
    WrongType {
        field: String,
        expected: String,
        raw: String,
    },

    #[error("Output does not match {shape} ({reason}): {raw}")]
    Deserialize {
        shape: String,
        reason: String,
        raw: String,
    },
}

/// JSON Schema for `shape`
pub fn json_schema(shape: &OutputShape) -> Value {
    let mut properties = Map::new();
    for field in shape.fields() {
        properties.insert(
            field.name().to_string(),
            json!({
                "type": field.field_type().json_type(),
                "description": field.description(),
            }),
        );
    }
    let required: Vec<&str> = shape.fields().iter().map(|f| f.name()).collect();

    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false,
    })
}

/// Prompt text instructing the model to answer in `shape`
pub fn format_instructions(shape: &OutputShape) -> String {
    let schema = json_schema(shape);
    let schema = serde_json::to_string_pretty(&schema).unwrap_or_else(|_| schema.to_string());

    format!(
        r#"Your response should be in JSON format.
Do not include any explanations, only provide a RFC8259 compliant JSON response following this format without deviation.
Do not include markdown code blocks in your response.
Remove the ```json markdown from the output.
Here is the JSON Schema instance your output must adhere to:
```{}```"#,
        schema
    )
}

/// Format instructions for a [`StructuredOutput`] type
pub fn format_instructions_for<T: StructuredOutput>() -> String {
    format_instructions(&T::shape())
}

/// Check `text` against `shape` and return the validated JSON object
pub fn parse_fields(shape: &OutputShape, text: &str) -> Result<Map<String, Value>, StructuredError> {
    let raw = || truncate_str(text, RAW_PREVIEW_BYTES).to_string();
    let body = strip_code_fence(text);

    let value: Value = serde_json::from_str(body).map_err(|e| StructuredError::InvalidJson {
        reason: e.to_string(),
        raw: raw(),
    })?;

    let Value::Object(object) = value else {
        return Err(StructuredError::NotAnObject { raw: raw() });
    };

    for field in shape.fields() {
        match object.get(field.name()) {
            None => {
                return Err(StructuredError::MissingField {
                    field: field.name().to_string(),
                    raw: raw(),
                });
            }
            Some(v) if !field.field_type().accepts(v) => {
                return Err(StructuredError::WrongType {
                    field: field.name().to_string(),
                    expected: field.field_type().to_string(),
                    raw: raw(),
                });
            }
            Some(_) => {}
        }
    }

    Ok(object)
}

/// Parse `text` as a `T` described by `shape`
pub fn parse_structured<T: DeserializeOwned>(
    shape: &OutputShape,
    text: &str,
) -> Result<T, StructuredError> {
    let object = parse_fields(shape, text)?;
    serde_json::from_value(Value::Object(object)).map_err(|e| StructuredError::Deserialize {
        shape: shape.name().to_string(),
        reason: e.to_string(),
        raw: truncate_str(text, RAW_PREVIEW_BYTES).to_string(),
    })
}

/// Parse `text` as a [`StructuredOutput`] type
pub fn parse_output<T: StructuredOutput>(text: &str) -> Result<T, StructuredError> {
    parse_structured(&T::shape(), text)
}

/// Drop a surrounding markdown code fence (```json ... ```), if any
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(after_open) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Info string ("json"), whether or not a newline follows it
    let body = after_open
        .trim_start_matches(|c: char| c.is_ascii_alphanumeric())
        .trim_start();
    body.strip_suffix("```").unwrap_or(body).trim()
}
