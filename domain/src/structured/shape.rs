//! Shape descriptors for structured model output

use serde::de::DeserializeOwned;
use serde_json::Value;

/// JSON type of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Number,
    Boolean,
}

impl FieldType {
    /// JSON Schema `type` keyword for this field
    pub fn json_type(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
        }
    }

    /// Whether `value` satisfies this type
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Integer => value.is_i64() || value.is_u64(),
            FieldType::Number => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.json_type())
    }
}

/// One expected field: name, type and a human-readable description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeField {
    name: String,
    field_type: FieldType,
    description: String,
}

impl ShapeField {
    pub fn new(
        name: impl Into<String>,
        field_type: FieldType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            field_type,
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Description of the object a model reply must contain
///
/// The same value drives both the prompt's format instructions and the
/// parser, see [`super::format_instructions`] and [`super::parse_structured`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputShape {
    name: String,
    fields: Vec<ShapeField>,
}

impl OutputShape {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: ShapeField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[ShapeField] {
        &self.fields
    }
}

/// A value that can be requested from a model and parsed from its reply
pub trait StructuredOutput: DeserializeOwned {
    fn shape() -> OutputShape;
}
