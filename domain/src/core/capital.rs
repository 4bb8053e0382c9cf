//! Capital city request/response value objects

use crate::structured::{FieldType, OutputShape, ShapeField, StructuredOutput};
use serde::{Deserialize, Serialize};

/// Request naming a state or country whose capital is wanted
///
/// Wire shape: `{"stateOrCountry": "France"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapitalRequest {
    state_or_country: String,
}

impl CapitalRequest {
    pub fn new(state_or_country: impl Into<String>) -> Self {
        Self {
            state_or_country: state_or_country.into(),
        }
    }

    pub fn state_or_country(&self) -> &str {
        &self.state_or_country
    }
}

/// Structured single-field result holding the capital city name
///
/// This is the shape the model is instructed to produce for `/capital`,
/// and the shape its reply is parsed back into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapitalResponse {
    answer: String,
}

impl CapitalResponse {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }

    /// The city name
    pub fn answer(&self) -> &str {
        &self.answer
    }
}

impl StructuredOutput for CapitalResponse {
    fn shape() -> OutputShape {
        OutputShape::new("CapitalResponse").with_field(ShapeField::new(
            "answer",
            FieldType::String,
            "This is the city name",
        ))
    }
}
