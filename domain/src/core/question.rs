//! Question and Answer value objects

use serde::{Deserialize, Serialize};

/// A free-form question sent to the model as-is (Value Object)
///
/// Wire shape: `{"question": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    question: String,
}

impl Question {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }

    /// Get the question text
    pub fn text(&self) -> &str {
        &self.question
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.question)
    }
}

impl From<&str> for Question {
    fn from(s: &str) -> Self {
        Question::new(s)
    }
}

impl From<String> for Question {
    fn from(s: String) -> Self {
        Question::new(s)
    }
}

/// Generic text response envelope (Value Object)
///
/// Used for free-form answers and for the capital-with-info description.
/// Wire shape: `{"answer": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    answer: String,
}

impl Answer {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.answer
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Answer{{answer='{}'}}", self.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::new("What is Rust?");
        assert_eq!(q.text(), "What is Rust?");
    }

    #[test]
    fn test_question_from_str() {
        let q: Question = "What is Rust?".into();
        assert_eq!(q.text(), "What is Rust?");
    }

    #[test]
    fn test_question_wire_shape() {
        let q: Question = serde_json::from_str(r#"{"question": "2+2?"}"#).unwrap();
        assert_eq!(q.text(), "2+2?");
    }

    #[test]
    fn test_empty_question_is_accepted() {
        // No validation beyond deserialization
        let q: Question = serde_json::from_str(r#"{"question": ""}"#).unwrap();
        assert_eq!(q.text(), "");
    }

    #[test]
    fn test_question_requires_field() {
        assert!(serde_json::from_str::<Question>(r#"{"q": "2+2?"}"#).is_err());
    }

    #[test]
    fn test_answer_serializes_to_envelope() {
        let json = serde_json::to_string(&Answer::new("4")).unwrap();
        assert_eq!(json, r#"{"answer":"4"}"#);
    }

    #[test]
    fn test_answer_display() {
        assert_eq!(
            Answer::new("This is a test").to_string(),
            "Answer{answer='This is a test'}"
        );
    }
}
