//! Prompt templates with `{name}` placeholder substitution

use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while rendering a template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Template '{template}' has no value for placeholder(s): {}", .missing.join(", "))]
    MissingVariables {
        template: String,
        missing: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed prompt template
///
/// A placeholder is `{identifier}`, where the identifier starts with an ASCII
/// letter or `_` and continues with ASCII alphanumerics or `_`. Any other
/// brace is literal text, so JSON snippets survive untouched; `{{` and `}}`
/// render as single braces.
///
/// Rendering is a single pass: substituted values are never re-scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    name: String,
    segments: Vec<Segment>,
}

impl PromptTemplate {
    /// Parse `source` into a template identified by `name`
    pub fn new(name: impl Into<String>, source: &str) -> Self {
        Self {
            name: name.into(),
            segments: parse(source),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Distinct placeholder names in first-appearance order
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder(name) = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Substitute every placeholder from `variables`.
    ///
    /// Fails if any placeholder has no value; extra variables are ignored.
    pub fn render(&self, variables: &HashMap<String, String>) -> Result<String, TemplateError> {
        let missing: Vec<String> = self
            .placeholders()
            .into_iter()
            .filter(|name| !variables.contains_key(*name))
            .map(str::to_string)
            .collect();

        if !missing.is_empty() {
            return Err(TemplateError::MissingVariables {
                template: self.name.clone(),
                missing,
            });
        }

        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    if let Some(value) = variables.get(name) {
                        out.push_str(value);
                    }
                }
            }
        }
        Ok(out)
    }
}

fn is_placeholder_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn parse(source: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = source;

    while let Some(pos) = rest.find(|c| c == '{' || c == '}') {
        literal.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix("{{") {
            literal.push('{');
            rest = after;
            continue;
        }
        if let Some(after) = tail.strip_prefix("}}") {
            literal.push('}');
            rest = after;
            continue;
        }

        if let Some(inner) = tail.strip_prefix('{') {
            if let Some(end) = inner.find('}') {
                let name = &inner[..end];
                if is_placeholder_name(name) {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(name.to_string()));
                    rest = &inner[end + 1..];
                    continue;
                }
            }
        }

        // Lone brace: keep it as text
        literal.push_str(&tail[..1]);
        rest = &tail[1..];
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}
