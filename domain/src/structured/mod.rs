//! Structured output
//!
//! An [`OutputShape`] describes the fields a model reply must contain. It is
//! rendered into prompt instructions by [`format_instructions`] and used to
//! validate and decode the reply by [`parse_structured`].

mod output_parser;
mod shape;

pub use output_parser::{
    StructuredError, format_instructions, format_instructions_for, json_schema, parse_fields,
    parse_output, parse_structured,
};
pub use shape::{FieldType, OutputShape, ShapeField, StructuredOutput};
