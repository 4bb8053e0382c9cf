//! Core value records exchanged over the request boundary.
//!
//! - [`question::Question`] / [`question::Answer`]: free-form ask and its envelope
//! - [`capital::CapitalRequest`] / [`capital::CapitalResponse`]: capital lookups

pub mod capital;
pub mod question;
