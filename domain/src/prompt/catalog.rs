//! Identifiers and variable names of the bundled prompt templates

/// Template asking for a capital city; expects [`STATE_OR_COUNTRY`] and [`FORMAT`]
pub const GET_CAPITAL: &str = "get-capital-prompt";

/// Template asking for a capital city with descriptive detail; expects [`STATE_OR_COUNTRY`]
pub const GET_CAPITAL_WITH_INFO: &str = "get-capital-with-info";

/// Every template the service needs at runtime
pub const ALL: &[&str] = &[GET_CAPITAL, GET_CAPITAL_WITH_INFO];

/// Variable carrying the state or country name
pub const STATE_OR_COUNTRY: &str = "stateOrCountry";

/// Variable carrying the structured-output format instructions
pub const FORMAT: &str = "format";
