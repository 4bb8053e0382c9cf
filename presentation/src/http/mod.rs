//! HTTP endpoints
//!
//! | Route | Body | Response |
//! |---|---|---|
//! | `POST /ask` | `{"question"}` | `{"answer"}` |
//! | `POST /capital` | `{"stateOrCountry"}` | `{"answer"}` (city name) |
//! | `POST /capitalWithInfo` | `{"stateOrCountry"}` | `{"answer"}` (free text) |

mod error;
mod handlers;
mod router;

pub use error::{ApiError, ErrorBody};
pub use router::{AppState, router, serve};
