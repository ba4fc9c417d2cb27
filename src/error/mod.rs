//! Error handling for backend calls.
//!
//! Two layers, as everywhere else in the client:
//!
//! - [`ApiError`]: why a backend call failed (transport, status, or shape).
//! - [`Outcome`]: what a view does with the call. Views never propagate an
//!   `ApiError`; they fold it into `Outcome::Fallback` and keep their
//!   previous state, so the swallowed path is a value tests can match on.
//!
//! | Kind | Source | Code |
//! |------|--------|------|
//! | Transport | connection, timeout, bad URL | `E_API_TRANSPORT` |
//! | Status | non-2xx reply | `E_API_STATUS` |
//! | Decode | body is not the expected JSON | `E_API_DECODE` |
//! | Encode | request body could not be serialized | `E_API_ENCODE` |

mod api;
mod outcome;

pub use api::{ApiError, ApiResult};
pub use outcome::Outcome;
