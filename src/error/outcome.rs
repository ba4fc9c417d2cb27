//! Explicit result of a swallowed backend call.

use super::ApiError;

/// What a view receives when an effect settles.
///
/// `Fallback` means the call failed and the view keeps (or substitutes) its
/// fallback state. The error is kept for logging and assertions only; it is
/// never shown to the user.
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    Ok(T),
    Fallback(ApiError),
}

impl<T> Outcome<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback(_))
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Fallback(_) => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Fallback(err) => Outcome::Fallback(err),
        }
    }

    /// Log the swallowed error, if any, under `context`.
    pub fn log_fallback(&self, context: &str) {
        if let Outcome::Fallback(err) = self {
            tracing::warn!(code = err.error_code(), "{} fell back: {}", context, err);
        }
    }
}

impl<T> From<Result<T, ApiError>> for Outcome<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(err) => Outcome::Fallback(err),
        }
    }
}
