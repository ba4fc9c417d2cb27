//! Trait abstractions for dependency injection and testability.
//!
//! The backend client talks to the network only through [`HttpClient`], so
//! every view can be driven against a recording mock in tests.

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
