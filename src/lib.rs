//! Unmutte: a terminal client for an emotional-wellness service.
//!
//! A landing screen plus three views (chat, anonymous community feed and a
//! wellness hub) talking to a remote backend over HTTP. This library exposes
//! the modules for use by the binary and integration tests.

pub mod adapters;
pub mod app;
pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod session;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
pub mod widgets;
