//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let server = MockServer::start().await;
//! let (mut app, mut rx) = test_app(&server.uri());
//! app.navigate(Screen::Community);
//! settle(&mut app, &mut rx, 1).await;
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;
use unmutte::adapters::ReqwestHttpClient;
use unmutte::app::{App, AppMessage};
use unmutte::backend::BackendClient;

/// Breath period long enough that no tick fires during a test.
pub const NO_TICKS: Duration = Duration::from_secs(3600);

/// How long to wait for a spawned call before failing the test.
pub const MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

pub fn backend_for(uri: &str) -> BackendClient {
    let http = ReqwestHttpClient::with_timeout(Duration::from_secs(5));
    BackendClient::new(uri, Arc::new(http))
}

/// An app against `uri`, with its message receiver taken out.
pub fn test_app(uri: &str) -> (App, UnboundedReceiver<AppMessage>) {
    test_app_with_breath(uri, NO_TICKS)
}

pub fn test_app_with_breath(uri: &str, breath: Duration) -> (App, UnboundedReceiver<AppMessage>) {
    let mut app = App::new(backend_for(uri), breath);
    let rx = app.message_rx.take().expect("fresh app has a receiver");
    (app, rx)
}

pub async fn next_message(rx: &mut UnboundedReceiver<AppMessage>) -> AppMessage {
    tokio::time::timeout(MESSAGE_TIMEOUT, rx.recv())
        .await
        .expect("timed out waiting for an app message")
        .expect("message channel closed")
}

/// Feed the next `count` messages into the app.
pub async fn settle(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>, count: usize) {
    for _ in 0..count {
        let message = next_message(rx).await;
        app.handle_message(message);
    }
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn ctrl(app: &mut App, c: char) {
    app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Render the app into a test buffer and return its text, one row per line.
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal
        .draw(|frame| unmutte::ui::render(frame, app))
        .expect("draw");
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
