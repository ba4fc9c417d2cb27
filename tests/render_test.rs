//! Screen rendering checks with ratatui's TestBackend.

mod common;

use common::{press, render_to_string, settle, test_app, type_text};
use crossterm::event::KeyCode;
use serde_json::json;
use unmutte::app::Screen;
use unmutte::view_state::{CALMING_SUGGESTION, POST_ACKNOWLEDGEMENT};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_landing_has_emergency_footer() {
    let (app, _rx) = test_app("http://127.0.0.1:9");
    let screen = render_to_string(&app, 160, 30);
    assert!(screen.contains("contact local emergency services"));
    assert!(screen.contains("100% anonymous by default."));
}

#[tokio::test]
async fn test_chat_transcript_and_calming_banner() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "reply": "Breathe with me.",
            "intensity": 0.95
        })))
        .mount(&server)
        .await;

    let (mut app, mut rx) = test_app(&server.uri());
    app.navigate(Screen::Chat);
    type_text(&mut app, "I'm furious");
    press(&mut app, KeyCode::Enter);
    settle(&mut app, &mut rx, 1).await;

    let screen = render_to_string(&app, 160, 30);
    assert!(screen.contains("I'm furious"));
    assert!(screen.contains("Breathe with me."));
    assert!(screen.contains(&CALMING_SUGGESTION[..30]));
}

#[tokio::test]
async fn test_feed_defaults_and_acknowledgement() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/community/feed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "_id": "x1", "content": "No alias on this one." }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/community/post"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let (mut app, mut rx) = test_app(&server.uri());
    app.navigate(Screen::Community);
    settle(&mut app, &mut rx, 1).await;

    let screen = render_to_string(&app, 120, 30);
    assert!(screen.contains("Ally-###"));
    assert!(screen.contains("No alias on this one."));
    assert!(screen.contains("Reports: 0"));

    type_text(&mut app, "hello");
    press(&mut app, KeyCode::Enter);
    settle(&mut app, &mut rx, 2).await;

    let screen = render_to_string(&app, 120, 30);
    assert!(screen.contains(POST_ACKNOWLEDGEMENT));

    press(&mut app, KeyCode::Char('x'));
    let screen = render_to_string(&app, 120, 30);
    assert!(!screen.contains(POST_ACKNOWLEDGEMENT));
    // The dismissing key is not typed into the compose box
    assert!(app.community_view().unwrap().compose().is_empty());
}
