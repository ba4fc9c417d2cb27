//! Chat transcript and wire types.

use serde::{Deserialize, Serialize};

/// Who wrote a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Language the chat prompts are shown in; also forwarded to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
}

impl Language {
    /// Label for the language toggle.
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
        }
    }

    /// Placeholder shown in the input and on an empty transcript.
    pub fn prompt(&self) -> &'static str {
        match self {
            Language::English => "Tell me whatever's on your mind. I'm here, no judgement.",
            Language::Hindi => "Jo mann mein hai keh do. Main yahin hoon, bina kisi faisle ke.",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::English => Language::Hindi,
            Language::Hindi => Language::English,
        }
    }
}

/// One transcript entry. Entries are append-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: Role,
    pub text: String,
    /// Escalation score in [0, 1]; only assistant replies carry one
    pub intensity: Option<f64>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            intensity: None,
        }
    }

    pub fn assistant(text: impl Into<String>, intensity: Option<f64>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            intensity,
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub text: String,
    pub lang: Language,
}

/// Reply from `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    #[serde(default)]
    pub intensity: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_wire_shape() {
        let request = ChatRequest {
            session_id: "sess_abc12345".to_string(),
            text: "I'm furious".to_string(),
            lang: Language::Hindi,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "session_id": "sess_abc12345",
                "text": "I'm furious",
                "lang": "hi"
            })
        );
    }

    #[test]
    fn test_chat_reply_without_intensity() {
        let reply: ChatReply = serde_json::from_str(r#"{"reply":"I hear you."}"#).unwrap();
        assert_eq!(reply.reply, "I hear you.");
        assert!(reply.intensity.is_none());
    }

    #[test]
    fn test_chat_reply_requires_reply_text() {
        assert!(serde_json::from_str::<ChatReply>(r#"{"intensity":0.4}"#).is_err());
    }

    #[test]
    fn test_language_toggle_and_codes() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Language::English.toggled(), Language::Hindi);
        assert_eq!(Language::Hindi.toggled(), Language::English);
        assert_eq!(serde_json::to_value(Language::Hindi).unwrap(), "hi");
        assert_ne!(Language::English.prompt(), Language::Hindi.prompt());
    }
}
