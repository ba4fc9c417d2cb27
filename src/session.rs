//! Per-view session tokens.
//!
//! A [`SessionId`] is an opaque, client-generated correlation token. It lets
//! the backend group chat turns and mood entries, nothing more: anyone who
//! knows the token can use it, so it is no security boundary. Real isolation
//! would need server-issued tokens.

use std::fmt;
use uuid::Uuid;

const PREFIX: &str = "sess_";
const SUFFIX_LEN: usize = 8;
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Opaque session token, e.g. `sess_k3v9x0qa`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh token. Random v4 UUID bits supply the entropy;
    /// collisions are unlikely, not impossible.
    pub fn generate() -> Self {
        let mut bits = Uuid::new_v4().as_u128();
        let mut token = String::with_capacity(PREFIX.len() + SUFFIX_LEN);
        token.push_str(PREFIX);
        for _ in 0..SUFFIX_LEN {
            token.push(ALPHABET[(bits % 36) as usize] as char);
            bits /= 36;
        }
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_format() {
        let id = SessionId::generate();
        let s = id.as_str();
        assert!(s.starts_with("sess_"));
        assert_eq!(s.len(), 13);
        assert!(s[5..]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_tokens_do_not_repeat() {
        let ids: HashSet<SessionId> = (0..1000).map(|_| SessionId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_clone_is_stable() {
        let id = SessionId::generate();
        let copy = id.clone();
        assert_eq!(id, copy);
        assert_eq!(id.to_string(), copy.as_str());
    }
}
