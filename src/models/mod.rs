//! Wire and view models shared by the client views.
//!
//! Request types serialize exactly the JSON bodies the backend expects;
//! response types are lenient about missing fields, matching how the backend
//! omits optional values.

mod chat;
mod community;
mod mood;

pub use chat::{ChatReply, ChatRequest, Language, Message, Role};
pub use community::{CommunityPost, FeedResponse, PostRequest, ANONYMOUS_ALIAS};
pub use mood::{
    DisclaimerResponse, InvalidMoodRating, MoodEntry, MoodHistoryResponse, MoodRating,
    MoodRequest,
};

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an `items` array one entry at a time.
///
/// An entry that does not fit `T` is logged and skipped instead of failing
/// the whole list. `null` reads as empty.
pub(crate) fn deserialize_lenient_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!("skipping malformed item #{}: {}", index, e);
                None
            }
        })
        .collect())
}

/// A JSON number with no fractional part, e.g. `4` or `4.0`.
fn whole_number(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|v| v.is_finite() && v.fract() == 0.0)
            .filter(|v| (i64::MIN as f64..=i64::MAX as f64).contains(v))
            .map(|v| v as i64)
    })
}

/// Deserialize a display-only counter. Anything that is not a whole
/// non-negative number reads as absent.
pub(crate) fn deserialize_lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(whole_number)
        .and_then(|n| u32::try_from(n).ok()))
}

/// Deserialize a small whole number, accepting `4.0` for `4`.
pub(crate) fn deserialize_whole_u8<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    whole_number(&value)
        .and_then(|n| u8::try_from(n).ok())
        .ok_or_else(|| D::Error::custom(format!("expected a whole number 0-255, got {}", value)))
}

/// Deserialize an optional id that the backend may send as a string or a
/// number (document stores and SQL backends disagree).
pub(crate) fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(s) => s,
        RawId::Signed(n) => n.to_string(),
        RawId::Unsigned(n) => n.to_string(),
    }))
}
