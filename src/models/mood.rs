//! Mood tracker and premium disclaimer wire types.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{deserialize_lenient_items, deserialize_optional_id, deserialize_whole_u8};

/// A mood rating, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MoodRating(u8);

/// Rejected rating value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("mood rating must be between 1 and 5, got {0}")]
pub struct InvalidMoodRating(pub u8);

impl MoodRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, InvalidMoodRating> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidMoodRating(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// All selectable ratings, lowest first.
    pub fn all() -> impl Iterator<Item = MoodRating> {
        (Self::MIN..=Self::MAX).map(MoodRating)
    }
}

impl Default for MoodRating {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for MoodRating {
    type Error = InvalidMoodRating;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for MoodRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recorded mood, as returned by the history endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoodEntry {
    #[serde(default, alias = "_id", deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    #[serde(deserialize_with = "deserialize_whole_u8")]
    pub mood: u8,
    #[serde(default)]
    pub note: Option<String>,
    /// Kept as sent; only parsed for display
    #[serde(default)]
    pub created_at: Option<String>,
}

impl MoodEntry {
    /// "Mood 4: tired", or "Mood 4" without a note. Line breaks in the
    /// note collapse to single spaces so the summary stays on one row.
    pub fn summary(&self) -> String {
        let note = self
            .note
            .as_deref()
            .map(|n| n.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|n| !n.is_empty());
        match note {
            Some(note) => format!("Mood {}: {}", self.mood, note),
            None => format!("Mood {}", self.mood),
        }
    }

    /// Parse `created_at` as RFC 3339, or as a naive ISO timestamp taken to be UTC.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.as_deref()?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }

    /// Local display time; entries without a usable timestamp show `now`.
    pub fn display_time(&self, now: DateTime<Utc>) -> String {
        self.created_at_utc()
            .unwrap_or(now)
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    }
}

/// Body of `POST /api/wellness/mood`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodRequest {
    pub session_id: String,
    pub mood: MoodRating,
    pub note: String,
}

/// Body of `GET /api/wellness/mood/:session_id`. Entries that do not
/// decode are skipped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoodHistoryResponse {
    #[serde(default, deserialize_with = "deserialize_lenient_items")]
    pub items: Vec<MoodEntry>,
}

/// Body of `GET /api/premium/disclaimer`.
#[derive(Debug, Clone, Deserialize)]
pub struct DisclaimerResponse {
    pub disclaimer: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_rating_bounds() {
        assert!(MoodRating::new(0).is_err());
        assert_eq!(MoodRating::new(1).unwrap().value(), 1);
        assert_eq!(MoodRating::new(5).unwrap().value(), 5);
        assert_eq!(MoodRating::try_from(6), Err(InvalidMoodRating(6)));
        assert_eq!(MoodRating::default().value(), 3);
        assert_eq!(MoodRating::all().count(), 5);
    }

    #[test]
    fn test_mood_request_serializes_rating_as_number() {
        let request = MoodRequest {
            session_id: "sess_x".to_string(),
            mood: MoodRating::new(4).unwrap(),
            note: "tired".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "session_id": "sess_x", "mood": 4, "note": "tired" })
        );
    }

    #[test]
    fn test_summary_with_and_without_note() {
        let mut entry: MoodEntry = serde_json::from_str(r#"{"mood":2,"note":"meh"}"#).unwrap();
        assert_eq!(entry.summary(), "Mood 2: meh");
        entry.note = Some(String::new());
        assert_eq!(entry.summary(), "Mood 2");
        entry.note = Some("long day\nslept badly\tok".to_string());
        assert_eq!(entry.summary(), "Mood 2: long day slept badly ok");
    }

    #[test]
    fn test_history_tolerates_odd_entries() {
        let history: MoodHistoryResponse = serde_json::from_str(
            r#"{"items":[{"mood":4.0,"note":"tired"},{"mood":"high"},{"mood":2}]}"#,
        )
        .unwrap();
        let moods: Vec<u8> = history.items.iter().map(|e| e.mood).collect();
        assert_eq!(moods, vec![4, 2]);
    }

    #[test]
    fn test_created_at_parsing() {
        let rfc: MoodEntry =
            serde_json::from_str(r#"{"mood":3,"created_at":"2024-05-01T10:00:00Z"}"#).unwrap();
        assert_eq!(
            rfc.created_at_utc(),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap())
        );

        let naive: MoodEntry =
            serde_json::from_str(r#"{"mood":3,"created_at":"2024-05-01T10:00:00.123456"}"#)
                .unwrap();
        assert!(naive.created_at_utc().is_some());

        let junk: MoodEntry =
            serde_json::from_str(r#"{"mood":3,"created_at":"yesterday"}"#).unwrap();
        assert!(junk.created_at_utc().is_none());
    }

    #[test]
    fn test_display_time_falls_back_to_now() {
        let entry: MoodEntry = serde_json::from_str(r#"{"mood":5}"#).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let expected = now.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string();
        assert_eq!(entry.display_time(now), expected);
    }
}
