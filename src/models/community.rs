//! Community feed wire types.

use serde::{Deserialize, Serialize};

use super::{deserialize_lenient_count, deserialize_lenient_items, deserialize_optional_id};

/// Shown when a post carries no alias.
pub const ANONYMOUS_ALIAS: &str = "Ally-###";

/// A moderated post as returned by the feed. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommunityPost {
    #[serde(default, alias = "_id", deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
    pub content: String,
    /// Anything other than a whole non-negative count reads as absent
    #[serde(default, deserialize_with = "deserialize_lenient_count")]
    pub reports: Option<u32>,
}

impl CommunityPost {
    pub fn display_alias(&self) -> &str {
        self.alias
            .as_deref()
            .filter(|a| !a.is_empty())
            .unwrap_or(ANONYMOUS_ALIAS)
    }

    pub fn report_count(&self) -> u32 {
        self.reports.unwrap_or(0)
    }
}

/// Body of `GET /api/community/feed`. A missing `items` is an empty feed;
/// posts that do not decode are skipped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedResponse {
    #[serde(default, deserialize_with = "deserialize_lenient_items")]
    pub items: Vec<CommunityPost>,
}

/// Body of `POST /api/community/post`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostRequest {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_accepts_underscore_id_and_defaults() {
        let post: CommunityPost =
            serde_json::from_str(r#"{"_id":"65ab","content":"rough day"}"#).unwrap();
        assert_eq!(post.id.as_deref(), Some("65ab"));
        assert_eq!(post.display_alias(), ANONYMOUS_ALIAS);
        assert_eq!(post.report_count(), 0);
    }

    #[test]
    fn test_post_with_alias_and_reports() {
        let post: CommunityPost = serde_json::from_str(
            r#"{"id":7,"alias":"Ally-901","content":"thanks all","reports":2}"#,
        )
        .unwrap();
        assert_eq!(post.id.as_deref(), Some("7"));
        assert_eq!(post.display_alias(), "Ally-901");
        assert_eq!(post.report_count(), 2);
    }

    #[test]
    fn test_feed_keeps_good_posts_around_a_bad_one() {
        let feed: FeedResponse = serde_json::from_str(
            r#"{"items":[
                {"_id":"a","content":"first","reports":-1},
                {"_id":"b","alias":"Ally-7"},
                {"_id":"c","content":"third","reports":2.0}
            ]}"#,
        )
        .unwrap();
        assert_eq!(feed.items.len(), 2);
        assert_eq!(feed.items[0].report_count(), 0);
        assert_eq!(feed.items[1].content, "third");
        assert_eq!(feed.items[1].report_count(), 2);
    }

    #[test]
    fn test_feed_without_items_is_empty() {
        let feed: FeedResponse = serde_json::from_str("{}").unwrap();
        assert!(feed.items.is_empty());
    }
}
