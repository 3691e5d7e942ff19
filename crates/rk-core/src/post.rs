//! Raw archived posts.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One archived post as exported from the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub text: String,
    /// Timestamp exactly as it appeared in the archive.
    pub created_at: String,
    /// Parsed timestamp, `None` when the archive value is not a recognized date.
    #[serde(skip)]
    pub time: Option<DateTime<FixedOffset>>,
}

impl Post {
    pub fn new(text: impl Into<String>, created_at: impl Into<String>) -> Self {
        let created_at = created_at.into();
        let time = parse_timestamp(&created_at);
        if time.is_none() && !created_at.is_empty() {
            tracing::debug!(created_at = %created_at, "unrecognized post timestamp");
        }
        Self {
            text: text.into(),
            created_at,
            time,
        }
    }
}

/// Archive records are read leniently: a field that is absent, `null` or not
/// a string becomes the empty string, and a record that is not an object
/// yields a post with both fields empty.
impl<'de> Deserialize<'de> for Post {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = Value::deserialize(deserializer)?;
        let field = |name: &str| {
            record
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        if !record.is_object() {
            tracing::debug!(record = %record, "archive record is not an object");
        }
        Ok(Self::new(field("text"), field("created_at")))
    }
}

/// Twitter archive format, e.g. `Sat Sep 29 19:33:04 +0000 2018`.
const TWITTER_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Plain `2018-09-29 19:33:04`, read as UTC.
const NAIVE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses the timestamp formats seen in exported archives.
///
/// Supports:
/// - RFC 3339: "2018-09-29T19:33:04.000Z"
/// - Twitter: "Sat Sep 29 19:33:04 +0000 2018"
/// - Naive UTC: "2018-09-29 19:33:04"
pub fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_str(s, TWITTER_FORMAT))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, NAIVE_FORMAT)
                .ok()
                .map(|naive| naive.and_utc().fixed_offset())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_rfc3339() {
        let t = parse_timestamp("2018-09-29T19:33:04.000Z").unwrap();
        assert_eq!((t.year(), t.month(), t.day()), (2018, 9, 29));
        assert_eq!(t.hour(), 19);
    }

    #[test]
    fn parses_twitter_format() {
        let t = parse_timestamp("Sat Sep 29 19:33:04 +0000 2018").unwrap();
        assert_eq!(t, parse_timestamp("2018-09-29T19:33:04Z").unwrap());
    }

    #[test]
    fn parses_naive_as_utc() {
        let t = parse_timestamp("2018-09-29 19:33:04").unwrap();
        assert_eq!(t.offset().local_minus_utc(), 0);
        assert_eq!(t.minute(), 33);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("yesterday-ish").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn post_keeps_raw_timestamp() {
        let post = Post::new("hello", "not a date");
        assert_eq!(post.created_at, "not a date");
        assert!(post.time.is_none());
    }

    #[test]
    fn deserializes_missing_and_null_fields() {
        let post: Post = serde_json::from_str(r#"{"created_at": "2018-09-29T19:33:04Z"}"#).unwrap();
        assert_eq!(post.text, "");
        assert!(post.time.is_some());

        let post: Post = serde_json::from_str(r#"{"text": null, "created_at": null}"#).unwrap();
        assert_eq!(post.text, "");
        assert!(post.time.is_none());
    }

    #[test]
    fn deserializes_non_string_fields_as_empty() {
        let post: Post =
            serde_json::from_str(r#"{"text": 42, "created_at": ["2018-09-29T19:33:04Z"]}"#).unwrap();
        assert_eq!(post.text, "");
        assert_eq!(post.created_at, "");
        assert!(post.time.is_none());

        let post: Post = serde_json::from_str(r#"{"text": {"full": "hi"}, "created_at": "2018-09-29T19:33:04Z"}"#).unwrap();
        assert_eq!(post.text, "");
        assert!(post.time.is_some());
    }

    #[test]
    fn deserializes_non_object_record_as_empty_post() {
        let post: Post = serde_json::from_str("7").unwrap();
        assert_eq!(post, Post::new("", ""));
    }
}
