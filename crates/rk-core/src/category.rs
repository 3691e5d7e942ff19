//! Post category as the single source of truth for category tags.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Top-level intent of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    CompletedEvent,
    LiveEvent,
    Achievement,
    Miscellaneous,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Self; 4] = [
        Self::CompletedEvent,
        Self::LiveEvent,
        Self::Achievement,
        Self::Miscellaneous,
    ];

    /// Stable tag used in JSON output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CompletedEvent => "completed_event",
            Self::LiveEvent => "live_event",
            Self::Achievement => "achievement",
            Self::Miscellaneous => "miscellaneous",
        }
    }

    /// Maps a tag back to a category.
    ///
    /// Unrecognized tags fall into `Miscellaneous`, which is also where
    /// unclassifiable posts end up.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "completed_event" => Self::CompletedEvent,
            "live_event" => Self::LiveEvent,
            "achievement" => Self::Achievement,
            _ => Self::Miscellaneous,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&s))
    }
}

/// Ordered detection rules. The first rule whose pattern matches decides.
static CATEGORY_RULES: LazyLock<Vec<(Regex, Category)>> = LazyLock::new(|| {
    [
        (r"(?i)^(?:just (?:completed|posted)\b|completed my\b)", Category::CompletedEvent),
        (
            r"(?i)#rklive\b|\bright now\b|\bwatch my (?:run|ride|walk)\b|\blive (?:tracking|track)\b",
            Category::LiveEvent,
        ),
        (
            r"(?i)\bachiev(?:e|ed|ement)\b|\bpersonal (?:record|best)\b|\bnew\s*pr\b|\bgoal\b|#fitnessalerts\b|\b(?:record|badge)\b",
            Category::Achievement,
        ),
    ]
    .into_iter()
    .map(|(pattern, category)| (Regex::new(pattern).unwrap(), category))
    .collect()
});

/// Detects the category of a post from its text alone.
pub fn detect_category(text: &str) -> Category {
    CATEGORY_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map_or(Category::Miscellaneous, |(_, category)| *category)
}
