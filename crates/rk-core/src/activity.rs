//! Activity type detection for completed-event posts.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::Category;

/// Physical activity named in a completed-event post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Running,
    Cycling,
    Walking,
    Swimming,
    Rowing,
    Hiking,
    Elliptical,
    Yoga,
    Unknown,
}

impl ActivityType {
    /// Resolution order when several families appear in one post.
    pub const PRIORITY: [Self; 8] = [
        Self::Running,
        Self::Cycling,
        Self::Walking,
        Self::Swimming,
        Self::Rowing,
        Self::Hiking,
        Self::Elliptical,
        Self::Yoga,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
            Self::Walking => "walking",
            Self::Swimming => "swimming",
            Self::Rowing => "rowing",
            Self::Hiking => "hiking",
            Self::Elliptical => "elliptical",
            Self::Yoga => "yoga",
            Self::Unknown => "unknown",
        }
    }

    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Keywords mapped many-to-one onto activity families.
const KEYWORDS: &[(&str, ActivityType)] = &[
    ("run", ActivityType::Running),
    ("running", ActivityType::Running),
    ("walk", ActivityType::Walking),
    ("walking", ActivityType::Walking),
    ("bike", ActivityType::Cycling),
    ("biking", ActivityType::Cycling),
    ("ride", ActivityType::Cycling),
    ("cycling", ActivityType::Cycling),
    ("swim", ActivityType::Swimming),
    ("swimming", ActivityType::Swimming),
    ("row", ActivityType::Rowing),
    ("rowing", ActivityType::Rowing),
    ("hike", ActivityType::Hiking),
    ("hiking", ActivityType::Hiking),
    ("elliptical", ActivityType::Elliptical),
    ("yoga", ActivityType::Yoga),
];

static KEYWORD_PATTERNS: LazyLock<Vec<(Regex, ActivityType)>> = LazyLock::new(|| {
    KEYWORDS
        .iter()
        .map(|(word, activity)| {
            let pattern = format!(r"(?i)\b{word}\b");
            (Regex::new(&pattern).unwrap(), *activity)
        })
        .collect()
});

/// Detects the activity type of a post.
///
/// Only completed events carry an activity; every other category resolves to
/// `Unknown`. When keywords from several families are present, the family
/// earliest in [`ActivityType::PRIORITY`] wins.
pub fn detect_activity(text: &str, category: Category) -> ActivityType {
    if category != Category::CompletedEvent {
        return ActivityType::Unknown;
    }

    let found: HashSet<ActivityType> = KEYWORD_PATTERNS
        .iter()
        .filter(|(pattern, _)| pattern.is_match(text))
        .map(|(_, activity)| *activity)
        .collect();

    ActivityType::PRIORITY
        .into_iter()
        .find(|activity| found.contains(activity))
        .unwrap_or(ActivityType::Unknown)
}
