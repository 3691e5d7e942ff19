//! Extraction of user-authored commentary from a post.
//!
//! Runkeeper posts are mostly generated from a handful of templates. The user
//! can add their own words, usually after a ` - ` separator. Extraction runs in
//! stages:
//!
//! 1. Posts that match a whole template carry no commentary.
//! 2. URLs, hashtags and mentions are blanked out.
//! 3. Known boilerplate phrases are removed anywhere they appear.
//! 4. Text after a ` - ` separator (before the first URL) wins if it is real text.
//! 5. Otherwise distances, durations, activity words and separators are removed.
//! 6. Whatever is left must contain a letter and be at least 3 characters.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// Whole-post templates with no user input.
static TEMPLATES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        // Completed activity.
        r"(?i)^just\s+(?:completed|posted)\s+a\b[\s\S]*?(?:with\s+@?runkeeper\.)?\s*check it out!?[\s\S]*https?://\S+\s*(?:#runkeeper\b)?\s*$",
        // Live activity, possibly followed by its hashtags.
        r"(?i)^(?:watch my (?:run|ride|walk|workout)\s+right now\b|.*#rklive\b)[\s\S]*https?://\S+(?:\s+#\w+)*\s*$",
        // Achievement alert.
        r"(?i)^achiev(?:e|ed|ement).*#fitnessalerts[\s\S]*https?://\S+\s*$",
    ]
    .map(|pattern| Regex::new(pattern).unwrap())
});

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)https?://\S+").unwrap());
static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\w+").unwrap());
static MENTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\w+").unwrap());

/// App-generated phrases that never count as commentary.
const BOILERPLATE: &[&str] = &[
    "Just completed a",
    "Just completed",
    "Just posted a",
    "Just posted",
    "with @Runkeeper",
    "with Runkeeper",
    "using Runkeeper",
    "from Runkeeper",
    "Check it out",
    "Watch my run right now",
    "Live",
    "Live tracking",
    "Achieved a new personal record",
    "personal record",
    "Distance goal",
    "Time goal",
    "MySports",
    "TomTom MySports Watch",
];

/// Literal, case-insensitive boilerplate matchers, longest phrase first.
static BOILERPLATE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let mut phrases = BOILERPLATE.to_vec();
    phrases.sort_by_key(|phrase| std::cmp::Reverse(phrase.len()));
    phrases
        .into_iter()
        .map(|phrase| {
            RegexBuilder::new(&regex::escape(phrase))
                .case_insensitive(true)
                .build()
                .unwrap()
        })
        .collect()
});

/// Dash segments that are device or workout names rather than commentary.
static DASH_BOILERPLATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:tomtom mysports watch|mysports freestyle|workout \d+|treadmill walking)$")
        .unwrap()
});

const DASH: &str = " - ";

/// Activity metadata stripped in the fallback path, applied in order.
static METADATA_RES: LazyLock<[Regex; 5]> = LazyLock::new(|| {
    [
        r"(?i)\b\d+(?:\.\d+)?\s*(?:km|kilometers?|mi|miles?)\b",
        r"\b\d+:\d{2}:\d{2}\b",
        r"\b\d+:\d{2}\b",
        r"(?i)\b(?:run|running|walk|walking|ride|bike|biking|cycling|swim|swimming|row|rowing|elliptical|hike|hiking|spinning|mtn\s*bike|activity|workout)\b",
        r"\s[-–—:]\s*",
    ]
    .map(|pattern| Regex::new(pattern).unwrap())
});

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Minimum length, in characters, of extracted commentary.
const MIN_WRITTEN_CHARS: usize = 3;

/// Returns the user-written portion of a post, or an empty string.
pub fn extract_written_text(text: &str) -> String {
    if is_template_only(text) {
        return String::new();
    }

    if let Some(segment) = dash_segment(text) {
        return segment.to_string();
    }

    let remainder = strip_metadata(&strip_boilerplate(&strip_links(text)));
    if !has_letter(&remainder) || remainder.chars().count() < MIN_WRITTEN_CHARS {
        return String::new();
    }
    remainder
}

/// Whether the post matches a template in full.
pub fn is_template_only(text: &str) -> bool {
    TEMPLATES.iter().any(|template| template.is_match(text))
}

fn strip_links(text: &str) -> String {
    let s = URL_RE.replace_all(text, " ");
    let s = HASHTAG_RE.replace_all(&s, " ");
    MENTION_RE.replace_all(&s, " ").into_owned()
}

fn strip_boilerplate(text: &str) -> String {
    BOILERPLATE_RES
        .iter()
        .fold(text.to_string(), |s, phrase| phrase.replace_all(&s, " ").into_owned())
}

/// Text after the first ` - ` in the part of the post preceding any URL.
fn dash_segment(text: &str) -> Option<&str> {
    let before_url = URL_RE.split(text).next().unwrap_or_default();
    let (_, right) = before_url.split_once(DASH)?;
    let right = right.trim();

    if right.is_empty() || DASH_BOILERPLATE_RE.is_match(right) || !has_letter(right) {
        return None;
    }
    Some(right)
}

fn strip_metadata(text: &str) -> String {
    let s = METADATA_RES
        .iter()
        .fold(text.to_string(), |s, re| re.replace_all(&s, " ").into_owned());
    WHITESPACE_RE.replace_all(&s, " ").trim().to_string()
}

fn has_letter(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_alphabetic())
}
