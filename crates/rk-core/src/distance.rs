//! Distance parsing for completed-event posts.

use std::sync::LazyLock;

use regex::Regex;

use crate::Category;

/// Kilometers per mile, as used to normalize metric distances.
pub const KM_PER_MILE: f64 = 1.609;

static DISTANCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(mi|mile|miles|km|kilometer|kilometers)\b").unwrap()
});

/// Returns the first distance mentioned in a completed-event post, in miles.
///
/// Kilometer values are divided by [`KM_PER_MILE`]. Posts of any other
/// category, or without a number followed by a distance unit, yield `0.0`.
pub fn parse_distance_miles(text: &str, category: Category) -> f64 {
    if category != Category::CompletedEvent {
        return 0.0;
    }

    let Some(caps) = DISTANCE_RE.captures(text) else {
        return 0.0;
    };

    let Ok(value) = caps[1].parse::<f64>() else {
        tracing::debug!(token = &caps[1], "unparseable distance value");
        return 0.0;
    };

    match caps[2].to_ascii_lowercase().as_str() {
        "mi" | "mile" | "miles" => value,
        _ => value / KM_PER_MILE,
    }
}
