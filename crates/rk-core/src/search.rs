//! Search over user-written text.

use crate::ClassifiedPost;

/// Returns written posts whose extracted text contains `query`, ignoring case.
///
/// Only the written text is searched, never the raw post. An empty or
/// whitespace-only query matches nothing.
pub fn search_written<'a>(posts: &'a [ClassifiedPost], query: &str) -> Vec<&'a ClassifiedPost> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    posts
        .iter()
        .filter(|p| p.classification.is_written)
        .filter(|p| p.classification.written_text.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Post, classify_batch};

    fn archive() -> Vec<ClassifiedPost> {
        let posts = [
            "Just completed a 10.00 km bike ride - Beautiful morning by the lake! http://t.co/a",
            "Just completed a 5.00 mi run with Runkeeper! Check it out! http://t.co/b #runkeeper",
            "Just completed a 3.00 mi walk - Lake loop with the kids http://t.co/c",
            "Loving this new app feature!",
        ]
        .into_iter()
        .map(|text| Post::new(text, "2021-01-18T12:00:00Z"))
        .collect();
        classify_batch(Some(posts)).unwrap()
    }

    #[test]
    fn matches_case_insensitively() {
        let posts = archive();
        let hits = search_written(&posts, "LAKE");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].classification.written_text, "Beautiful morning by the lake!");
        assert_eq!(hits[1].classification.written_text, "Lake loop with the kids");
    }

    #[test]
    fn never_matches_raw_text() {
        let posts = archive();
        // Present in the raw text of every completed post but never in written text.
        assert!(search_written(&posts, "completed").is_empty());
        assert!(search_written(&posts, "runkeeper").is_empty());
        assert!(search_written(&posts, "t.co").is_empty());
    }

    #[test]
    fn query_is_trimmed() {
        let posts = archive();
        assert_eq!(search_written(&posts, "  feature  ").len(), 1);
    }

    #[test]
    fn empty_query_matches_nothing() {
        let posts = archive();
        assert!(search_written(&posts, "").is_empty());
        assert!(search_written(&posts, "   ").is_empty());
    }
}
