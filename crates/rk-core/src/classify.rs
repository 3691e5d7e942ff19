//! Post classification.
//!
//! Every field is derived from the post text alone. The timestamp is carried
//! along for aggregation but never consulted here.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    ActivityType, ArchiveError, Category, Post, detect_activity, detect_category,
    extract_written_text, parse_distance_miles,
};

/// Facts derived from one post's text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub category: Category,
    pub activity_type: ActivityType,
    pub distance_miles: f64,
    pub written_text: String,
    pub is_written: bool,
}

impl Classification {
    pub const fn is_completed(&self) -> bool {
        matches!(self.category, Category::CompletedEvent)
    }
}

/// Classifies a single post text.
pub fn classify(text: &str) -> Classification {
    let category = detect_category(text);
    let written_text = extract_written_text(text);
    Classification {
        category,
        activity_type: detect_activity(text, category),
        distance_miles: parse_distance_miles(text, category),
        is_written: !written_text.is_empty(),
        written_text,
    }
}

/// A post together with its classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedPost {
    #[serde(flatten)]
    pub post: Post,
    pub classification: Classification,
}

impl ClassifiedPost {
    pub fn new(post: Post) -> Self {
        let classification = classify(&post.text);
        Self {
            post,
            classification,
        }
    }
}

/// Classifies a batch of posts, preserving order.
///
/// `None` means the loader produced no collection at all, which is a usage
/// error rather than an empty archive.
pub fn classify_batch(posts: Option<Vec<Post>>) -> Result<Vec<ClassifiedPost>, ArchiveError> {
    let posts = posts.ok_or(ArchiveError::AbsentBatch)?;
    let classified: Vec<ClassifiedPost> = posts.into_par_iter().map(ClassifiedPost::new).collect();
    tracing::debug!(count = classified.len(), "classified posts");
    Ok(classified)
}
