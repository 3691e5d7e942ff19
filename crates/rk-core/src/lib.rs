//! Core domain logic for Runkeeper archive analysis.
//!
//! This crate contains the fundamental types and logic for:
//! - Classification: category, activity, distance and written text of a post
//! - Archive loading: reading exported posts from JSON or JSON Lines
//! - Statistics: category breakdowns and activity distance reports
//! - Search and rendering: written-text search and HTML result rows

mod activity;
pub mod archive;
mod category;
mod classify;
mod distance;
pub mod post;
pub mod render;
pub mod search;
pub mod stats;
mod written;

pub use activity::{ActivityType, detect_activity};
pub use archive::{ArchiveError, load_posts, load_posts_from_path};
pub use category::{Category, detect_category};
pub use classify::{Classification, ClassifiedPost, classify, classify_batch};
pub use distance::{KM_PER_MILE, parse_distance_miles};
pub use post::Post;
pub use search::search_written;
pub use stats::{ActivityReport, ArchiveSummary, CategoryCounts};
pub use written::{extract_written_text, is_template_only};
