//! Shared utilities for CLI commands.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
use rk_core::{ActivityReport, ArchiveError, ClassifiedPost, classify_batch, load_posts_from_path};

use crate::config::ReportTimeZone;

/// Loads and classifies the archive at `path`.
///
/// A missing archive is reported as the absent-batch error.
pub fn load_archive(path: &Path) -> anyhow::Result<Vec<ClassifiedPost>> {
    let posts = match load_posts_from_path(path) {
        Ok(posts) => Some(posts),
        Err(ArchiveError::AbsentBatch) => None,
        Err(e) => {
            return Err(e).with_context(|| format!("failed to load {}", path.display()));
        }
    };
    let classified = classify_batch(posts)?;
    tracing::debug!(path = %path.display(), posts = classified.len(), "loaded archive");
    Ok(classified)
}

/// Calendar date of a timestamp in the report time zone.
pub fn report_date(time: DateTime<FixedOffset>, tz: ReportTimeZone) -> NaiveDate {
    match tz {
        ReportTimeZone::Local => time.with_timezone(&Local).date_naive(),
        ReportTimeZone::Utc => time.with_timezone(&Utc).date_naive(),
    }
}

/// Computes the activity report with weekdays in the report time zone.
pub fn activity_report(posts: &[ClassifiedPost], tz: ReportTimeZone) -> ActivityReport {
    match tz {
        ReportTimeZone::Local => ActivityReport::compute(posts, &Local),
        ReportTimeZone::Utc => ActivityReport::compute(posts, &Utc),
    }
}
