//! About command: archive totals, date range and category breakdown.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use rk_core::render::{format_long_date, format_percent};
use rk_core::{ArchiveSummary, Category, ClassifiedPost};
use serde::Serialize;

use super::util::report_date;
use crate::config::ReportTimeZone;

fn category_label(category: Category) -> &'static str {
    match category {
        Category::CompletedEvent => "Completed events",
        Category::LiveEvent => "Live events",
        Category::Achievement => "Achievements",
        Category::Miscellaneous => "Miscellaneous",
    }
}

/// Formats the human-readable summary.
pub fn format_about(summary: &ArchiveSummary, tz: ReportTimeZone) -> String {
    let mut output = String::new();

    writeln!(output, "RUNKEEPER ARCHIVE").unwrap();
    writeln!(output, "─────────────────").unwrap();
    writeln!(output, "Posts:       {}", summary.total).unwrap();

    if summary.total == 0 {
        writeln!(output).unwrap();
        writeln!(output, "No posts in archive.").unwrap();
        return output;
    }

    let date = |t| format_long_date(report_date(t, tz));
    if let (Some(first), Some(last)) = (summary.earliest, summary.latest) {
        writeln!(output, "First post:  {}", date(first)).unwrap();
        writeln!(output, "Last post:   {}", date(last)).unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "BY CATEGORY").unwrap();
    writeln!(output, "───────────").unwrap();
    for category in Category::ALL {
        let count = summary.counts.get(category);
        let pct = format_percent(count, summary.total);
        writeln!(output, "{:<18}{count:>6}  ({pct})", category_label(category)).unwrap();
    }

    let completed = summary.counts.completed_event;
    writeln!(output).unwrap();
    writeln!(output, "WRITTEN").unwrap();
    writeln!(output, "───────").unwrap();
    writeln!(
        output,
        "{} of {completed} completed events include written text ({})",
        summary.completed_written,
        format_percent(summary.completed_written, completed)
    )
    .unwrap();

    output
}

// ========== JSON Output ==========

#[derive(Debug, Serialize)]
pub struct JsonAbout {
    pub total: usize,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    pub categories: Vec<JsonCategory>,
    pub written: JsonWritten,
}

#[derive(Debug, Serialize)]
pub struct JsonCategory {
    pub category: Category,
    pub count: usize,
    pub percent: String,
}

#[derive(Debug, Serialize)]
pub struct JsonWritten {
    pub completed_written: usize,
    pub percent_of_completed: String,
}

/// Formats the summary as JSON.
pub fn format_about_json(summary: &ArchiveSummary, tz: ReportTimeZone) -> Result<String> {
    let date = |t| report_date(t, tz).format("%Y-%m-%d").to_string();
    let about = JsonAbout {
        total: summary.total,
        first_date: summary.earliest.map(date),
        last_date: summary.latest.map(date),
        categories: Category::ALL
            .into_iter()
            .map(|category| JsonCategory {
                category,
                count: summary.counts.get(category),
                percent: format_percent(summary.counts.get(category), summary.total),
            })
            .collect(),
        written: JsonWritten {
            completed_written: summary.completed_written,
            percent_of_completed: format_percent(
                summary.completed_written,
                summary.counts.completed_event,
            ),
        },
    };

    Ok(serde_json::to_string_pretty(&about)?)
}

// ========== Public Interface ==========

/// Runs the about command.
pub fn run<W: Write>(
    writer: &mut W,
    posts: &[ClassifiedPost],
    tz: ReportTimeZone,
    json: bool,
) -> Result<()> {
    let summary = ArchiveSummary::compute(posts);

    if json {
        writeln!(writer, "{}", format_about_json(&summary, tz)?)?;
    } else {
        write!(writer, "{}", format_about(&summary, tz))?;
    }

    Ok(())
}
