//! Search command over user-written text.

use std::io::Write;

use anyhow::Result;
use rk_core::render::{activity_label, render_row};
use rk_core::{ClassifiedPost, search_written};

/// Runs the search command.
///
/// Prints the match count followed by one numbered row per match, either as
/// plain text or as HTML table rows.
pub fn run<W: Write>(writer: &mut W, posts: &[ClassifiedPost], query: &str, html: bool) -> Result<()> {
    let matches = search_written(posts, query);
    let written = posts.iter().filter(|p| p.classification.is_written).count();
    tracing::debug!(query, written, matches = matches.len(), "searched written posts");

    writeln!(
        writer,
        "{} matching \"{}\"",
        matches.len(),
        query.trim().to_lowercase()
    )?;

    for (i, post) in matches.iter().enumerate() {
        if html {
            writeln!(writer, "{}", render_row(post, i + 1))?;
        } else {
            writeln!(writer, "{:>3}  {:<10}  {}", i + 1, activity_label(post), post.post.text)?;
        }
    }

    Ok(())
}
