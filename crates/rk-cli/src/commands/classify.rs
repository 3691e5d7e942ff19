//! Classify command: every post with its derived facts as JSON Lines.

use std::io::{self, Write};

use anyhow::{Context, Result};
use rk_core::ClassifiedPost;

/// Writes one JSON object per post, in archive order.
///
/// Stops quietly when the reader goes away (e.g. piped to `head`).
pub fn run<W: Write>(writer: &mut W, posts: &[ClassifiedPost]) -> Result<()> {
    for post in posts {
        if let Err(e) = serde_json::to_writer(&mut *writer, post) {
            if e.io_error_kind() == Some(io::ErrorKind::BrokenPipe) {
                return Ok(());
            }
            return Err(e).context("failed to serialize post");
        }
        match writeln!(writer) {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => return Ok(()),
            result => result.context("failed to write post")?,
        }
    }
    match writer.flush() {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result.context("failed to flush output"),
    }
}
