//! Loading posts from an exported archive.
//!
//! Archives are either a JSON array of `{text, created_at}` records or JSON
//! Lines with one record per line.

use std::fs;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::Post;

/// Archive loading errors.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// No post collection was supplied at all.
    #[error("No tweets returned")]
    AbsentBatch,

    /// The archive file could not be opened.
    #[error("failed to open archive {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The archive stream could not be read.
    #[error("failed to read archive")]
    Read(#[from] io::Error),

    /// The archive is a JSON document but not an array of posts.
    #[error("invalid archive JSON")]
    Json(#[from] serde_json::Error),
}

/// Reads an archive file.
///
/// A missing file means there is no batch to classify.
pub fn load_posts_from_path(path: &Path) -> Result<Vec<Post>, ArchiveError> {
    let file = match fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "archive file not found");
            return Err(ArchiveError::AbsentBatch);
        }
        Err(source) => {
            return Err(ArchiveError::Open {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    load_posts(file)
}

/// Reads posts from a JSON array or JSON Lines stream.
///
/// A JSON `null` document is an absent batch. Records with missing or
/// non-string fields are kept with empty fields. Lines in JSON Lines input
/// that are not valid JSON are skipped.
pub fn load_posts<R: Read>(reader: R) -> Result<Vec<Post>, ArchiveError> {
    let mut reader = BufReader::new(reader);
    match first_significant_byte(&mut reader)? {
        None => Ok(Vec::new()),
        Some(b'[' | b'n') => {
            let posts: Option<Vec<Post>> = serde_json::from_reader(reader)?;
            posts.ok_or(ArchiveError::AbsentBatch)
        }
        Some(_) => Ok(read_json_lines(reader)),
    }
}

/// Skips leading whitespace and returns the next byte without consuming it.
fn first_significant_byte<R: BufRead>(reader: &mut R) -> io::Result<Option<u8>> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(None);
        }
        let skip = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
        if skip < buf.len() {
            let byte = buf[skip];
            reader.consume(skip);
            return Ok(Some(byte));
        }
        let len = buf.len();
        reader.consume(len);
    }
}

fn read_json_lines<R: BufRead>(reader: R) -> Vec<Post> {
    let mut posts = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let Ok(line) = line_result else {
            continue;
        };

        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Post>(&line) {
            Ok(post) => posts.push(post),
            Err(e) => {
                tracing::debug!(
                    line = line_num + 1,
                    error = %e,
                    "skipping malformed line in archive"
                );
            }
        }
    }

    posts
}
