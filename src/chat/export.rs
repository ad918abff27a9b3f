use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use super::turn::Turn;

/// JSON document written by `/export` and `devmate ask --json`.
#[derive(Debug, Serialize)]
pub struct TranscriptDocument<'a> {
    pub version: &'static str,
    pub turn_count: usize,
    pub turns: &'a [Turn],
}

impl<'a> TranscriptDocument<'a> {
    pub const fn new(turns: &'a [Turn]) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            turn_count: turns.len(),
            turns,
        }
    }
}

pub fn to_json(transcript: &[Turn]) -> Result<String> {
    serde_json::to_string_pretty(&TranscriptDocument::new(transcript))
        .context("Failed to serialize transcript")
}

/// Writes the transcript to `path` as pretty-printed JSON.
pub fn export_transcript(path: &Path, transcript: &[Turn]) -> Result<()> {
    let json = to_json(transcript)?;
    crate::fs::atomic_write(path, &json)
        .with_context(|| format!("Failed to write transcript: {}", path.display()))?;
    tracing::debug!(path = %path.display(), turns = transcript.len(), "transcript exported");
    Ok(())
}
