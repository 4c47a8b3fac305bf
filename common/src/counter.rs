//! Case-insensitive keyword counting over a raw data file.

use crate::error::{Error, Result};
use regex::RegexBuilder;
use std::fs;
use std::path::Path;

/// Counts case-insensitive, non-overlapping occurrences of `word` anywhere
/// in the file at `path`.
pub fn count_occurrences(path: impl AsRef<Path>, word: &str) -> Result<usize> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let count = count_in_text(&content, word);
    tracing::debug!(path = %path.display(), word, count, "counted keyword");
    Ok(count)
}

/// Counts case-insensitive, non-overlapping occurrences of `word` in `text`.
/// An empty word never matches.
pub fn count_in_text(text: &str, word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }

    // An escaped literal always compiles; the size limit is the only way out.
    match RegexBuilder::new(&regex::escape(word))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.find_iter(text).count(),
        Err(err) => {
            tracing::warn!(error = %err, "keyword pattern rejected, falling back to lowercase scan");
            text.to_lowercase().matches(&word.to_lowercase()).count()
        }
    }
}
