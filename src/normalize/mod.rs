//! Deterministic text cleanup producing the canonical form used for cache
//! keys and model input.
//!
//! Normalization is a pure function of the raw input and idempotent:
//! `normalize(normalize(x)) == normalize(x)`. Cleanup (URL/email/emoji
//! removal, punctuation and whitespace collapsing) runs before truncation so
//! a length cut never slices through a half-removed artifact.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::NormalizeError;

use std::sync::LazyLock;

use regex::Regex;

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://[^\s]+").expect("hard-coded pattern compiles"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
        .expect("hard-coded pattern compiles")
});

// Misc symbols & pictographs, emoticons, transport, and regional indicators.
static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{1F300}-\x{1F5FF}\x{1F600}-\x{1F64F}\x{1F680}-\x{1F6FF}\x{1F1E0}-\x{1F1FF}]")
        .expect("hard-coded pattern compiles")
});

static REPEATED_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([!?.]){2,}").expect("hard-coded pattern compiles"));

/// Canonical text form produced by [`TextNormalizer::normalize`].
///
/// Immutable by construction; the only way to obtain one is through the
/// normalizer, so a `NormalizedText` is always safe to hash into a cache key
/// or hand to the model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Returns the canonical string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the canonical string.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Length of the canonical string in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: empty output fails normalization instead.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pure, deterministic text cleanup.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    max_len: usize,
    lowercase: bool,
}

impl TextNormalizer {
    /// Creates a normalizer clamping output to `max_len` bytes.
    ///
    /// `lowercase` folds case as a final cleanup step; it defaults to off in
    /// [`crate::config::Config`] because most transformer classifiers are
    /// case-aware.
    pub fn new(max_len: usize, lowercase: bool) -> Self {
        Self { max_len, lowercase }
    }

    /// Normalizes `raw` into its canonical form.
    ///
    /// Strips URLs, email addresses, and emoji; collapses runs of `!?.` to a
    /// single mark and runs of whitespace to a single space; trims; optionally
    /// lowercases; then truncates to `max_len` bytes, rounding the cut down to
    /// the nearest `char` boundary.
    ///
    /// Fails with [`NormalizeError::Empty`] when cleanup leaves nothing to
    /// score.
    pub fn normalize(&self, raw: &str) -> Result<NormalizedText, NormalizeError> {
        let text = URL.replace_all(raw, " ");
        let text = EMAIL.replace_all(&text, " ");
        let text = EMOJI.replace_all(&text, " ");
        let text = REPEATED_PUNCT.replace_all(&text, "$1");

        let mut text = text
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        if self.lowercase {
            text = text.to_lowercase();
        }

        if text.len() > self.max_len {
            let mut cut = self.max_len;
            while !text.is_char_boundary(cut) {
                cut -= 1;
            }
            text.truncate(cut);
            let trimmed_len = text.trim_end().len();
            text.truncate(trimmed_len);
        }

        if text.is_empty() {
            return Err(NormalizeError::Empty);
        }

        Ok(NormalizedText(text))
    }
}
