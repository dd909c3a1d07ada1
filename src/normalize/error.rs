use thiserror::Error;

/// Errors returned by [`TextNormalizer::normalize`](super::TextNormalizer::normalize).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeError {
    /// Cleanup left no scoreable text (input was empty, whitespace, or made
    /// entirely of stripped artifacts).
    #[error("text is empty after cleanup")]
    Empty,
}
