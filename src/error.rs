use thiserror::Error;

/// Custom error types for suggestbox
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestboxError {
    #[error("suggestion index {index} is out of range (collection length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no suggestion is currently selected")]
    NoSuggestionSelected,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
