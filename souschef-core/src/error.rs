use thiserror::Error;

use crate::llm::LlmError;

#[derive(Error, Debug, PartialEq)]
pub enum ScaleError {
    #[error("Servings must be at least 1, got {0}")]
    InvalidServings(u32),
}

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("LLM request failed: {0}")]
    Llm(#[from] LlmError),

    #[error("Failed to parse model response: {0}")]
    ParseError(String),

    #[error("Suggestion lists have mismatched lengths: {suggestions} titles, {local_names} local names")]
    MismatchedSuggestions {
        suggestions: usize,
        local_names: usize,
    },
}
