//! LLM provider abstraction for recipe generation.
//!
//! This module provides a trait-based abstraction over chat-completion
//! providers with support for disk caching and testing.

mod caching;
mod fake;
mod openai;

pub use caching::{CacheStats, CachingProvider};
pub use fake::FakeProvider;
pub use openai::OpenAiProvider;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}

/// Trait for LLM providers.
///
/// Implementations should be stateless and thread-safe. The provider is
/// responsible for making the API call and returning the model's text
/// response; callers own prompt rendering and response parsing.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a prompt to the LLM and get a text response.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Get the provider name (e.g., "openai", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "gpt-4o-mini").
    fn model_name(&self) -> &str;
}

/// Create a provider from environment variables.
///
/// - `SOUSCHEF_PROVIDER`: "openai" | "fake" (default "fake")
/// - `OPENAI_API_KEY`: API key, required for the openai provider
/// - `SOUSCHEF_MODEL`: model name (default "gpt-4o-mini")
/// - `SOUSCHEF_BASE_URL`: API base URL (default "https://api.openai.com/v1")
pub fn create_provider_from_env() -> Result<Box<dyn LlmProvider>, LlmError> {
    let provider = std::env::var("SOUSCHEF_PROVIDER").unwrap_or_else(|_| "fake".to_string());

    match provider.as_str() {
        "fake" => Ok(Box::new(FakeProvider::with_recipe_responses())),
        "openai" => {
            let api_key = std::env::var("OPENAI_API_KEY")
                .map_err(|_| LlmError::NotConfigured("OPENAI_API_KEY not set".to_string()))?;
            let model =
                std::env::var("SOUSCHEF_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
            let base_url = std::env::var("SOUSCHEF_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
            Ok(Box::new(OpenAiProvider::new(api_key, model, base_url)))
        }
        other => Err(LlmError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}

/// Create a provider with disk caching enabled.
///
/// Cache directory comes from `SOUSCHEF_CACHE_DIR`, defaulting to
/// `~/.souschef/llm-cache`.
pub fn create_cached_provider_from_env() -> Result<Box<dyn LlmProvider>, LlmError> {
    let inner = create_provider_from_env()?;

    let cache_dir = std::env::var("SOUSCHEF_CACHE_DIR")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_cache_dir());

    Ok(Box::new(CachingProvider::new(inner, cache_dir)))
}

fn default_cache_dir() -> std::path::PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".souschef").join("llm-cache"))
        .unwrap_or_else(|| std::path::PathBuf::from(".cache/llm"))
}
