//! Fake LLM provider for testing.
//!
//! Returns deterministic responses based on prompt matching, so tests run
//! without network access or API costs.

use super::{LlmError, LlmProvider};
use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

/// A fake LLM provider for testing.
///
/// Responses are matched by checking if the prompt contains a registered
/// substring. If no match is found, returns a default response or error.
#[derive(Debug)]
pub struct FakeProvider {
    /// Map of prompt substring -> response
    responses: RwLock<HashMap<String, String>>,
    /// Default response if no match found
    default_response: Option<String>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: Some("{}".to_string()),
        }
    }
}

impl FakeProvider {
    /// Create a new FakeProvider with no registered responses.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: None,
        }
    }

    /// Create a FakeProvider that returns a specific response for prompts
    /// containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(prompt_contains.to_string(), response.to_string());
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Create a FakeProvider with canned recipe and similar-suggestion
    /// responses that parse into the structured types.
    pub fn with_recipe_responses() -> Self {
        let mut provider = Self::new();

        // Recipe generation response
        provider.add_response(
            "generate one complete recipe",
            r#"{
                "name": "Fluffy Masala Omelette",
                "description": "A quick spiced omelette with a soft center.",
                "category": "Breakfast",
                "nutritional_tip": "Pair with whole-grain toast for slower-release energy.",
                "historical_fact": "Masala omelettes became a staple of Indian railway canteens in the early twentieth century.",
                "total_calories_kcal": 280,
                "prep_time_minutes": 15,
                "servings": 2,
                "ingredients": [
                    {"item": "eggs", "quantity": "4"},
                    {"item": "all-purpose flour", "quantity": "1 1/2 cups"},
                    {"item": "salt", "quantity": "a pinch"}
                ],
                "instructions": [
                    "Whisk the eggs with the flour and salt until smooth.",
                    "Cook in a 20cm nonstick pan over medium heat for 3 minutes per side."
                ]
            }"#,
        );

        // Similar-recipe suggestions response
        provider.add_response(
            "suggest three similar",
            r#"{
                "suggestions": ["Spiced Scrambled Eggs", "Vegetable Uttapam", "Besan Chilla"],
                "local_names": ["Anda Bhurji", "Uttapam", "Chilla"]
            }"#,
        );

        provider
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let responses = self.responses.read().unwrap();

        // Find first matching pattern (case-insensitive)
        let prompt_lower = prompt.to_lowercase();
        for (pattern, response) in responses.iter() {
            if prompt_lower.contains(&pattern.to_lowercase()) {
                return Ok(response.clone());
            }
        }

        // Return default or error
        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: No response configured for prompt (first 100 chars): {}",
                &prompt[..prompt.len().min(100)]
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
