//! Coach commentary for a single food.
//!
//! [`CommentaryClient::try_advise`] reports why a request failed;
//! [`CommentaryClient::advise`] is the outward contract and always returns
//! displayable text, substituting [`FALLBACK_ADVICE`] on any failure.

use crate::providers::traits::{CompletionError, CompletionProvider};
use log::{debug, warn};
use std::sync::Arc;

pub const FALLBACK_ADVICE: &str =
    "The AI coach is not available right now, so no commentary this time. Please try again later.";

#[derive(Clone)]
pub struct CommentaryClient {
    provider: Option<Arc<dyn CompletionProvider>>,
}

impl CommentaryClient {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Client with no credential. Every call falls back.
    pub fn unconfigured() -> Self {
        Self { provider: None }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub fn model(&self) -> Option<String> {
        self.provider.as_ref().map(|p| p.get_model_info())
    }

    pub fn build_prompt(
        food_name: &str,
        protein: f64,
        fat: f64,
        region_hint: Option<&str>,
    ) -> String {
        let mut prompt = format!(
            "You are a professional fitness coach with a light sense of humour. \
             Evaluate this food: {}. \
             Per 100g it contains {}g of protein and {}g of fat. \
             In one sentence, give your professional verdict and say whether it is suitable to eat during a fat-loss phase.",
            food_name, protein, fat
        );

        if let Some(region) = region_hint.map(str::trim).filter(|r| !r.is_empty()) {
            prompt.push_str(&format!(
                " The reader lives in {}; take the local eating habits there into account.",
                region
            ));
        }

        prompt
    }

    pub async fn try_advise(
        &self,
        food_name: &str,
        protein: f64,
        fat: f64,
        region_hint: Option<&str>,
    ) -> Result<String, CompletionError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(CompletionError::MissingCredential)?;

        let prompt = Self::build_prompt(food_name, protein, fat, region_hint);
        debug!("Requesting commentary for '{}' from {}", food_name, provider.get_model_info());

        let advice = provider.complete(&prompt).await?;
        let advice = advice.trim();
        if advice.is_empty() {
            return Err(CompletionError::Malformed("empty content".to_string()));
        }
        Ok(advice.to_string())
    }

    pub async fn advise(
        &self,
        food_name: &str,
        protein: f64,
        fat: f64,
        region_hint: Option<&str>,
    ) -> String {
        match self.try_advise(food_name, protein, fat, region_hint).await {
            Ok(advice) => advice,
            Err(e) => {
                match &e {
                    CompletionError::Authentication(status) => {
                        warn!("Commentary API rejected the credential (status {})", status)
                    }
                    CompletionError::NotFound => {
                        warn!("Commentary API endpoint not found, check DEEPSEEK_API_URL")
                    }
                    CompletionError::MissingCredential => {
                        warn!("DEEPSEEK_API_KEY not set, skipping commentary")
                    }
                    other => warn!("Commentary request failed ({}): {}", other.kind(), other),
                }
                FALLBACK_ADVICE.to_string()
            }
        }
    }
}
