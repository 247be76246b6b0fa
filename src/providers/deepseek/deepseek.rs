use async_trait::async_trait;
use crate::config::{ApiKey, ProviderConfig};
use crate::providers::traits::{CompletionError, CompletionProvider};
use reqwest::Client;
use serde_json::{json, Value};

/// Chat-completions client for DeepSeek and other OpenAI-compatible endpoints.
#[derive(Clone)]
pub struct DeepSeekProvider {
    api_key: ApiKey,
    client: Client,
    config: ProviderConfig,
}

impl DeepSeekProvider {
    pub fn new(api_key: ApiKey, config: ProviderConfig) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CompletionError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            client,
            config,
        })
    }
}

#[async_trait]
impl CompletionProvider for DeepSeekProvider {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let response = self.client
            .post(&self.config.api_url)
            .bearer_auth(self.api_key.expose())
            .json(&json!({
                "model": self.config.model,
                "messages": [
                    {
                        "role": "user",
                        "content": prompt
                    }
                ],
                "temperature": self.config.temperature
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(CompletionError::from_status(status.as_u16(), &error_text));
        }

        let body = response.text().await?;
        extract_content(&body)
    }

    fn get_model_info(&self) -> String {
        self.config.model.clone()
    }
}

/// Pulls `choices[0].message.content` out of a chat-completions response body.
pub fn extract_content(body: &str) -> Result<String, CompletionError> {
    let response_json: Value = serde_json::from_str(body)
        .map_err(|e| CompletionError::Malformed(format!("not JSON: {}", e)))?;

    // Check for API-level errors
    if let Some(error) = response_json.get("error") {
        return Err(CompletionError::Malformed(format!("API returned error: {}", error)));
    }

    let content = response_json
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .ok_or_else(|| CompletionError::Malformed("missing choices[0].message.content".to_string()))?;

    let content = content.trim();
    if content.is_empty() {
        return Err(CompletionError::Malformed("empty content".to_string()));
    }
    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"  Lean and mean.  "}},{"message":{"content":"second"}}]}"#;
        assert_eq!(extract_content(body).unwrap(), "Lean and mean.");
    }

    #[test]
    fn test_rejects_bodies_without_content() {
        for body in [
            "not json at all",
            r#"{"choices":[]}"#,
            r#"{"choices":[{"message":{"content":null}}]}"#,
            r#"{"choices":[{"message":{"content":"   "}}]}"#,
            r#"{"error":{"message":"quota exceeded"}}"#,
        ] {
            let err = extract_content(body).unwrap_err();
            assert_eq!(err.kind(), "malformed", "body: {}", body);
        }
    }

    #[test]
    fn test_model_info_comes_from_config() {
        let provider = DeepSeekProvider::new(
            ApiKey::new("sk-test").unwrap(),
            ProviderConfig::default(),
        )
        .unwrap();
        assert_eq!(provider.get_model_info(), "deepseek-chat");
    }
}
