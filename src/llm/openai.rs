use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::core::config::Settings;
use crate::core::errors::ApiError;
use super::provider::LlmProvider;
use super::types::ChatRequest;

/// Provider for any OpenAI-compatible API (`/v1/embeddings`,
/// `/v1/chat/completions`).
#[derive(Clone)]
pub struct OpenAiProvider {
    base_url: String,
    api_key: Option<String>,
    chat_model: String,
    embed_model: String,
    client: Client,
}

impl OpenAiProvider {
    pub fn new(settings: &Settings) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(ApiError::internal)?;

        Ok(Self {
            base_url: settings.llm_base_url.trim_end_matches('/').to_string(),
            api_key: settings.llm_api_key.clone(),
            chat_model: settings.chat_model.clone(),
            embed_model: settings.embed_model.clone(),
            client,
        })
    }

    fn request(&self, url: &str, body: &Value) -> reqwest::RequestBuilder {
        let mut builder = self.client.post(url).json(body);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }
        builder
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn health_check(&self) -> Result<bool, ApiError> {
        let url = format!("{}/v1/models", self.base_url);
        let mut builder = self.client.get(&url);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }
        match builder.send().await {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    async fn embed(&self, input: &str) -> Result<Vec<f32>, ApiError> {
        let url = format!("{}/v1/embeddings", self.base_url);
        let body = json!({
            "model": self.embed_model,
            "input": input,
        });

        let res = self
            .request(&url, &body)
            .send()
            .await
            .map_err(|e| ApiError::EmbeddingService(e.to_string()))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(ApiError::EmbeddingService(format!(
                "embeddings request failed ({}): {}",
                status, text
            )));
        }

        let payload: Value = res
            .json()
            .await
            .map_err(|e| ApiError::EmbeddingService(e.to_string()))?;

        let values = payload["data"][0]["embedding"]
            .as_array()
            .ok_or_else(|| {
                ApiError::EmbeddingService("response carried no embedding array".to_string())
            })?;

        let embedding: Vec<f32> = values
            .iter()
            .filter_map(|v| v.as_f64().map(|f| f as f32))
            .collect();

        if embedding.is_empty() {
            return Err(ApiError::EmbeddingService(
                "response carried an empty embedding".to_string(),
            ));
        }

        Ok(embedding)
    }

    async fn chat(&self, request: ChatRequest) -> Result<String, ApiError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let mut body = json!({
            "model": self.chat_model,
            "messages": request.messages,
            "stream": false,
        });

        if let Some(obj) = body.as_object_mut() {
            if let Some(t) = request.temperature { obj.insert("temperature".to_string(), json!(t)); }
            if let Some(t) = request.top_p { obj.insert("top_p".to_string(), json!(t)); }
            if let Some(t) = request.max_tokens { obj.insert("max_tokens".to_string(), json!(t)); }
        }

        let res = self
            .request(&url, &body)
            .send()
            .await
            .map_err(|e| ApiError::SynthesisService(e.to_string()))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(ApiError::SynthesisService(format!(
                "chat request failed ({}): {}",
                status, text
            )));
        }

        let payload: Value = res
            .json()
            .await
            .map_err(|e| ApiError::SynthesisService(e.to_string()))?;

        let content = payload["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                ApiError::SynthesisService("response carried no message content".to_string())
            })?
            .to_string();

        Ok(content)
    }
}
