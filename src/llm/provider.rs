use async_trait::async_trait;

use crate::core::errors::ApiError;
use super::types::ChatRequest;

/// Boundary to the external language-model service.
///
/// The pipeline only needs two narrow operations: mapping text to an
/// embedding vector and completing a prompt. Keeping the trait this small
/// lets tests substitute deterministic stand-ins without any network.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// return the provider name (e.g. "openai")
    fn name(&self) -> &str;

    /// check if the provider is healthy/reachable
    async fn health_check(&self) -> Result<bool, ApiError>;

    /// embed a single text span into a fixed-length vector
    async fn embed(&self, input: &str) -> Result<Vec<f32>, ApiError>;

    /// chat completion (non-streaming)
    async fn chat(&self, request: ChatRequest) -> Result<String, ApiError>;
}
