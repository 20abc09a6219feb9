use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Service settings read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the OpenAI-compatible API (no trailing slash).
    pub llm_base_url: String,
    /// Bearer token sent with every request when present.
    pub llm_api_key: Option<String>,
    /// Model id used for chat completions.
    pub chat_model: String,
    /// Model id used for embeddings.
    pub embed_model: String,
    /// Timeout applied to every outbound HTTP call.
    pub request_timeout_secs: u64,
    /// Directory for rolling log files.
    pub log_dir: PathBuf,
}

impl Settings {
    pub fn from_env() -> Self {
        Settings {
            llm_base_url: env::var("LLM_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com".to_string())
                .trim_end_matches('/')
                .to_string(),
            llm_api_key: env::var("LLM_API_KEY").ok().filter(|k| !k.is_empty()),
            chat_model: env::var("LLM_CHAT_MODEL").unwrap_or_else(|_| "gpt-4".to_string()),
            embed_model: env::var("LLM_EMBED_MODEL")
                .unwrap_or_else(|_| "text-embedding-ada-002".to_string()),
            request_timeout_secs: env::var("LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|val| val.parse().ok())
                .unwrap_or(60),
            log_dir: env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("logs")),
        }
    }
}

/// Per-request chunking defaults, applied when the caller omits a field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Maximum chunk size in characters.
    pub chunk_size: usize,
    /// Overlap between consecutive chunks in characters.
    pub chunk_overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1024,
            chunk_overlap: 20,
        }
    }
}

/// Per-request query defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Number of chunks retrieved as context.
    pub top_k: usize,
    /// Sampling temperature, in [0, 1].
    pub temperature: f64,
    /// Nucleus-sampling cutoff, in [0, 1].
    pub top_p: f64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            top_k: 2,
            temperature: 0.1,
            top_p: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunking_defaults_match_documented_values() {
        let config = ChunkingConfig::default();
        assert_eq!(config.chunk_size, 1024);
        assert_eq!(config.chunk_overlap, 20);
    }

    #[test]
    fn query_defaults_match_documented_values() {
        let config = QueryConfig::default();
        assert_eq!(config.top_k, 2);
        assert!((config.temperature - 0.1).abs() < f64::EPSILON);
        assert!((config.top_p - 1.0).abs() < f64::EPSILON);
    }
}
