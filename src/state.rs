use std::sync::Arc;

use crate::core::config::Settings;
use crate::core::errors::ApiError;
use crate::llm::{LlmProvider, OpenAiProvider};

/// Global application state shared across all routes.
///
/// Holds only immutable settings and the provider handle; requests share no
/// mutable state because every index is rebuilt from caller-supplied data.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub llm: Arc<dyn LlmProvider>,
}

impl AppState {
    pub fn initialize() -> Result<Arc<Self>, ApiError> {
        let settings = Settings::from_env();
        let llm: Arc<dyn LlmProvider> = Arc::new(OpenAiProvider::new(&settings)?);
        Ok(Arc::new(Self { settings, llm }))
    }
}
