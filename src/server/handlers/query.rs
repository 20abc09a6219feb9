use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::core::config::QueryConfig;
use crate::core::errors::ApiError;
use crate::rag::{Character, QueryParams, RagPipeline};
use crate::state::AppState;

use super::index::NodePayload;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub query: String,
    pub top_k: Option<usize>,
    pub nodes: Vec<NodePayload>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub characters: Vec<Character>,
}

pub async fn query_index(
    State(state): State<Arc<AppState>>,
    Json(request): Json<QueryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let defaults = QueryConfig::default();

    let params = QueryParams {
        query: request.query,
        top_k: request.top_k.unwrap_or(defaults.top_k),
        nodes: request
            .nodes
            .into_iter()
            .map(|node| (node.text, node.embedding))
            .collect(),
        temperature: request.temperature.unwrap_or(defaults.temperature),
        top_p: request.top_p.unwrap_or(defaults.top_p),
    };

    let pipeline = RagPipeline::new(state.llm.clone());
    let characters = pipeline.query(params).await?;

    tracing::info!("Extracted {} characters from response", characters.len());

    // Zero extracted characters is a normal outcome, returned as an empty list.
    Ok(Json(QueryResponse { characters }))
}
