use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::core::config::ChunkingConfig;
use crate::core::errors::ApiError;
use crate::rag::RagPipeline;
use crate::state::AppState;

/// Wire shape of a node: the caller holds these and resends them with every
/// query, so ids stay server-internal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodePayload {
    pub text: String,
    pub embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildIndexRequest {
    pub document: String,
    pub chunk_size: Option<usize>,
    pub chunk_overlap: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct BuildIndexResponse {
    pub nodes: Vec<NodePayload>,
}

pub async fn build_index(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BuildIndexRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let defaults = ChunkingConfig::default();
    let chunk_size = request.chunk_size.unwrap_or(defaults.chunk_size);
    let chunk_overlap = request.chunk_overlap.unwrap_or(defaults.chunk_overlap);

    let pipeline = RagPipeline::new(state.llm.clone());
    let nodes = pipeline
        .build_nodes(&request.document, chunk_size, chunk_overlap)
        .await?;

    tracing::info!("Built {} nodes from document", nodes.len());

    let nodes = nodes
        .into_iter()
        .map(|node| NodePayload {
            text: node.text,
            embedding: node.embedding,
        })
        .collect();

    Ok(Json(BuildIndexResponse { nodes }))
}
