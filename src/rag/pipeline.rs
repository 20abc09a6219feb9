use std::sync::Arc;

use futures_util::future::try_join_all;

use crate::core::errors::ApiError;
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};

use super::chunker::chunk;
use super::extractor::{extract_characters, Character};
use super::index::{Node, VectorIndex};
use super::retriever::retrieve;

/// Parameters for one query operation, assembled by the caller.
#[derive(Debug, Clone)]
pub struct QueryParams {
    pub query: String,
    pub top_k: usize,
    /// Caller-held (text, embedding) pairs from a previous build.
    pub nodes: Vec<(String, Vec<f32>)>,
    pub temperature: f64,
    pub top_p: f64,
}

/// Orchestrates the chunk → embed → index → retrieve → synthesize →
/// extract pipeline over an injected provider.
///
/// Stateless apart from the provider handle; every operation builds its
/// index from caller-supplied data and drops it on return.
pub struct RagPipeline {
    llm: Arc<dyn LlmProvider>,
}

impl RagPipeline {
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self { llm }
    }

    /// Chunk a document and embed every chunk, returning the nodes the
    /// caller must hold and resend on each query.
    ///
    /// Embedding calls fan out concurrently and are joined before the index
    /// is built; any failure aborts the whole build, so a partial node list
    /// is never returned.
    pub async fn build_nodes(
        &self,
        document: &str,
        chunk_size: usize,
        chunk_overlap: usize,
    ) -> Result<Vec<Node>, ApiError> {
        let chunks = chunk(document, chunk_size, chunk_overlap)?;
        tracing::debug!("Embedding {} chunks", chunks.len());

        let embeddings = try_join_all(chunks.iter().map(|c| self.llm.embed(&c.text))).await?;

        let pairs = chunks
            .into_iter()
            .map(|c| c.text)
            .zip(embeddings)
            .collect();

        let index = VectorIndex::build(pairs)?;
        Ok(index.into_nodes())
    }

    /// Answer a query over caller-supplied nodes and extract character
    /// records from the synthesized response.
    pub async fn query(&self, params: QueryParams) -> Result<Vec<Character>, ApiError> {
        validate_unit_interval("temperature", params.temperature)?;
        validate_unit_interval("topP", params.top_p)?;

        let index = VectorIndex::build(params.nodes)?;

        let query_embedding = self.llm.embed(&params.query).await?;
        let retrieved = retrieve(&index, &query_embedding, params.top_k)?;
        tracing::debug!(
            "Retrieved {} of {} nodes for synthesis",
            retrieved.len(),
            index.len()
        );

        let context: Vec<&str> = retrieved.iter().map(|s| s.node.text.as_str()).collect();
        let prompt = build_prompt(&context, &params.query);

        let request = ChatRequest::new(vec![ChatMessage::user(prompt)])
            .with_sampling(params.temperature, params.top_p);
        let response = self.llm.chat(request).await?;

        Ok(extract_characters(&response))
    }
}

fn validate_unit_interval(field: &str, value: f64) -> Result<(), ApiError> {
    if !(0.0..=1.0).contains(&value) || value.is_nan() {
        return Err(ApiError::BadRequest(format!(
            "{} must be within [0, 1], got {}",
            field, value
        )));
    }
    Ok(())
}

/// Frame retrieved chunk texts and the literal query into one prompt.
fn build_prompt(context: &[&str], query: &str) -> String {
    format!(
        "Context information is below.\n\
         ---------------------\n\
         {}\n\
         ---------------------\n\
         Given the context information and not prior knowledge, answer the query.\n\
         Query: {}\n\
         Answer:",
        context.join("\n\n"),
        query
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_context_and_literal_query() {
        let prompt = build_prompt(
            &["First chunk.", "Second chunk."],
            "Who are the characters?",
        );

        assert!(prompt.contains("First chunk.\n\nSecond chunk."));
        assert!(prompt.contains("Query: Who are the characters?"));
        assert!(prompt.ends_with("Answer:"));
    }

    #[test]
    fn prompt_with_no_context_still_carries_the_query() {
        let prompt = build_prompt(&[], "Who?");
        assert!(prompt.contains("Query: Who?"));
    }

    #[test]
    fn sampling_parameters_outside_unit_interval_are_rejected() {
        assert!(validate_unit_interval("temperature", 0.0).is_ok());
        assert!(validate_unit_interval("temperature", 1.0).is_ok());
        assert!(validate_unit_interval("temperature", -0.1).is_err());
        assert!(validate_unit_interval("topP", 1.5).is_err());
        assert!(validate_unit_interval("topP", f64::NAN).is_err());
    }
}
