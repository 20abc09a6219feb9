use serde::{Deserialize, Serialize};

use crate::core::errors::ApiError;

/// A chunk paired with its embedding, the atomic unit of the index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Sequential id, unique within one index build.
    pub id: usize,
    /// The chunk text.
    pub text: String,
    /// Embedding vector; every node in an index shares one dimensionality.
    pub embedding: Vec<f32>,
}

/// Ephemeral in-memory vector index.
///
/// Rebuilt per request from caller-supplied (text, embedding) pairs and
/// dropped when the request completes. Insertion order is preserved so
/// retrieval ties break deterministically.
#[derive(Debug, Clone, Default)]
pub struct VectorIndex {
    nodes: Vec<Node>,
}

impl VectorIndex {
    /// Build an index, assigning sequential ids in input order.
    ///
    /// All embeddings must share one dimensionality; an empty input is a
    /// valid (empty) index, not an error.
    pub fn build(pairs: Vec<(String, Vec<f32>)>) -> Result<Self, ApiError> {
        let mut nodes = Vec::with_capacity(pairs.len());
        let mut dim: Option<usize> = None;

        for (id, (text, embedding)) in pairs.into_iter().enumerate() {
            match dim {
                None => dim = Some(embedding.len()),
                Some(expected) if embedding.len() != expected => {
                    return Err(ApiError::DimensionMismatch(format!(
                        "node {} has embedding dimension {}, expected {}",
                        id,
                        embedding.len(),
                        expected
                    )));
                }
                Some(_) => {}
            }
            nodes.push(Node {
                id,
                text,
                embedding,
            });
        }

        Ok(Self { nodes })
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Consume the index, yielding its nodes in insertion order.
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    /// Shared embedding dimensionality, `None` when the index is empty.
    pub fn dim(&self) -> Option<usize> {
        self.nodes.first().map(|node| node.embedding.len())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
