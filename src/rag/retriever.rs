use std::cmp::Ordering;

use crate::core::errors::ApiError;

use super::index::{Node, VectorIndex};

/// A node with its similarity score against one query.
#[derive(Debug, Clone)]
pub struct ScoredNode {
    pub node: Node,
    pub score: f32,
}

/// Cosine similarity between two vectors, clamped to [-1, 1].
///
/// Defined as 0.0 when either vector has zero norm, avoiding the division
/// by zero instead of erroring on degenerate embeddings.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| f64::from(*x) * f64::from(*y)).sum();
    let norm_a: f64 = a.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    ((dot / (norm_a * norm_b)).clamp(-1.0, 1.0)) as f32
}

/// Rank every node against the query and return the top `k`.
///
/// Brute-force O(n·D) scan; n is the chunk count of a single document, so
/// exact search is cheap and correct here. The function is pure over
/// `(index, query, k)`, so an approximate structure could replace the scan
/// behind the same contract.
///
/// The sort is stable and descending, so equal scores keep insertion order.
/// An index with fewer than `k` nodes returns all of them.
pub fn retrieve(
    index: &VectorIndex,
    query_embedding: &[f32],
    k: usize,
) -> Result<Vec<ScoredNode>, ApiError> {
    if k == 0 {
        return Err(ApiError::BadRequest(
            "topK must be at least 1".to_string(),
        ));
    }

    if index.is_empty() {
        return Ok(Vec::new());
    }

    if let Some(dim) = index.dim() {
        if query_embedding.len() != dim {
            return Err(ApiError::DimensionMismatch(format!(
                "query embedding has dimension {}, index has {}",
                query_embedding.len(),
                dim
            )));
        }
    }

    let mut scored: Vec<ScoredNode> = index
        .nodes()
        .iter()
        .map(|node| ScoredNode {
            node: node.clone(),
            score: cosine_similarity(query_embedding, &node.embedding),
        })
        .collect();

    scored.sort_by(|left, right| {
        right
            .score
            .partial_cmp(&left.score)
            .unwrap_or(Ordering::Equal)
    });
    scored.truncate(k);

    Ok(scored)
}
