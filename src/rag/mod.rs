//! RAG (Retrieval-Augmented Generation) module.
//!
//! This module provides:
//! - `chunker`: overlapping character-window document splitting
//! - `index`: the per-request in-memory `VectorIndex`
//! - `retriever`: cosine-similarity top-K scan
//! - `extractor`: tolerant line parsing of model output into `Character`s
//! - `pipeline`: orchestration over an injected `LlmProvider`

pub mod chunker;
pub mod extractor;
pub mod index;
pub mod pipeline;
pub mod retriever;

pub use chunker::{chunk, Chunk};
pub use extractor::{extract_characters, Character};
pub use index::{Node, VectorIndex};
pub use pipeline::{QueryParams, RagPipeline};
pub use retriever::{cosine_similarity, retrieve, ScoredNode};
