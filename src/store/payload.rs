//! Payload schema for biography chunks stored in Qdrant

use qdrant_client::qdrant::value::Kind;
use qdrant_client::qdrant::{ScoredPoint, Value as QdrantValue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A biography chunk returned from the vector store.
///
/// The payload is written by the ingestion script; `text` is the chunk
/// content that goes into the prompt, `section` and `chunk_index` exist
/// for diagnostics only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BioChunk {
    /// Chunk text content
    pub text: String,

    /// Biography section this chunk came from (if recorded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,

    /// Chunk index within the section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_index: Option<i64>,

    /// Similarity score from the search
    pub score: f32,
}

impl BioChunk {
    /// Build a chunk from a Qdrant search hit. A missing `text` payload
    /// yields an empty chunk rather than an error; the prompt assembly
    /// tolerates it.
    pub fn from_scored_point(point: ScoredPoint) -> Self {
        Self {
            text: payload_string(&point.payload, "text").unwrap_or_default(),
            section: payload_string(&point.payload, "section"),
            chunk_index: payload_integer(&point.payload, "chunk_index"),
            score: point.score,
        }
    }
}

fn payload_string(payload: &HashMap<String, QdrantValue>, key: &str) -> Option<String> {
    match payload.get(key).and_then(|v| v.kind.as_ref()) {
        Some(Kind::StringValue(s)) => Some(s.clone()),
        _ => None,
    }
}

fn payload_integer(payload: &HashMap<String, QdrantValue>, key: &str) -> Option<i64> {
    match payload.get(key).and_then(|v| v.kind.as_ref()) {
        Some(Kind::IntegerValue(i)) => Some(*i),
        _ => None,
    }
}
