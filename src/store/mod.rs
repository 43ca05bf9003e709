//! Qdrant vector database integration
//!
//! This module wraps the Qdrant client for the one operation this site
//! needs: similarity search over the biography collection. The collection
//! is written by an offline ingestion script; folio only reads it.

mod payload;

pub use payload::*;

use crate::error::{Error, Result};
use crate::rag::BioSearch;
use async_trait::async_trait;
use qdrant_client::qdrant::SearchPointsBuilder;
use qdrant_client::Qdrant;
use tracing::debug;

/// Qdrant store handle
pub struct QdrantStore {
    client: Qdrant,
    collection: String,
}

impl QdrantStore {
    /// Connect to Qdrant. Construction is lazy — the first search performs
    /// the actual network round-trip.
    pub fn connect(url: &str, collection: &str) -> Result<Self> {
        debug!("Connecting to Qdrant at {}", url);

        let client = Qdrant::from_url(url)
            .skip_compatibility_check()
            .build()
            .map_err(|e| Error::Connection(e.to_string()))?;

        Ok(Self {
            client,
            collection: collection.to_string(),
        })
    }

    /// Search for the chunks closest to the query vector, relevance
    /// descending.
    pub async fn similarity_search(
        &self,
        query_vector: Vec<f32>,
        limit: usize,
    ) -> Result<Vec<BioChunk>> {
        debug!(
            "Searching collection {} with limit {}",
            self.collection, limit
        );

        let search = SearchPointsBuilder::new(&self.collection, query_vector, limit as u64)
            .with_payload(true);

        let response = self
            .client
            .search_points(search)
            .await
            .map_err(|e| Error::Search(e.to_string()))?;

        Ok(response
            .result
            .into_iter()
            .map(BioChunk::from_scored_point)
            .collect())
    }
}

#[async_trait]
impl BioSearch for QdrantStore {
    async fn search(&self, query_vector: Vec<f32>, limit: usize) -> Result<Vec<BioChunk>> {
        self.similarity_search(query_vector, limit).await
    }
}
