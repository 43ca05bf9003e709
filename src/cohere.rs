//! Cohere API client
//!
//! Thin JSON-over-HTTP wrappers for the hosted embed and chat endpoints.
//! One client serves both roles in the pipeline: it implements
//! [`QueryEmbedder`] for `/v1/embed` and [`ChatModel`] for `/v1/chat`.

use crate::config::CohereConfig;
use crate::error::{Error, Result};
use crate::rag::{ChatModel, QueryEmbedder};
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Serialize)]
struct EmbedRequest {
    model: String,
    texts: Vec<String>,
    input_type: &'static str,
}

#[derive(Debug, Clone, Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

#[derive(Debug, Clone, Serialize)]
struct ChatRequest {
    model: String,
    message: String,
    temperature: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatResponse {
    text: String,
}

pub struct CohereClient {
    client: Client,
    base_url: Url,
    api_key: String,
    chat_model: String,
    temperature: f64,
    embedding_model: String,
    embedding_dimension: usize,
}

impl CohereClient {
    pub fn new(config: &CohereConfig, api_key: &str) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| Error::Config(format!("Invalid Cohere base URL: {}", e)))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;
        Ok(Self {
            client,
            base_url,
            api_key: api_key.to_string(),
            chat_model: config.chat_model.clone(),
            temperature: config.temperature,
            embedding_model: config.embedding_model.clone(),
            embedding_dimension: config.embedding_dimension,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::Config(format!("Invalid Cohere base URL: {}", e)))
    }

    /// POST a JSON body and parse the JSON response.
    ///
    /// Transport failures (DNS, refused, timed out) map to `Connection`;
    /// non-2xx statuses and malformed bodies map to the caller's kind.
    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        kind: fn(String) -> Error,
    ) -> Result<T> {
        let url = self.endpoint(path)?;
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;
        let response = response.error_for_status().map_err(|e| kind(e.to_string()))?;
        response.json::<T>().await.map_err(|e| kind(e.to_string()))
    }

    pub fn embedding_model(&self) -> &str {
        &self.embedding_model
    }

    pub fn chat_model(&self) -> &str {
        &self.chat_model
    }
}

#[async_trait]
impl QueryEmbedder for CohereClient {
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>> {
        let request = EmbedRequest {
            model: self.embedding_model.clone(),
            texts: vec![text.to_string()],
            input_type: "search_query",
        };

        let response: EmbedResponse = self
            .post_json("/v1/embed", &request, Error::Embedding)
            .await?;

        let vector = response
            .embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::Embedding("No embedding returned".to_string()))?;

        if vector.len() != self.embedding_dimension {
            return Err(Error::Embedding(format!(
                "Embedding dimension mismatch for model '{}': expected {}, got {}",
                self.embedding_model,
                self.embedding_dimension,
                vector.len()
            )));
        }

        Ok(vector)
    }
}

#[async_trait]
impl ChatModel for CohereClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.chat_model.clone(),
            message: prompt.to_string(),
            temperature: self.temperature,
        };

        let response: ChatResponse = self.post_json("/v1/chat", &request, Error::Chat).await?;
        Ok(response.text)
    }
}
