//! Retrieval-augmented answering pipeline
//!
//! Given a validated question: embed it, retrieve the closest biography
//! chunks, assemble a labeled context block, and ask the chat model to
//! answer from that context alone.
//!
//! The pipeline is written against three small traits so every stage can
//! be stubbed in tests. [`RagBackend`] is the production wiring: it holds
//! the configuration and API key probed at boot and builds fresh clients
//! per request — no pooling, no caching across requests.

use crate::cohere::CohereClient;
use crate::config::Config;
use crate::error::Result;
use crate::store::{BioChunk, QdrantStore};
use async_trait::async_trait;
use tracing::debug;

/// Fixed advisory returned for blank questions.
pub const EMPTY_QUESTION_ANSWER: &str = "Please enter a question.";

/// Fixed advisory returned while the retrieval stack is unconfigured.
pub const UNCONFIGURED_ANSWER: &str = "The Q&A backend isn't configured on this server yet. \
     Set COHERE_API_KEY (and QDRANT_URL if Qdrant isn't local), then restart.";

/// Embeds a single query string.
#[async_trait]
pub trait QueryEmbedder: Send + Sync {
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>>;
}

/// Similarity search over the stored biography chunks.
#[async_trait]
pub trait BioSearch: Send + Sync {
    async fn search(&self, query_vector: Vec<f32>, limit: usize) -> Result<Vec<BioChunk>>;
}

/// Generates answer text from a filled prompt.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// What the `/ask` handler calls. One method; failures are formatted into
/// the user-facing answer string at that boundary, not here.
#[async_trait]
pub trait AnswerBackend: Send + Sync {
    async fn answer(&self, question: &str) -> Result<String>;
}

/// Concatenate retrieved chunks into the context block: each chunk gets a
/// 1-based `Source k:` label and a trailing blank line.
pub fn build_context(chunks: &[BioChunk]) -> String {
    let mut context = String::new();
    for (i, chunk) in chunks.iter().enumerate() {
        context.push_str(&format!("Source {}:\n{}\n\n", i + 1, chunk.text));
    }
    context
}

/// Fill the fixed prompt template. The model is told to answer only from
/// the context and to say so when the answer isn't there.
pub fn build_prompt(owner: &str, context: &str, question: &str) -> String {
    format!(
        "You have the following context about {owner}. \
         Answer accurately and concisely. If it's not in the context, say you don't know.\n\n\
         Context:\n{context}\n\nUser:\n{question}\n\nAnswer:"
    )
}

/// Run the full pipeline for one question. No retries; the first failure
/// propagates to the caller.
pub async fn answer_question(
    question: &str,
    embedder: &dyn QueryEmbedder,
    search: &dyn BioSearch,
    chat: &dyn ChatModel,
    owner: &str,
    top_k: usize,
) -> Result<String> {
    let query_vector = embedder.embed_query(question).await?;
    let chunks = search.search(query_vector, top_k).await?;
    debug!("Retrieved {} chunks for question", chunks.len());

    let context = build_context(&chunks);
    let prompt = build_prompt(owner, &context, question);
    chat.generate(&prompt).await
}

/// Production backend: configuration plus the API key found at boot.
///
/// Holding only config means every request builds its own Cohere client
/// and Qdrant handle, matching the no-pooling resource model.
pub struct RagBackend {
    config: Config,
    api_key: String,
}

impl RagBackend {
    /// Probe whether the retrieval stack is configured. `None` degrades
    /// `/ask` to the fixed advisory without ever touching the network.
    pub fn from_config(config: &Config) -> Option<Self> {
        let api_key = config.cohere_api_key()?;
        Some(Self {
            config: config.clone(),
            api_key,
        })
    }
}

#[async_trait]
impl AnswerBackend for RagBackend {
    async fn answer(&self, question: &str) -> Result<String> {
        let cohere = CohereClient::new(&self.config.cohere, &self.api_key)?;
        let store = QdrantStore::connect(&self.config.qdrant_url, &self.config.collection_name)?;

        answer_question(
            question,
            &cohere,
            &store,
            &cohere,
            &self.config.owner_name,
            self.config.retrieval.top_k,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn chunk(text: &str) -> BioChunk {
        BioChunk {
            text: text.to_string(),
            section: None,
            chunk_index: None,
            score: 0.9,
        }
    }

    struct FixedEmbedder;

    #[async_trait]
    impl QueryEmbedder for FixedEmbedder {
        async fn embed_query(&self, _text: &str) -> Result<Vec<f32>> {
            Ok(vec![0.1, 0.2, 0.3])
        }
    }

    struct FixedSearch(Vec<BioChunk>);

    #[async_trait]
    impl BioSearch for FixedSearch {
        async fn search(&self, _query_vector: Vec<f32>, limit: usize) -> Result<Vec<BioChunk>> {
            let mut chunks = self.0.clone();
            chunks.truncate(limit);
            Ok(chunks)
        }
    }

    struct FailingSearch;

    #[async_trait]
    impl BioSearch for FailingSearch {
        async fn search(&self, _query_vector: Vec<f32>, _limit: usize) -> Result<Vec<BioChunk>> {
            Err(Error::Connection("timeout".to_string()))
        }
    }

    struct EchoChat;

    #[async_trait]
    impl ChatModel for EchoChat {
        async fn generate(&self, prompt: &str) -> Result<String> {
            Ok(prompt.to_string())
        }
    }

    #[test]
    fn context_is_empty_for_no_chunks() {
        assert_eq!(build_context(&[]), "");
    }

    #[test]
    fn context_labels_chunks_in_order() {
        for n in 1..=6 {
            let chunks: Vec<BioChunk> =
                (1..=n).map(|i| chunk(&format!("chunk text {i}"))).collect();
            let context = build_context(&chunks);

            for i in 1..=n {
                let block = format!("Source {i}:\nchunk text {i}\n\n");
                assert!(
                    context.contains(&block),
                    "context for n={n} missing block {i}: {context:?}"
                );
            }
            assert!(!context.contains(&format!("Source {}:", n + 1)));

            // Labels appear in ascending order.
            let positions: Vec<usize> = (1..=n)
                .map(|i| context.find(&format!("Source {i}:")).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn prompt_contains_owner_context_and_question() {
        let prompt = build_prompt("Jane Doe", "Source 1:\nfact\n\n", "Who is Jane?");
        assert!(prompt.contains("context about Jane Doe"));
        assert!(prompt.contains("Context:\nSource 1:\nfact\n\n"));
        assert!(prompt.contains("User:\nWho is Jane?"));
        assert!(prompt.ends_with("Answer:"));
        assert!(prompt.contains("say you don't know"));
    }

    #[tokio::test]
    async fn pipeline_feeds_retrieved_context_to_the_model() {
        let search = FixedSearch(vec![chunk("born in Dubai"), chunk("studied CS")]);
        let prompt = answer_question("where born?", &FixedEmbedder, &search, &EchoChat, "Jane", 6)
            .await
            .unwrap();

        assert!(prompt.contains("Source 1:\nborn in Dubai"));
        assert!(prompt.contains("Source 2:\nstudied CS"));
        assert!(prompt.contains("User:\nwhere born?"));
    }

    #[tokio::test]
    async fn pipeline_respects_top_k() {
        let chunks: Vec<BioChunk> = (0..10).map(|i| chunk(&format!("c{i}"))).collect();
        let search = FixedSearch(chunks);
        let prompt = answer_question("q", &FixedEmbedder, &search, &EchoChat, "Jane", 6)
            .await
            .unwrap();

        assert!(prompt.contains("Source 6:"));
        assert!(!prompt.contains("Source 7:"));
    }

    #[tokio::test]
    async fn search_failure_propagates() {
        let err = answer_question("q", &FixedEmbedder, &FailingSearch, &EchoChat, "Jane", 6)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "ConnectionError");
        assert_eq!(err.to_string(), "timeout");
    }

    #[test]
    fn backend_is_absent_without_api_key() {
        let mut config = Config::default();
        // Point at an env var that is never set in the test environment.
        config.cohere.api_key_env = "FOLIO_TEST_KEY_THAT_IS_NOT_SET".to_string();
        assert!(RagBackend::from_config(&config).is_none());
    }

    #[test]
    fn backend_is_present_with_api_key() {
        let mut config = Config::default();
        config.cohere.api_key_env = "FOLIO_TEST_KEY_PRESENT".to_string();
        std::env::set_var("FOLIO_TEST_KEY_PRESENT", "secret");
        assert!(RagBackend::from_config(&config).is_some());
        std::env::remove_var("FOLIO_TEST_KEY_PRESENT");
    }
}
