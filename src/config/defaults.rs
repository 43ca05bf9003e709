//! Default values for configuration

/// Default bind host (reachable from the local network in dev)
pub fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

/// Default listen port
pub fn default_server_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000)
}

/// Default Qdrant gRPC URL for local development (port 6334, not 6333 REST)
pub fn default_qdrant_url() -> String {
    std::env::var("QDRANT_URL").unwrap_or_else(|_| "http://127.0.0.1:6334".to_string())
}

/// Default collection holding the biography chunks
pub fn default_collection_name() -> String {
    "mybio".to_string()
}

/// Default site owner name used in the prompt template
pub fn default_owner_name() -> String {
    "Sharique Khatri".to_string()
}

/// Default Cohere API base URL
pub fn default_cohere_base_url() -> String {
    "https://api.cohere.com".to_string()
}

/// Default environment variable name for the Cohere API key
pub fn default_api_key_env() -> String {
    "COHERE_API_KEY".to_string()
}

/// Default chat model
pub fn default_chat_model() -> String {
    "command-r-plus".to_string()
}

/// Default sampling temperature (low: less creative, more deterministic)
pub fn default_chat_temperature() -> f64 {
    0.4
}

/// Default embedding model
pub fn default_embedding_model() -> String {
    "embed-english-v3.0".to_string()
}

/// Default embedding dimension (must match model)
pub fn default_embedding_dimension() -> usize {
    1024
}

/// Default request timeout in seconds for hosted API calls
pub fn default_request_timeout() -> u64 {
    30
}

/// Default number of chunks retrieved per question
pub fn default_retrieval_top_k() -> usize {
    6
}
