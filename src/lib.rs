//! # folio — personal portfolio site with a RAG assistant
//!
//! A small web server that serves a handful of static portfolio pages and
//! one dynamic endpoint: `POST /ask`, which answers free-text questions
//! about the site owner by retrieving the closest biography chunks from a
//! vector store and asking a hosted chat model to answer from that context.
//!
//! ## Modules
//!
//! - **[`config`]** — TOML configuration with env overrides for secrets
//! - **[`error`]** — error enum shared across the crate
//! - **[`cohere`]** — hosted embed + chat API client (JSON over HTTP)
//! - **[`store`]** — Qdrant vector search over the biography collection
//! - **[`rag`]** — the retrieval pipeline: embed, search, prompt, answer
//! - **[`server`]** — axum router: static pages plus `/ask`

pub mod cohere;
pub mod config;
pub mod error;
pub mod rag;
pub mod server;
pub mod store;
