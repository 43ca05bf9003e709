//! HTTP surface: the static portfolio pages plus `POST /ask`.
//!
//! The router carries one piece of state — the optional answer backend.
//! `None` means the retrieval configuration was missing at boot and `/ask`
//! degrades to a fixed advisory; everything else is static.

mod api;
mod pages;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tracing::info;

use crate::error::{Error, Result};
use crate::rag::AnswerBackend;

/// Router state injected into handlers via [`axum::extract::State`].
#[derive(Clone)]
pub struct AppState {
    /// Present only when the retrieval configuration was satisfied at boot.
    pub backend: Option<Arc<dyn AnswerBackend>>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/achievements", get(pages::achievements))
        .route("/education", get(pages::education))
        .route("/experience", get(pages::experience))
        .route("/projects", get(pages::projects))
        .route("/assistant", get(pages::assistant))
        .route("/ask", post(api::ask))
        .with_state(state)
}

pub async fn run_server(bind_addr: &str, state: AppState) -> Result<()> {
    let router = build_router(state);

    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|e| Error::Connection(format!("bind failed on {bind_addr}: {e}")))?;

    info!(%bind_addr, "folio listening");

    axum::serve(listener, router)
        .await
        .map_err(|e| Error::Connection(format!("server error: {e}")))?;

    Ok(())
}
