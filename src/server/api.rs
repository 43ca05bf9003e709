//! Handler for `POST /ask`.
//!
//! The only dynamic endpoint. Body handling mirrors the site's contract:
//! anything that doesn't parse as `{"query": "<text>"}` counts as a blank
//! question, blank questions get a 400 advisory without touching the
//! backend, and every pipeline failure is folded into the answer text of
//! a 200 response.

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use super::AppState;
use crate::rag::{EMPTY_QUESTION_ANSWER, UNCONFIGURED_ANSWER};

#[derive(Debug, Default, Deserialize)]
pub(super) struct AskRequest {
    #[serde(default)]
    query: String,
}

pub(super) async fn ask(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    // Malformed or missing JSON is treated as an empty question.
    let request: AskRequest = serde_json::from_slice(&body).unwrap_or_default();

    let question = request.query.trim();
    if question.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "answer": EMPTY_QUESTION_ANSWER })),
        );
    }

    let Some(backend) = &state.backend else {
        return (StatusCode::OK, Json(json!({ "answer": UNCONFIGURED_ANSWER })));
    };

    let answer = match backend.answer(question).await {
        Ok(text) => text,
        Err(e) => format!("Backend error: {}: {}", e.kind(), e),
    };

    (StatusCode::OK, Json(json!({ "answer": answer })))
}
