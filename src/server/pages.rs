//! Static portfolio pages, embedded at compile time.
//!
//! No parameters, no dynamic data. Unmatched routes fall through to
//! axum's default 404.

use axum::response::Html;

pub(super) async fn home() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

pub(super) async fn achievements() -> Html<&'static str> {
    Html(include_str!("../../assets/achievements.html"))
}

pub(super) async fn education() -> Html<&'static str> {
    Html(include_str!("../../assets/education.html"))
}

pub(super) async fn experience() -> Html<&'static str> {
    Html(include_str!("../../assets/experience.html"))
}

pub(super) async fn projects() -> Html<&'static str> {
    Html(include_str!("../../assets/projects.html"))
}

pub(super) async fn assistant() -> Html<&'static str> {
    Html(include_str!("../../assets/assistant.html"))
}
