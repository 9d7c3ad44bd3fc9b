//! Callback API handlers.
//!
//! # Endpoints
//!
//! - `POST /callback` – the endpoint registered with VK's Callback API

use axum::{Router, routing::post};

use crate::state::AppState;

mod callback;

/// Build the Callback API router.
pub fn router() -> Router<AppState> {
    Router::new().route("/callback", post(callback::receive_callback))
}
