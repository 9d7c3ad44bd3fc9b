//! `POST /callback` — receive one Callback API event.

use axum::Json;
use axum::extract::State;
use vkn_api::objects::CallbackEvent;

use crate::state::AppState;

/// Receives one callback event and returns the plain-text response the
/// Callback API expects: the confirmation token for `confirmation`
/// events, `ok` for everything else. The handler itself never fails;
/// malformed JSON is rejected by the extractor before it runs.
pub(super) async fn receive_callback(
    State(state): State<AppState>,
    Json(event): Json<CallbackEvent>,
) -> String {
    state.handler.handle(event).await
}
