use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{model::Message, AppState};

/// Answers `GET /json` once the configured delay has elapsed.
///
/// The timer is armed as soon as the handler starts. If the client goes away
/// during the wait, hyper drops this future together with the pending sleep,
/// so nothing is written and no other request is affected.
pub async fn json_handler(State(state): State<Arc<AppState>>) -> Json<Message> {
    tokio::time::sleep(state.config.response_delay).await;
    Json(Message::hello())
}
