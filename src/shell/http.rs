use axum::{Router, routing::post};
use tower_http::trace::TraceLayer;

use crate::adapters::inbound::http as purchase_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/purchase-tickets", post(purchase_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
