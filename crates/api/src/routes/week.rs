use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/weeks/effective", get(handlers::week::effective_week))
        .route(
            "/api/blocks/:block_id/weeks/effective",
            get(handlers::week::effective_week_for_block),
        )
}
