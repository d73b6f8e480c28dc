use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/slots/defaults", get(handlers::slots::default_slots))
        .route(
            "/api/blocks/:block_id/slots/defaults",
            get(handlers::slots::default_slots_for_block),
        )
        .route(
            "/api/slots/overrides",
            get(handlers::slots::overridden_slots),
        )
        .route(
            "/api/blocks/:block_id/slots/overrides",
            get(handlers::slots::overridden_slots_for_block),
        )
}
