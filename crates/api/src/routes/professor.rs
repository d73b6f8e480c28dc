use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/professors/:professor_id/slots",
        get(handlers::professor::professor_slots),
    )
}
