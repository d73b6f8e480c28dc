//! # Slot Listing Handlers
//!
//! Raw record-set listings: default templates and dated overrides exactly
//! as stored, with no merging applied. The endpoints in
//! [`crate::handlers::week`] reconcile these sets into effective weeks.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use classweek_core::{
    errors::ScheduleError,
    models::slot::{SlotListResponse, SlotResponse},
};

use crate::{
    handlers::week::{anchor_week, WeekQuery},
    middleware::error_handling::AppError,
    ApiState,
};

/// Lists every perpetual template slot
///
/// # Endpoint
///
/// ```text
/// GET /api/slots/defaults
/// ```
#[axum::debug_handler]
pub async fn default_slots(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<SlotListResponse>, AppError> {
    let slots = classweek_db::repositories::schedule_slot::default_slots(&state.db_pool)
        .await
        .map_err(ScheduleError::Database)?;

    let response = SlotListResponse {
        slots: slots.into_iter().map(SlotResponse::from).collect(),
    };

    Ok(Json(response))
}

/// Lists the template slots of one teaching block
///
/// # Endpoint
///
/// ```text
/// GET /api/blocks/:block_id/slots/defaults
/// ```
#[axum::debug_handler]
pub async fn default_slots_for_block(
    State(state): State<Arc<ApiState>>,
    Path(block_id): Path<i64>,
) -> Result<Json<SlotListResponse>, AppError> {
    let slots = classweek_db::repositories::schedule_slot::default_slots_for_block(
        &state.db_pool,
        block_id,
    )
    .await
    .map_err(ScheduleError::Database)?;

    let response = SlotListResponse {
        slots: slots.into_iter().map(SlotResponse::from).collect(),
    };

    Ok(Json(response))
}

/// Lists the dated overrides falling in the week containing the reference
/// date
///
/// # Endpoint
///
/// ```text
/// GET /api/slots/overrides?date=2024-04-03
/// ```
///
/// Cancellations and exceptional substitutions both appear, exactly as
/// stored.
#[axum::debug_handler]
pub async fn overridden_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<WeekQuery>,
) -> Result<Json<SlotListResponse>, AppError> {
    let (reference_date, _) = anchor_week(&query)?;

    let slots = classweek_db::repositories::schedule_slot::canceled_or_exceptional_slots(
        &state.db_pool,
        reference_date,
    )
    .await
    .map_err(ScheduleError::Database)?;

    let response = SlotListResponse {
        slots: slots.into_iter().map(SlotResponse::from).collect(),
    };

    Ok(Json(response))
}

/// Lists the dated overrides of one teaching block for the week containing
/// the reference date
///
/// # Endpoint
///
/// ```text
/// GET /api/blocks/:block_id/slots/overrides?date=2024-04-03
/// ```
#[axum::debug_handler]
pub async fn overridden_slots_for_block(
    State(state): State<Arc<ApiState>>,
    Path(block_id): Path<i64>,
    Query(query): Query<WeekQuery>,
) -> Result<Json<SlotListResponse>, AppError> {
    let (reference_date, _) = anchor_week(&query)?;

    let slots = classweek_db::repositories::schedule_slot::canceled_or_exceptional_slots_for_block(
        &state.db_pool,
        reference_date,
        block_id,
    )
    .await
    .map_err(ScheduleError::Database)?;

    let response = SlotListResponse {
        slots: slots.into_iter().map(SlotResponse::from).collect(),
    };

    Ok(Json(response))
}
