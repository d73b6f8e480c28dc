//! # Effective Week Handlers
//!
//! This module contains the handlers that assemble the *effective* schedule
//! of a week: the default weekly slots with that week's cancellations and
//! exceptional substitutions already applied.
//!
//! ## Resolution Flow
//!
//! Each handler follows the same fetch-then-merge flow:
//!
//! 1. Anchor the Monday-to-Sunday week on the reference date (an explicit
//!    `?date=` query parameter, or today when omitted)
//! 2. Fetch the default slots and the week's flagged overrides from the store
//! 3. Delegate to [`classweek_core::resolver::resolve_effective_week`] for
//!    the precedence rules
//! 4. Return the merged slots together with the week boundaries
//!
//! The handlers contain no precedence logic of their own; the resolver owns
//! the merge semantics and is covered by the core crate's tests.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::sync::Arc;

use classweek_core::{
    errors::{ScheduleError, ScheduleResult},
    models::slot::SlotResponse,
    models::week::{EffectiveWeekResponse, WeekWindow},
    resolver::resolve_effective_week,
};

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters shared by the week-scoped endpoints
///
/// # Fields
///
/// * `date` - Reference date anchoring the week; today when omitted. The
///   resolved week always runs from the Monday at or before this date
///   through the following Sunday.
#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    /// Reference date in `YYYY-MM-DD` form
    pub date: Option<NaiveDate>,
}

/// Anchors the resolution week on the query's reference date, today when
/// the query carries none. Reference dates too close to the edge of the
/// representable range to hold a full week are rejected as a validation
/// error.
pub(crate) fn anchor_week(query: &WeekQuery) -> ScheduleResult<(NaiveDate, WeekWindow)> {
    let reference_date = query.date.unwrap_or_else(|| Utc::now().date_naive());

    let week = WeekWindow::containing(reference_date).ok_or_else(|| {
        ScheduleError::Validation(format!(
            "Reference date {} is outside the supported range",
            reference_date
        ))
    })?;

    Ok((reference_date, week))
}

/// Resolves the effective schedule for the week containing the reference date
///
/// # Endpoint
///
/// ```text
/// GET /api/weeks/effective?date=2024-04-03
/// ```
///
/// The response carries the week boundaries and one slot per occupied
/// day/room/time key. Canceled occurrences are surfaced with
/// `is_canceled = true` rather than omitted, so callers can distinguish a
/// canceled class from a free slot.
#[axum::debug_handler]
pub async fn effective_week(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<WeekQuery>,
) -> Result<Json<EffectiveWeekResponse>, AppError> {
    // STEP 1: Anchor the week
    let (reference_date, week) = anchor_week(&query)?;

    // STEP 2: Fetch the candidate record sets
    let defaults = classweek_db::repositories::schedule_slot::default_slots(&state.db_pool)
        .await
        .map_err(ScheduleError::Database)?;

    let overrides = classweek_db::repositories::schedule_slot::canceled_or_exceptional_slots(
        &state.db_pool,
        reference_date,
    )
    .await
    .map_err(ScheduleError::Database)?;

    // STEP 3: Merge overrides onto defaults
    let slots = resolve_effective_week(defaults, overrides);

    // STEP 4: Build the response
    let response = EffectiveWeekResponse {
        week_start: week.start,
        week_end: week.end,
        slots: slots.into_iter().map(SlotResponse::from).collect(),
    };

    Ok(Json(response))
}

/// Resolves the effective schedule of one teaching block for the week
/// containing the reference date
///
/// # Endpoint
///
/// ```text
/// GET /api/blocks/:block_id/weeks/effective?date=2024-04-03
/// ```
///
/// Same semantics as [`effective_week`], with both record sets restricted
/// to the given block before the merge.
#[axum::debug_handler]
pub async fn effective_week_for_block(
    State(state): State<Arc<ApiState>>,
    Path(block_id): Path<i64>,
    Query(query): Query<WeekQuery>,
) -> Result<Json<EffectiveWeekResponse>, AppError> {
    // STEP 1: Anchor the week
    let (reference_date, week) = anchor_week(&query)?;

    // STEP 2: Fetch the candidate record sets, scoped to the block
    let defaults = classweek_db::repositories::schedule_slot::default_slots_for_block(
        &state.db_pool,
        block_id,
    )
    .await
    .map_err(ScheduleError::Database)?;

    let overrides =
        classweek_db::repositories::schedule_slot::canceled_or_exceptional_slots_for_block(
            &state.db_pool,
            reference_date,
            block_id,
        )
        .await
        .map_err(ScheduleError::Database)?;

    // STEP 3: Merge overrides onto defaults
    let slots = resolve_effective_week(defaults, overrides);

    // STEP 4: Build the response
    let response = EffectiveWeekResponse {
        week_start: week.start,
        week_end: week.end,
        slots: slots.into_iter().map(SlotResponse::from).collect(),
    };

    Ok(Json(response))
}
