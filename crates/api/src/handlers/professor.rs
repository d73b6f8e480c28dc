//! # Professor Schedule Handlers
//!
//! Slot lookup scoped to one professor through their subject assignments.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use classweek_core::{
    errors::ScheduleError,
    models::slot::SlotResponse,
    models::week::ProfessorSlotsResponse,
};

use crate::{
    handlers::week::{anchor_week, WeekQuery},
    middleware::error_handling::AppError,
    ApiState,
};

/// Lists the slots a professor teaches in the week containing the
/// reference date
///
/// # Endpoint
///
/// ```text
/// GET /api/professors/:professor_id/slots?date=2024-04-03
/// ```
///
/// Templates and the week's dated instances come back together, unmerged,
/// restricted to the professor's subject assignments. An unknown professor
/// id is a not-found error; a professor without assignments gets an empty
/// list.
#[axum::debug_handler]
pub async fn professor_slots(
    State(state): State<Arc<ApiState>>,
    Path(professor_id): Path<i64>,
    Query(query): Query<WeekQuery>,
) -> Result<Json<ProfessorSlotsResponse>, AppError> {
    let (reference_date, week) = anchor_week(&query)?;

    // Resolve the professor first so an unknown id maps to 404, not an
    // empty list
    let professor =
        classweek_db::repositories::professor::get_professor_by_id(&state.db_pool, professor_id)
            .await
            .map_err(ScheduleError::Database)?
            .ok_or_else(|| {
                ScheduleError::NotFound(format!("Professor with ID {} not found", professor_id))
            })?;

    let assignment_ids =
        classweek_db::repositories::professor::subject_assignment_ids_for_professor(
            &state.db_pool,
            professor.id,
        )
        .await
        .map_err(ScheduleError::Database)?;

    // A professor without subject assignments teaches nothing this week
    if assignment_ids.is_empty() {
        return Ok(Json(ProfessorSlotsResponse {
            professor_id: professor.id,
            week_start: week.start,
            week_end: week.end,
            slots: Vec::new(),
        }));
    }

    let slots = classweek_db::repositories::schedule_slot::slots_for_professor(
        &state.db_pool,
        assignment_ids,
        reference_date,
    )
    .await
    .map_err(ScheduleError::Database)?;

    let response = ProfessorSlotsResponse {
        professor_id: professor.id,
        week_start: week.start,
        week_end: week.end,
        slots: slots.into_iter().map(SlotResponse::from).collect(),
    };

    Ok(Json(response))
}
