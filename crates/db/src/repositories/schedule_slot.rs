use crate::models::{into_domain_slots, DbScheduleSlot};
use chrono::NaiveDate;
use classweek_core::models::slot::ScheduleSlot;
use classweek_core::models::week::WeekWindow;
use eyre::{eyre, Result};
use sqlx::{Pool, Postgres};

pub async fn default_slots(pool: &Pool<Postgres>) -> Result<Vec<ScheduleSlot>> {
    tracing::debug!("Fetching default slots");

    let rows = sqlx::query_as::<_, DbScheduleSlot>(
        r#"
        SELECT id, day_of_week, start_time, end_time, default_day, date,
               exceptional_day, is_canceled, subject_assignment_id,
               classroom_id, block_id, created_at
        FROM schedule_slots
        WHERE date IS NULL
        ORDER BY day_of_week ASC, start_time ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    into_domain_slots(rows)
}

pub async fn default_slots_for_block(
    pool: &Pool<Postgres>,
    block_id: i64,
) -> Result<Vec<ScheduleSlot>> {
    tracing::debug!("Fetching default slots for block: {}", block_id);

    let rows = sqlx::query_as::<_, DbScheduleSlot>(
        r#"
        SELECT id, day_of_week, start_time, end_time, default_day, date,
               exceptional_day, is_canceled, subject_assignment_id,
               classroom_id, block_id, created_at
        FROM schedule_slots
        WHERE date IS NULL AND block_id = $1
        ORDER BY day_of_week ASC, start_time ASC
        "#,
    )
    .bind(block_id)
    .fetch_all(pool)
    .await?;

    into_domain_slots(rows)
}

pub async fn slots_for_professor(
    pool: &Pool<Postgres>,
    assignment_ids: Vec<i64>,
    reference_date: NaiveDate,
) -> Result<Vec<ScheduleSlot>> {
    let week = WeekWindow::containing(reference_date)
        .ok_or_else(|| eyre!("Reference date {} is outside the supported range", reference_date))?;

    tracing::debug!(
        "Fetching slots for {} subject assignments in week {} to {}",
        assignment_ids.len(),
        week.start,
        week.end
    );

    let rows = sqlx::query_as::<_, DbScheduleSlot>(
        r#"
        SELECT id, day_of_week, start_time, end_time, default_day, date,
               exceptional_day, is_canceled, subject_assignment_id,
               classroom_id, block_id, created_at
        FROM schedule_slots
        WHERE subject_assignment_id = ANY($1)
          AND (date IS NULL OR date BETWEEN $2 AND $3)
        ORDER BY day_of_week ASC, start_time ASC
        "#,
    )
    .bind(assignment_ids)
    .bind(week.start)
    .bind(week.end)
    .fetch_all(pool)
    .await?;

    into_domain_slots(rows)
}

pub async fn canceled_or_exceptional_slots(
    pool: &Pool<Postgres>,
    reference_date: NaiveDate,
) -> Result<Vec<ScheduleSlot>> {
    let week = WeekWindow::containing(reference_date)
        .ok_or_else(|| eyre!("Reference date {} is outside the supported range", reference_date))?;

    tracing::debug!("Fetching overrides in week {} to {}", week.start, week.end);

    let rows = sqlx::query_as::<_, DbScheduleSlot>(
        r#"
        SELECT id, day_of_week, start_time, end_time, default_day, date,
               exceptional_day, is_canceled, subject_assignment_id,
               classroom_id, block_id, created_at
        FROM schedule_slots
        WHERE date BETWEEN $1 AND $2
          AND (is_canceled = TRUE OR exceptional_day = TRUE)
        ORDER BY date ASC, start_time ASC
        "#,
    )
    .bind(week.start)
    .bind(week.end)
    .fetch_all(pool)
    .await?;

    into_domain_slots(rows)
}

pub async fn canceled_or_exceptional_slots_for_block(
    pool: &Pool<Postgres>,
    reference_date: NaiveDate,
    block_id: i64,
) -> Result<Vec<ScheduleSlot>> {
    let week = WeekWindow::containing(reference_date)
        .ok_or_else(|| eyre!("Reference date {} is outside the supported range", reference_date))?;

    tracing::debug!(
        "Fetching overrides for block {} in week {} to {}",
        block_id,
        week.start,
        week.end
    );

    let rows = sqlx::query_as::<_, DbScheduleSlot>(
        r#"
        SELECT id, day_of_week, start_time, end_time, default_day, date,
               exceptional_day, is_canceled, subject_assignment_id,
               classroom_id, block_id, created_at
        FROM schedule_slots
        WHERE block_id = $1
          AND date BETWEEN $2 AND $3
          AND (is_canceled = TRUE OR exceptional_day = TRUE)
        ORDER BY date ASC, start_time ASC
        "#,
    )
    .bind(block_id)
    .bind(week.start)
    .bind(week.end)
    .fetch_all(pool)
    .await?;

    into_domain_slots(rows)
}
