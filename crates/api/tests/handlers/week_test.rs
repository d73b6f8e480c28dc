use chrono::NaiveDate;
use mockall::predicate;
use pretty_assertions::assert_eq;

use classweek_core::{
    errors::ScheduleError,
    models::slot::{DayOfWeek, SlotResponse},
    models::week::{EffectiveWeekResponse, WeekWindow},
    resolver::resolve_effective_week,
};

use crate::test_utils::{cancellation, substitution, template, TestContext};
use classweek_api::middleware::error_handling::AppError;

// Wrapper mirroring the effective week handler flow over mock repositories
async fn effective_week_wrapper(
    ctx: &mut TestContext,
    reference_date: NaiveDate,
) -> Result<EffectiveWeekResponse, AppError> {
    let week = WeekWindow::containing(reference_date).ok_or_else(|| {
        ScheduleError::Validation(format!(
            "Reference date {} is outside the supported range",
            reference_date
        ))
    })?;

    let defaults = ctx
        .slot_repo
        .default_slots()
        .await
        .map_err(ScheduleError::Database)?;

    let overrides = ctx
        .slot_repo
        .canceled_or_exceptional_slots(reference_date)
        .await
        .map_err(ScheduleError::Database)?;

    let slots = resolve_effective_week(defaults, overrides);

    Ok(EffectiveWeekResponse {
        week_start: week.start,
        week_end: week.end,
        slots: slots.into_iter().map(SlotResponse::from).collect(),
    })
}

// Wrapper mirroring the block-scoped effective week handler flow
async fn effective_week_for_block_wrapper(
    ctx: &mut TestContext,
    block_id: i64,
    reference_date: NaiveDate,
) -> Result<EffectiveWeekResponse, AppError> {
    let week = WeekWindow::containing(reference_date).ok_or_else(|| {
        ScheduleError::Validation(format!(
            "Reference date {} is outside the supported range",
            reference_date
        ))
    })?;

    let defaults = ctx
        .slot_repo
        .default_slots_for_block(block_id)
        .await
        .map_err(ScheduleError::Database)?;

    let overrides = ctx
        .slot_repo
        .canceled_or_exceptional_slots_for_block(reference_date, block_id)
        .await
        .map_err(ScheduleError::Database)?;

    let slots = resolve_effective_week(defaults, overrides);

    Ok(EffectiveWeekResponse {
        week_start: week.start,
        week_end: week.end,
        slots: slots.into_iter().map(SlotResponse::from).collect(),
    })
}

#[tokio::test]
async fn test_effective_week_applies_cancellation() {
    let mut ctx = TestContext::new();
    // Wednesday April 3rd 2024; its week runs April 1st through April 7th
    let reference_date = NaiveDate::from_ymd_opt(2024, 4, 3).unwrap();
    let monday = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();

    let defaults = vec![
        template(1, DayOfWeek::Monday, 101, 8),
        template(2, DayOfWeek::Tuesday, 101, 8),
    ];
    let overrides = vec![cancellation(50, DayOfWeek::Monday, 101, 8, monday)];

    ctx.slot_repo
        .expect_default_slots()
        .times(1)
        .returning(move || Ok(defaults.clone()));

    ctx.slot_repo
        .expect_canceled_or_exceptional_slots()
        .with(predicate::eq(reference_date))
        .times(1)
        .returning(move |_| Ok(overrides.clone()));

    let response = effective_week_wrapper(&mut ctx, reference_date)
        .await
        .expect("Failed to resolve effective week");

    assert_eq!(response.week_start, monday);
    assert_eq!(
        response.week_end,
        NaiveDate::from_ymd_opt(2024, 4, 7).unwrap()
    );
    assert_eq!(response.slots.len(), 2);

    let canceled = response
        .slots
        .iter()
        .find(|s| s.day_of_week == DayOfWeek::Monday)
        .unwrap();
    let untouched = response
        .slots
        .iter()
        .find(|s| s.day_of_week == DayOfWeek::Tuesday)
        .unwrap();

    assert_eq!(canceled.id, 50);
    assert!(canceled.is_canceled);
    assert_eq!(untouched.id, 2);
    assert!(!untouched.is_canceled);
}

#[tokio::test]
async fn test_effective_week_without_overrides_returns_defaults() {
    let mut ctx = TestContext::new();
    let reference_date = NaiveDate::from_ymd_opt(2024, 4, 3).unwrap();

    let defaults = vec![
        template(1, DayOfWeek::Monday, 101, 8),
        template(2, DayOfWeek::Friday, 102, 14),
    ];

    ctx.slot_repo
        .expect_default_slots()
        .times(1)
        .returning(move || Ok(defaults.clone()));

    ctx.slot_repo
        .expect_canceled_or_exceptional_slots()
        .times(1)
        .returning(|_| Ok(vec![]));

    let response = effective_week_wrapper(&mut ctx, reference_date)
        .await
        .expect("Failed to resolve effective week");

    assert_eq!(response.slots.len(), 2);
    assert!(response.slots.iter().all(|s| !s.is_canceled));
}

#[tokio::test]
async fn test_effective_week_for_block_applies_substitution() {
    let mut ctx = TestContext::new();
    let block_id = 3;
    let reference_date = NaiveDate::from_ymd_opt(2024, 4, 3).unwrap();
    let tuesday = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();

    let defaults = vec![template(1, DayOfWeek::Tuesday, 101, 8)];
    let overrides = vec![substitution(60, DayOfWeek::Tuesday, 101, 8, tuesday)];

    ctx.slot_repo
        .expect_default_slots_for_block()
        .with(predicate::eq(block_id))
        .times(1)
        .returning(move |_| Ok(defaults.clone()));

    ctx.slot_repo
        .expect_canceled_or_exceptional_slots_for_block()
        .with(predicate::eq(reference_date), predicate::eq(block_id))
        .times(1)
        .returning(move |_, _| Ok(overrides.clone()));

    let response = effective_week_for_block_wrapper(&mut ctx, block_id, reference_date)
        .await
        .expect("Failed to resolve effective week for block");

    assert_eq!(response.slots.len(), 1);
    assert_eq!(response.slots[0].id, 60);
    assert!(response.slots[0].exceptional_day);
}

#[tokio::test]
async fn test_effective_week_rejects_an_out_of_range_reference_date() {
    let mut ctx = TestContext::new();

    // No repository expectations: the date must be rejected before any fetch
    let result = effective_week_wrapper(&mut ctx, NaiveDate::MAX).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        ScheduleError::Validation(message) => {
            assert!(message.contains("outside the supported range"));
        }
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_effective_week_propagates_database_error() {
    let mut ctx = TestContext::new();
    let reference_date = NaiveDate::from_ymd_opt(2024, 4, 3).unwrap();

    ctx.slot_repo
        .expect_default_slots()
        .times(1)
        .returning(|| Err(eyre::eyre!("Connection refused")));

    let result = effective_week_wrapper(&mut ctx, reference_date).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        ScheduleError::Database(_) => {} // Expected
        e => panic!("Expected Database error, got: {:?}", e),
    }
}
