use chrono::NaiveDate;
use mockall::predicate;
use pretty_assertions::assert_eq;

use classweek_core::{
    errors::ScheduleError,
    models::slot::{DayOfWeek, SlotListResponse, SlotResponse},
    models::week::WeekWindow,
};

use crate::test_utils::{cancellation, template, TestContext};
use classweek_api::middleware::error_handling::AppError;

// Wrappers mirroring the listing handler flows over mock repositories

async fn default_slots_wrapper(ctx: &mut TestContext) -> Result<SlotListResponse, AppError> {
    let slots = ctx
        .slot_repo
        .default_slots()
        .await
        .map_err(ScheduleError::Database)?;

    Ok(SlotListResponse {
        slots: slots.into_iter().map(SlotResponse::from).collect(),
    })
}

async fn default_slots_for_block_wrapper(
    ctx: &mut TestContext,
    block_id: i64,
) -> Result<SlotListResponse, AppError> {
    let slots = ctx
        .slot_repo
        .default_slots_for_block(block_id)
        .await
        .map_err(ScheduleError::Database)?;

    Ok(SlotListResponse {
        slots: slots.into_iter().map(SlotResponse::from).collect(),
    })
}

async fn overridden_slots_wrapper(
    ctx: &mut TestContext,
    reference_date: NaiveDate,
) -> Result<SlotListResponse, AppError> {
    WeekWindow::containing(reference_date).ok_or_else(|| {
        ScheduleError::Validation(format!(
            "Reference date {} is outside the supported range",
            reference_date
        ))
    })?;

    let slots = ctx
        .slot_repo
        .canceled_or_exceptional_slots(reference_date)
        .await
        .map_err(ScheduleError::Database)?;

    Ok(SlotListResponse {
        slots: slots.into_iter().map(SlotResponse::from).collect(),
    })
}

#[tokio::test]
async fn test_default_slots_listing() {
    let mut ctx = TestContext::new();

    let defaults = vec![
        template(1, DayOfWeek::Monday, 101, 8),
        template(2, DayOfWeek::Wednesday, 102, 10),
    ];

    ctx.slot_repo
        .expect_default_slots()
        .times(1)
        .returning(move || Ok(defaults.clone()));

    let response = default_slots_wrapper(&mut ctx)
        .await
        .expect("Failed to list default slots");

    assert_eq!(response.slots.len(), 2);
    assert_eq!(response.slots[0].id, 1);
    assert_eq!(response.slots[1].id, 2);
    assert!(response.slots.iter().all(|s| s.date.is_none()));
}

#[tokio::test]
async fn test_default_slots_for_block_listing() {
    let mut ctx = TestContext::new();
    let block_id = 3;

    ctx.slot_repo
        .expect_default_slots_for_block()
        .with(predicate::eq(block_id))
        .times(1)
        .returning(|_| Ok(vec![template(4, DayOfWeek::Friday, 103, 14)]));

    let response = default_slots_for_block_wrapper(&mut ctx, block_id)
        .await
        .expect("Failed to list default slots for block");

    assert_eq!(response.slots.len(), 1);
    assert_eq!(response.slots[0].id, 4);
}

#[tokio::test]
async fn test_overridden_slots_listing() {
    let mut ctx = TestContext::new();
    let reference_date = NaiveDate::from_ymd_opt(2024, 4, 3).unwrap();
    let monday = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();

    ctx.slot_repo
        .expect_canceled_or_exceptional_slots()
        .with(predicate::eq(reference_date))
        .times(1)
        .returning(move |_| Ok(vec![cancellation(50, DayOfWeek::Monday, 101, 8, monday)]));

    let response = overridden_slots_wrapper(&mut ctx, reference_date)
        .await
        .expect("Failed to list overridden slots");

    assert_eq!(response.slots.len(), 1);
    assert_eq!(response.slots[0].id, 50);
    assert!(response.slots[0].is_canceled);
    assert_eq!(response.slots[0].date, Some(monday));
}

#[tokio::test]
async fn test_empty_listings_are_valid() {
    let mut ctx = TestContext::new();

    ctx.slot_repo
        .expect_default_slots()
        .times(1)
        .returning(|| Ok(vec![]));

    let response = default_slots_wrapper(&mut ctx)
        .await
        .expect("Failed to list default slots");

    assert!(response.slots.is_empty());
}
