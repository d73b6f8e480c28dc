use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::slot::SlotResponse;

/// Monday-through-Sunday window, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    /// The week containing `reference_date`: the Monday at or before it
    /// through the following Sunday. Derived from the reference date alone,
    /// never from the system clock.
    ///
    /// Returns `None` when the week would leave the range of representable
    /// dates, which only happens within a few days of that range's ends.
    pub fn containing(reference_date: NaiveDate) -> Option<Self> {
        let start = reference_date.checked_sub_signed(Duration::days(i64::from(
            reference_date.weekday().num_days_from_monday(),
        )))?;
        let end = start.checked_add_signed(Duration::days(6))?;

        Some(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectiveWeekResponse {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub slots: Vec<SlotResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessorSlotsResponse {
    pub professor_id: i64,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub slots: Vec<SlotResponse>,
}
