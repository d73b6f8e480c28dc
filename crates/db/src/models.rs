use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use eyre::{eyre, Result};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use classweek_core::models::slot::{DayOfWeek, ScheduleSlot};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbScheduleSlot {
    pub id: i64,
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub default_day: bool,
    pub date: Option<NaiveDate>,
    pub exceptional_day: bool,
    pub is_canceled: bool,
    pub subject_assignment_id: i64,
    pub classroom_id: i64,
    pub block_id: i64,
    pub created_at: DateTime<Utc>,
}

impl DbScheduleSlot {
    /// Maps the stored row onto the domain model, decoding the weekday code.
    pub fn into_domain(self) -> Result<ScheduleSlot> {
        let day_of_week = DayOfWeek::from_code(self.day_of_week).ok_or_else(|| {
            eyre!(
                "Invalid day_of_week code {} on schedule slot {}",
                self.day_of_week,
                self.id
            )
        })?;

        Ok(ScheduleSlot {
            id: self.id,
            day_of_week,
            start_time: self.start_time,
            end_time: self.end_time,
            default_day: self.default_day,
            date: self.date,
            exceptional_day: self.exceptional_day,
            is_canceled: self.is_canceled,
            subject_assignment_id: self.subject_assignment_id,
            classroom_id: self.classroom_id,
            block_id: self.block_id,
        })
    }
}

/// Maps a fetched row set onto domain slots, failing on the first bad row.
pub fn into_domain_slots(rows: Vec<DbScheduleSlot>) -> Result<Vec<ScheduleSlot>> {
    rows.into_iter().map(DbScheduleSlot::into_domain).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbProfessor {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSubjectAssignment {
    pub id: i64,
    pub professor_id: i64,
    pub subject_id: i64,
    pub created_at: DateTime<Utc>,
}
