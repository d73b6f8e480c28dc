use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Day of the week a slot occupies, stored as ISO codes 1..7 at the
/// data-access boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Decodes a stored weekday code (1 = Monday .. 7 = Sunday).
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            7 => Some(Self::Sunday),
            _ => None,
        }
    }

    /// The stored weekday code (1 = Monday .. 7 = Sunday).
    pub fn code(self) -> i16 {
        match self {
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
            Self::Sunday => 7,
        }
    }
}

/// One class schedule entry: either a perpetual weekly template (`date`
/// unset) or a dated instance that cancels or replaces a template's
/// occurrence on one concrete day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub id: i64,
    pub day_of_week: DayOfWeek,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub default_day: bool,
    pub date: Option<NaiveDate>,
    pub exceptional_day: bool,
    pub is_canceled: bool,
    pub subject_assignment_id: i64,
    pub classroom_id: i64,
    pub block_id: i64,
}

impl ScheduleSlot {
    /// Merge identity of the slot. Two slots with the same key occupy the
    /// same physical resource-timeslot; at most one survives resolution.
    pub fn key(&self) -> SlotKey {
        SlotKey {
            day_of_week: self.day_of_week,
            classroom_id: self.classroom_id,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }

    /// Perpetual template slot, recurs every matching weekday.
    pub fn is_template(&self) -> bool {
        self.date.is_none()
    }

    /// Dated substitution: replaces the template occupying this key on
    /// `date`, regardless of `is_canceled`.
    pub fn is_substitution(&self) -> bool {
        self.date.is_some() && self.exceptional_day
    }

    /// Dated suppression: the template's occurrence on `date` is not taught
    /// and nothing replaces it.
    pub fn is_cancellation(&self) -> bool {
        self.date.is_some() && self.is_canceled && !self.exceptional_day
    }
}

/// Physical resource-timeslot identity used to match dated instances to the
/// templates they override. Field-wise equality and ordering; the derived
/// `Ord` fixes the resolver's output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey {
    pub day_of_week: DayOfWeek,
    pub classroom_id: i64,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotResponse {
    pub id: i64,
    pub day_of_week: DayOfWeek,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub default_day: bool,
    pub date: Option<NaiveDate>,
    pub exceptional_day: bool,
    pub is_canceled: bool,
    pub subject_assignment_id: i64,
    pub classroom_id: i64,
    pub block_id: i64,
}

impl From<ScheduleSlot> for SlotResponse {
    fn from(slot: ScheduleSlot) -> Self {
        Self {
            id: slot.id,
            day_of_week: slot.day_of_week,
            start_time: slot.start_time,
            end_time: slot.end_time,
            default_day: slot.default_day,
            date: slot.date,
            exceptional_day: slot.exceptional_day,
            is_canceled: slot.is_canceled,
            subject_assignment_id: slot.subject_assignment_id,
            classroom_id: slot.classroom_id,
            block_id: slot.block_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotListResponse {
    pub slots: Vec<SlotResponse>,
}
