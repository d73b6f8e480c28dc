pub mod professor;
pub mod schedule_slot;
