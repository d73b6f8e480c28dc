use chrono::NaiveDate;
use mockall::mock;

use classweek_core::models::slot::ScheduleSlot;

use crate::models::DbProfessor;

// Mock repositories for testing
mock! {
    pub SlotRepo {
        pub async fn default_slots(&self) -> eyre::Result<Vec<ScheduleSlot>>;

        pub async fn default_slots_for_block(
            &self,
            block_id: i64,
        ) -> eyre::Result<Vec<ScheduleSlot>>;

        pub async fn slots_for_professor(
            &self,
            assignment_ids: Vec<i64>,
            reference_date: NaiveDate,
        ) -> eyre::Result<Vec<ScheduleSlot>>;

        pub async fn canceled_or_exceptional_slots(
            &self,
            reference_date: NaiveDate,
        ) -> eyre::Result<Vec<ScheduleSlot>>;

        pub async fn canceled_or_exceptional_slots_for_block(
            &self,
            reference_date: NaiveDate,
            block_id: i64,
        ) -> eyre::Result<Vec<ScheduleSlot>>;
    }
}

mock! {
    pub ProfessorRepo {
        pub async fn get_professor_by_id(
            &self,
            id: i64,
        ) -> eyre::Result<Option<DbProfessor>>;

        pub async fn subject_assignment_ids_for_professor(
            &self,
            professor_id: i64,
        ) -> eyre::Result<Vec<i64>>;
    }
}
