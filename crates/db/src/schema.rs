use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create professors table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS professors (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create subjects table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS subjects (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create subject_assignments table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS subject_assignments (
            id BIGSERIAL PRIMARY KEY,
            professor_id BIGINT NOT NULL REFERENCES professors(id),
            subject_id BIGINT NOT NULL REFERENCES subjects(id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT unique_professor_subject UNIQUE (professor_id, subject_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create classrooms table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS classrooms (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create blocks table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS blocks (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create schedule_slots table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schedule_slots (
            id BIGSERIAL PRIMARY KEY,
            day_of_week SMALLINT NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            default_day BOOLEAN NOT NULL DEFAULT FALSE,
            date DATE NULL,
            exceptional_day BOOLEAN NOT NULL DEFAULT FALSE,
            is_canceled BOOLEAN NOT NULL DEFAULT FALSE,
            subject_assignment_id BIGINT NOT NULL REFERENCES subject_assignments(id),
            classroom_id BIGINT NOT NULL REFERENCES classrooms(id),
            block_id BIGINT NOT NULL REFERENCES blocks(id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_time > start_time),
            CONSTRAINT valid_day_of_week CHECK (day_of_week BETWEEN 1 AND 7)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_schedule_slots_date ON schedule_slots(date);
        CREATE INDEX IF NOT EXISTS idx_schedule_slots_block_id ON schedule_slots(block_id);
        CREATE INDEX IF NOT EXISTS idx_schedule_slots_classroom_id ON schedule_slots(classroom_id);
        CREATE INDEX IF NOT EXISTS idx_schedule_slots_subject_assignment_id ON schedule_slots(subject_assignment_id);
        CREATE INDEX IF NOT EXISTS idx_subject_assignments_professor_id ON subject_assignments(professor_id);
        CREATE INDEX IF NOT EXISTS idx_subject_assignments_subject_id ON subject_assignments(subject_id);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
