use crate::models::{DbProfessor, DbSubjectAssignment};
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn get_professor_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<DbProfessor>> {
    tracing::debug!("Getting professor by id: {}", id);

    let professor = sqlx::query_as::<_, DbProfessor>(
        r#"
        SELECT id, name, email, created_at
        FROM professors
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if let Some(p) = &professor {
        tracing::debug!("Professor found: id={}, name={}", p.id, p.name);
    } else {
        tracing::debug!("Professor not found: id={}", id);
    }

    Ok(professor)
}

pub async fn subject_assignment_ids_for_professor(
    pool: &Pool<Postgres>,
    professor_id: i64,
) -> Result<Vec<i64>> {
    let assignments = sqlx::query_as::<_, DbSubjectAssignment>(
        r#"
        SELECT id, professor_id, subject_id, created_at
        FROM subject_assignments
        WHERE professor_id = $1
        ORDER BY id ASC
        "#,
    )
    .bind(professor_id)
    .fetch_all(pool)
    .await?;

    Ok(assignments
        .into_iter()
        .map(|assignment| assignment.id)
        .collect())
}
