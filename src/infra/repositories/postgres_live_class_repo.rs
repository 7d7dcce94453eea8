use crate::domain::{models::live_class::LiveClass, ports::LiveClassRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

pub struct PostgresLiveClassRepo {
    pool: PgPool,
}

impl PostgresLiveClassRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LiveClassRepository for PostgresLiveClassRepo {
    async fn create(&self, class: &LiveClass) -> Result<LiveClass, AppError> {
        sqlx::query_as::<_, LiveClass>(
            r#"INSERT INTO live_classes (
                id, title, description, start_time, end_time,
                instructor_id, meeting_link, status, students_json, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *"#
        )
            .bind(&class.id)
            .bind(&class.title)
            .bind(&class.description)
            .bind(class.start_time)
            .bind(class.end_time)
            .bind(&class.instructor_id)
            .bind(&class.meeting_link)
            .bind(&class.status)
            .bind(&class.students_json)
            .bind(class.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<LiveClass>, AppError> {
        sqlx::query_as::<_, LiveClass>(
            "SELECT * FROM live_classes WHERE id = $1",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_upcoming_for_student(&self, student_id: &str, now: DateTime<Utc>) -> Result<Vec<LiveClass>, AppError> {
        // The roster is a JSON text column; `?` is the jsonb key-exists
        // operator, which on an array tests string membership.
        sqlx::query_as::<_, LiveClass>(
            r#"SELECT * FROM live_classes
               WHERE end_time > $1
                 AND students_json::jsonb ? $2
               ORDER BY start_time ASC"#
        )
            .bind(now)
            .bind(student_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_upcoming_for_instructor(&self, instructor_id: &str, now: DateTime<Utc>) -> Result<Vec<LiveClass>, AppError> {
        sqlx::query_as::<_, LiveClass>(
            r#"SELECT * FROM live_classes
               WHERE instructor_id = $1 AND end_time > $2
               ORDER BY start_time ASC"#
        )
            .bind(instructor_id)
            .bind(now)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, class: &LiveClass) -> Result<LiveClass, AppError> {
        sqlx::query_as::<_, LiveClass>(
            r#"UPDATE live_classes SET
                title=$1, description=$2, start_time=$3, end_time=$4,
                meeting_link=$5, status=$6, students_json=$7
               WHERE id=$8 RETURNING *"#
        )
            .bind(&class.title)
            .bind(&class.description)
            .bind(class.start_time)
            .bind(class.end_time)
            .bind(&class.meeting_link)
            .bind(&class.status)
            .bind(&class.students_json)
            .bind(&class.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM live_classes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Live class not found".into()));
        }
        Ok(())
    }
}
