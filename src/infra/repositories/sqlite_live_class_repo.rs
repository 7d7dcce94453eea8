use crate::domain::{models::live_class::LiveClass, ports::LiveClassRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

pub struct SqliteLiveClassRepo {
    pool: SqlitePool,
}

impl SqliteLiveClassRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LiveClassRepository for SqliteLiveClassRepo {
    async fn create(&self, class: &LiveClass) -> Result<LiveClass, AppError> {
        sqlx::query_as::<_, LiveClass>(
            r#"INSERT INTO live_classes (
                id, title, description, start_time, end_time,
                instructor_id, meeting_link, status, students_json, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
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
            "SELECT * FROM live_classes WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_upcoming_for_student(&self, student_id: &str, now: DateTime<Utc>) -> Result<Vec<LiveClass>, AppError> {
        sqlx::query_as::<_, LiveClass>(
            r#"SELECT * FROM live_classes
               WHERE end_time > ?
                 AND EXISTS (
                     SELECT 1 FROM json_each(live_classes.students_json)
                     WHERE json_each.value = ?
                 )
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
               WHERE instructor_id = ? AND end_time > ?
               ORDER BY start_time ASC"#
        )
            .bind(instructor_id)
            .bind(now)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, class: &LiveClass) -> Result<LiveClass, AppError> {
        // instructor_id and created_at are immutable and deliberately
        // excluded from the SET list.
        sqlx::query_as::<_, LiveClass>(
            r#"UPDATE live_classes SET
                title=?, description=?, start_time=?, end_time=?,
                meeting_link=?, status=?, students_json=?
               WHERE id=? RETURNING *"#
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
        let result = sqlx::query("DELETE FROM live_classes WHERE id = ?")
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
