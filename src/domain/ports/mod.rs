use crate::domain::models::{live_class::LiveClass, user::User};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait LiveClassRepository: Send + Sync {
    async fn create(&self, class: &LiveClass) -> Result<LiveClass, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<LiveClass>, AppError>;
    /// Classes whose roster contains `student_id` and that have not ended
    /// yet, ascending by start time.
    async fn list_upcoming_for_student(&self, student_id: &str, now: DateTime<Utc>) -> Result<Vec<LiveClass>, AppError>;
    /// Classes owned by `instructor_id` that have not ended yet, ascending
    /// by start time. Past classes are intentionally excluded.
    async fn list_upcoming_for_instructor(&self, instructor_id: &str, now: DateTime<Utc>) -> Result<Vec<LiveClass>, AppError>;
    async fn update(&self, class: &LiveClass) -> Result<LiveClass, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<User>, AppError>;
}

#[async_trait]
pub trait TutorService: Send + Sync {
    async fn answer(&self, api_key: &str, question: &str) -> Result<String, AppError>;
}
