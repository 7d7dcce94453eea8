use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// One scheduled live-class instance: a fixed time window, the owning
/// instructor, and the roster of enrolled students.
///
/// The roster is persisted as a JSON array of user ids in `students_json`
/// so membership can be queried with the backend's JSON operators.
/// `status` is display-only metadata: it is set once at creation and no
/// code path here ever transitions it.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct LiveClass {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub instructor_id: String,
    pub meeting_link: String,
    pub status: String,
    pub students_json: String,
    pub created_at: DateTime<Utc>,
}

impl LiveClass {
    pub fn new(
        title: String,
        description: Option<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        instructor_id: String,
        meeting_link: String,
        students: &[String],
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            start_time,
            end_time,
            instructor_id,
            meeting_link,
            status: "Scheduled".to_string(),
            students_json: serde_json::to_string(students).unwrap_or_else(|_| "[]".to_string()),
            created_at: Utc::now(),
        }
    }

    pub fn students(&self) -> Vec<String> {
        serde_json::from_str(&self.students_json).unwrap_or_default()
    }

    pub fn set_students(&mut self, students: &[String]) {
        self.students_json = serde_json::to_string(students).unwrap_or_else(|_| "[]".to_string());
    }

    pub fn has_student(&self, user_id: &str) -> bool {
        self.students().iter().any(|s| s == user_id)
    }
}
