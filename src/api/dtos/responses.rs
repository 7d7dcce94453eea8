use crate::domain::models::{live_class::LiveClass, user::User};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Read-side projection of the owning instructor. Only display fields are
/// exposed.
#[derive(Serialize)]
pub struct InstructorInfo {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl InstructorInfo {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct LiveClassResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub instructor_id: String,
    pub meeting_link: String,
    pub status: String,
    pub students: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<InstructorInfo>,
}

impl LiveClassResponse {
    pub fn from_class(class: LiveClass, instructor: Option<&User>) -> Self {
        let students = class.students();
        Self {
            id: class.id,
            title: class.title,
            description: class.description,
            start_time: class.start_time,
            end_time: class.end_time,
            instructor_id: class.instructor_id,
            meeting_link: class.meeting_link,
            status: class.status,
            students,
            created_at: class.created_at,
            instructor: instructor.map(InstructorInfo::from_user),
        }
    }
}
