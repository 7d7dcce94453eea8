use serde::Deserialize;

/// Required fields are modelled as `Option` so the handler can answer a
/// missing field with a 400 and a readable message instead of a
/// deserialization rejection. Timestamps arrive as RFC 3339 strings and
/// are parsed explicitly for the same reason.
#[derive(Deserialize)]
pub struct CreateLiveClassRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub meeting_link: Option<String>,
    pub students: Option<Vec<String>>,
}

/// Sparse patch: an absent field leaves the stored value untouched, a
/// supplied field overwrites it. Supplying `description: ""` clears the
/// description; the other string fields reject empty values.
#[derive(Deserialize)]
pub struct UpdateLiveClassRequest {
    pub class_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub meeting_link: Option<String>,
    pub students: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub struct DeleteLiveClassRequest {
    pub class_id: Option<String>,
}

#[derive(Deserialize)]
pub struct AskTutorRequest {
    pub question: Option<String>,
}
