use serde::{Deserialize, Serialize};

/// A course as shown on the dashboard.
///
/// The backend owns the canonical record; copies appended locally after an
/// optimistic create carry a client-generated placeholder `id` that is never
/// replaced by the server-assigned one (a page reload re-derives the list
/// from the backend).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String, // UUID
    pub title: String,
    pub professor: String,
    pub location: String,
}

/// In-progress form input for a new course.
///
/// All fields start empty; the draft lives only while the create dialog is
/// open and is discarded on close.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CourseDraft {
    pub title: String,
    pub professor: String,
    pub location: String,
}
