use serde::{Deserialize, Serialize};

/// An announcement in a course's feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String, // UUID
    pub title: String,
    pub date: String,
    pub description: String,
}

/// In-progress form input for a new announcement.
///
/// `course_id` and `token` are fixed from the course page when the dialog
/// opens; only `title` and `description` are edited by the user.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnnouncementDraft {
    pub course_id: String,
    pub token: String,
    pub title: String,
    pub description: String,
}

impl AnnouncementDraft {
    pub fn new(course_id: String, token: String) -> Self {
        Self {
            course_id,
            token,
            title: String::new(),
            description: String::new(),
        }
    }
}
