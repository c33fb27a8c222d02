use serde::Serialize;

use crate::model::announcement::AnnouncementDraft;
use crate::model::course::CourseDraft;

/// Request payload for `POST /v1/course/create`.
///
/// The backend names the professor field `teacherid`; the mapping from the
/// draft's `professor` field happens here so the rest of the frontend can
/// keep the display name.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCourseRequest {
    pub title: String,
    pub teacherid: String,
}

impl From<&CourseDraft> for CreateCourseRequest {
    fn from(draft: &CourseDraft) -> Self {
        Self {
            title: draft.title.clone(),
            teacherid: draft.professor.clone(),
        }
    }
}

/// Request payload for `POST /v1/course/{id}/announcement/create`.
///
/// `media` is always sent, empty until attachments exist on the backend.
#[derive(Debug, Clone, Serialize)]
pub struct CreateAnnouncementRequest {
    pub courseid: String,
    pub token: String,
    pub title: String,
    pub description: String,
    pub media: Vec<String>,
}

impl From<&AnnouncementDraft> for CreateAnnouncementRequest {
    fn from(draft: &AnnouncementDraft) -> Self {
        Self {
            courseid: draft.course_id.clone(),
            token: draft.token.clone(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            media: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_body_maps_professor_to_teacherid() {
        let draft = CourseDraft {
            title: "Systems".to_string(),
            professor: "teacher-42".to_string(),
            location: String::new(),
        };
        let body = serde_json::to_string(&CreateCourseRequest::from(&draft)).unwrap();
        assert_eq!(body, r#"{"title":"Systems","teacherid":"teacher-42"}"#);
    }

    #[test]
    fn announcement_body_carries_course_id_token_and_empty_media() {
        let mut draft = AnnouncementDraft::new("course-7".to_string(), "tok-abc".to_string());
        draft.title = "Midterm moved".to_string();
        draft.description = "Now on Friday.".to_string();

        let req = CreateAnnouncementRequest::from(&draft);
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "courseid": "course-7",
                "token": "tok-abc",
                "title": "Midterm moved",
                "description": "Now on Friday.",
                "media": [],
            })
        );
    }
}
