//! HTTP client for the course-management backend.
//!
//! Each create call maps one wire body from [`common::requests`] to its
//! endpoint and classifies the outcome. The functions return plain futures:
//! a caller may await them, drop them to cancel, or hand them to
//! `spawn_local` to detach (what the Remote submit strategy does).

use std::fmt;

use gloo_net::http::Request;

use common::requests::{CreateAnnouncementRequest, CreateCourseRequest};

/// Outcome classification for a create call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionError {
    /// The backend answered with a non-2xx status.
    HttpStatus(u16, String),
    /// The request could not be built, sent, or received.
    Transport(String),
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::HttpStatus(status, text) => {
                write!(f, "server responded {} {}", status, text)
            }
            SubmissionError::Transport(reason) => write!(f, "request failed: {}", reason),
        }
    }
}

/// Creates a course. The response body is ignored on success.
pub async fn create_course(body: &CreateCourseRequest) -> Result<(), SubmissionError> {
    post_json("/v1/course/create", body).await
}

/// Creates an announcement under its course.
pub async fn create_announcement(
    body: &CreateAnnouncementRequest,
) -> Result<(), SubmissionError> {
    let url = format!("/v1/course/{}/announcement/create", body.courseid);
    post_json(&url, body).await
}

async fn post_json<B: serde::Serialize>(url: &str, body: &B) -> Result<(), SubmissionError> {
    let response = Request::post(url)
        .json(body)
        .map_err(|err| SubmissionError::Transport(err.to_string()))?
        .send()
        .await
        .map_err(|err| SubmissionError::Transport(err.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(SubmissionError::HttpStatus(
            response.status(),
            response.status_text(),
        ))
    }
}
