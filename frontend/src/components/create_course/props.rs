//! Properties for the create-course dialog.

use yew::prelude::*;

use common::model::course::Course;

use crate::submit::{FailurePolicy, SubmitMode};

/// Configuration passed by the dashboard.
#[derive(Properties, PartialEq, Clone)]
pub struct CreateCourseProps {
    /// Receives the optimistic local copy the moment the form submits,
    /// before any network outcome is known.
    pub on_course_create: Callback<Course>,

    /// Fired after a submission is dispatched, and by the host dialog's
    /// close affordance.
    pub on_close: Callback<()>,

    /// Whether submitting POSTs the draft or keeps it purely local.
    #[prop_or_default]
    pub mode: SubmitMode,

    /// What to do when the backend rejects the write.
    #[prop_or_default]
    pub failure_policy: FailurePolicy,

    /// Refuse a submission while the title is empty.
    #[prop_or(true)]
    pub require_title: bool,
}
