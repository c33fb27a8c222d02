//! Component state for the create-course dialog.

use common::model::course::CourseDraft;

/// State container: just the in-progress draft.
pub struct CreateCourseComponent {
    pub draft: CourseDraft,
}

impl CreateCourseComponent {
    /// All draft fields start empty.
    pub fn new() -> Self {
        Self {
            draft: CourseDraft::default(),
        }
    }
}
