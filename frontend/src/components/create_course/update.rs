//! Update function for the create-course dialog.

use yew::prelude::*;

use common::model::course::CourseDraft;

use crate::clock::BrowserClock;
use crate::submit::{self, LocalOnly, Remote, SubmitMode, SubmitStrategy};

use super::messages::Msg;
use super::state::CreateCourseComponent;

/// Field edits mutate the draft with no validation; validation happens only
/// on `Msg::Submit`, which runs the shared submission flow and hands control
/// back to the parent through the prop callbacks.
pub fn update(
    component: &mut CreateCourseComponent,
    ctx: &Context<CreateCourseComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateTitle(value) => {
            component.draft.title = value;
            true
        }
        Msg::UpdateProfessor(value) => {
            component.draft.professor = value;
            true
        }
        Msg::UpdateLocation(value) => {
            component.draft.location = value;
            true
        }
        Msg::Submit => {
            let props = ctx.props();
            let strategy: Box<dyn SubmitStrategy<CourseDraft>> = match props.mode {
                SubmitMode::LocalOnly => Box::new(LocalOnly),
                SubmitMode::Remote => Box::new(Remote {
                    policy: props.failure_policy,
                }),
            };
            submit::submit(
                &component.draft,
                props.require_title,
                strategy.as_ref(),
                &BrowserClock,
                &props.on_course_create,
                &props.on_close,
            );
            // On acceptance the parent unmounts the dialog; on a rejected
            // empty title the form simply stays as it is.
            false
        }
    }
}
