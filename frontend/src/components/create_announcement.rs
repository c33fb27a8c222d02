//! Create-announcement dialog for a course page.
//!
//! Uses the same submission flow as the course dialog, always networked.
//! The course id and session token are fixed into the draft when the dialog
//! mounts; the title is not required here, matching the form's behavior on
//! the course page.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use common::model::announcement::{Announcement, AnnouncementDraft};

use crate::clock::BrowserClock;
use crate::submit::{self, FailurePolicy, Remote};

#[derive(Properties, PartialEq, Clone)]
pub struct CreateAnnouncementProps {
    pub course_id: String,

    /// Session token attached to the request body.
    #[prop_or_default]
    pub token: String,

    /// Receives the optimistic, clock-stamped local copy on submit.
    pub on_announcement_create: Callback<Announcement>,

    pub on_close: Callback<()>,

    #[prop_or_default]
    pub failure_policy: FailurePolicy,
}

pub enum Msg {
    UpdateTitle(String),
    UpdateDescription(String),
    Submit,
}

pub struct CreateAnnouncementComponent {
    draft: AnnouncementDraft,
}

impl Component for CreateAnnouncementComponent {
    type Message = Msg;
    type Properties = CreateAnnouncementProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            draft: AnnouncementDraft::new(props.course_id.clone(), props.token.clone()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateTitle(value) => {
                self.draft.title = value;
                true
            }
            Msg::UpdateDescription(value) => {
                self.draft.description = value;
                true
            }
            Msg::Submit => {
                let props = ctx.props();
                let strategy = Remote {
                    policy: props.failure_policy,
                };
                submit::submit(
                    &self.draft,
                    false,
                    &strategy,
                    &BrowserClock,
                    &props.on_announcement_create,
                    &props.on_close,
                );
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <form {onsubmit}>
                <h1 style="font-weight:bold;font-size:1.5rem;padding-bottom:2rem;">
                    { "Create Announcement" }
                </h1>
                <div style="margin-bottom:0.5rem;">
                    <label for="title" style="display:block;padding:0.5rem 0;font-weight:500;">
                        { "Announcement Title:" }
                    </label>
                    <input
                        type="text"
                        id="title"
                        name="title"
                        value={self.draft.title.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::UpdateTitle(input.value())
                        })}
                        style="display:block;width:100%;height:2rem;border:1px solid #d1d5db;border-radius:6px;"
                    />
                </div>
                <div style="margin-bottom:0.5rem;">
                    <label for="description" style="display:block;padding:0.5rem 0;font-weight:500;">
                        { "Description:" }
                    </label>
                    <textarea
                        id="description"
                        name="description"
                        rows="4"
                        value={self.draft.description.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            Msg::UpdateDescription(input.value())
                        })}
                        style="display:block;width:100%;border:1px solid #d1d5db;border-radius:6px;"
                    />
                </div>
                <button
                    type="submit"
                    style="width:100%;margin-top:2rem;padding:0.5rem;border:none;border-radius:6px;background:#4f46e5;color:#fff;cursor:pointer;"
                >
                    { "Create" }
                </button>
            </form>
        }
    }
}
