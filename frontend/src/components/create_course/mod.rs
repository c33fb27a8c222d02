//! Create-course dialog: root module wiring the Yew `Component`
//! implementation with submodules for props, state, messages, update logic,
//! and view rendering.
//!
//! The dialog owns a [`common::model::course::CourseDraft`] for as long as
//! it is mounted and drives it through the shared flow in [`crate::submit`]:
//! optimistic append via `on_course_create`, strategy dispatch, then
//! `on_close`, regardless of how the network call ends. The draft is
//! discarded on unmount, so nothing persists across opens.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CreateCourseProps;
pub use state::CreateCourseComponent;

impl Component for CreateCourseComponent {
    type Message = Msg;
    type Properties = CreateCourseProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CreateCourseComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
