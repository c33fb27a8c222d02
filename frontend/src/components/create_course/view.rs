//! View rendering for the create-course dialog.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::messages::Msg;
use super::state::CreateCourseComponent;

/// Renders the heading, the three text fields, and the submit button.
pub fn view(component: &CreateCourseComponent, ctx: &Context<CreateCourseComponent>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form {onsubmit}>
            <h1 style="font-weight:bold;font-size:1.5rem;padding-bottom:2rem;">
                { "Create New Course" }
            </h1>
            { text_field(
                "title",
                "Course Name:",
                &component.draft.title,
                ctx.props().require_title,
                link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::UpdateTitle(input.value())
                }),
            ) }
            { text_field(
                "professor",
                "Professor:",
                &component.draft.professor,
                false,
                link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::UpdateProfessor(input.value())
                }),
            ) }
            { text_field(
                "location",
                "Location:",
                &component.draft.location,
                false,
                link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::UpdateLocation(input.value())
                }),
            ) }
            <button
                type="submit"
                style="width:100%;margin-top:2rem;padding:0.5rem;border:none;border-radius:6px;background:#4f46e5;color:#fff;cursor:pointer;"
            >
                { "Create" }
            </button>
        </form>
    }
}

fn text_field(
    id: &'static str,
    label: &'static str,
    value: &str,
    required: bool,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <div style="margin-bottom:0.5rem;">
            <label for={id} style="display:block;padding:0.5rem 0;font-weight:500;">
                { label }
            </label>
            <input
                type="text"
                id={id}
                name={id}
                value={value.to_string()}
                required={required}
                {oninput}
                style="display:block;width:100%;height:2rem;border:1px solid #d1d5db;border-radius:6px;"
            />
        </div>
    }
}
