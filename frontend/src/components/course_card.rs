use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CourseCardProps {
    pub title: String,
    pub professor: String,
    pub location: String,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// Presentational dashboard card for one course.
pub struct CourseCard;

impl Component for CourseCard {
    type Message = ();
    type Properties = CourseCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CourseCard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <div
                onclick={props.onclick.clone()}
                style="width:16rem;padding:1rem;border:1px solid #e5e7eb;border-radius:8px;box-shadow:0 0 8px #eee;cursor:pointer;"
            >
                <h2 style="font-weight:bold;font-size:1.1rem;margin-bottom:0.5rem;">
                    { &props.title }
                </h2>
                <p style="margin:0 0 0.25rem 0;">{ &props.professor }</p>
                <p style="margin:0;color:#6b7280;">{ &props.location }</p>
            </div>
        }
    }
}
