//! Course page: the announcement feed and its create dialog.

use yew::prelude::*;

use common::model::announcement::Announcement;
use common::model::course::Course;

use crate::components::create_announcement::CreateAnnouncementComponent;
use crate::modal::ModalHost;
use crate::store::ListStore;

#[derive(Properties, PartialEq, Clone)]
pub struct CoursePageProps {
    pub course: Course,

    /// Session token threaded through to announcement creation.
    #[prop_or_default]
    pub token: String,

    pub on_back: Callback<()>,
}

pub enum Msg {
    OpenCreate,
    CloseCreate,
    AnnouncementCreated(Announcement),
}

/// Holds the locally appended announcements for the displayed course. Like
/// the dashboard's course list, entries appear immediately on submit and are
/// only re-derived from the backend on a full reload.
pub struct CoursePage {
    announcements: ListStore<Announcement>,
    creating: bool,
}

impl Component for CoursePage {
    type Message = Msg;
    type Properties = CoursePageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            announcements: ListStore::new(),
            creating: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OpenCreate => {
                self.creating = true;
                true
            }
            Msg::CloseCreate => {
                self.creating = false;
                true
            }
            Msg::AnnouncementCreated(announcement) => {
                self.announcements.append(announcement);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let course = &ctx.props().course;

        html! {
            <div style="padding:2rem 8rem;">
                <button
                    onclick={ctx.props().on_back.reform(|_| ())}
                    style="margin-bottom:1rem;background:none;border:none;color:#4f46e5;cursor:pointer;"
                >
                    { "< Back to dashboard" }
                </button>
                <h1 style="font-weight:bold;font-size:1.5rem;">{ &course.title }</h1>
                <p style="color:#6b7280;margin-bottom:2rem;">
                    { format!("{} {}", course.professor, course.location) }
                </p>

                <div style="display:flex;align-items:center;justify-content:space-between;margin-bottom:1rem;">
                    <h2 style="font-weight:bold;font-size:1.2rem;">{ "Announcements" }</h2>
                    <button
                        onclick={link.callback(|_| Msg::OpenCreate)}
                        style="border-radius:9999px;background:#000;color:#fff;padding:0.5rem 1rem;border:none;cursor:pointer;"
                    >
                        { "+ New Announcement" }
                    </button>
                </div>

                {
                    if self.announcements.is_empty() {
                        html! { <p style="color:#6b7280;">{ "No announcements yet." }</p> }
                    } else {
                        html! {
                            <div>
                                { for self.announcements.iter().map(announcement_entry) }
                            </div>
                        }
                    }
                }

                <ModalHost
                    open={self.creating}
                    on_close={link.callback(|_| Msg::CloseCreate)}
                >
                    <CreateAnnouncementComponent
                        course_id={course.id.clone()}
                        token={ctx.props().token.clone()}
                        on_announcement_create={link.callback(Msg::AnnouncementCreated)}
                        on_close={link.callback(|_| Msg::CloseCreate)}
                    />
                </ModalHost>
            </div>
        }
    }
}

fn announcement_entry(announcement: &Announcement) -> Html {
    html! {
        <div
            key={announcement.id.clone()}
            style="border-bottom:1px solid #e5e7eb;padding:1rem 0;"
        >
            <h3 style="font-weight:bold;margin:0;">{ &announcement.title }</h3>
            <p style="color:#6b7280;font-size:0.85rem;margin:0.25rem 0;">
                { &announcement.date }
            </p>
            <p style="margin:0;">{ &announcement.description }</p>
        </div>
    }
}
