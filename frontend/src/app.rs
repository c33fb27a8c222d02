//! Dashboard root: the course grid and the create-course dialog.

use yew::prelude::*;

use common::model::course::Course;

use crate::clock::{BrowserClock, Clock};
use crate::components::course_card::CourseCard;
use crate::components::course_page::CoursePage;
use crate::components::create_course::CreateCourseComponent;
use crate::modal::ModalHost;
use crate::store::ListStore;

pub enum Msg {
    OpenCreateCourse,
    CloseCreateCourse,
    CourseCreated(Course),
    OpenCourse(Course),
    CloseCourse,
}

pub struct App {
    courses: ListStore<Course>,
    creating: bool,
    selected: Option<Course>,
    today: String,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            courses: ListStore::new(),
            creating: false,
            selected: None,
            today: BrowserClock.today(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OpenCreateCourse => {
                self.creating = true;
                true
            }
            Msg::CloseCreateCourse => {
                self.creating = false;
                true
            }
            Msg::CourseCreated(course) => {
                self.courses.append(course);
                true
            }
            Msg::OpenCourse(course) => {
                self.selected = Some(course);
                true
            }
            Msg::CloseCourse => {
                self.selected = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        if let Some(course) = &self.selected {
            return html! {
                <CoursePage
                    course={course.clone()}
                    on_back={link.callback(|_| Msg::CloseCourse)}
                />
            };
        }

        html! {
            <div>
                <nav style="background:#111;padding:2rem 8rem;">
                    <h1 style="color:#fff;font-weight:bold;font-size:1.5rem;margin:0;">
                        { "Darkspace" }
                    </h1>
                </nav>
                <div style="display:flex;align-items:center;justify-content:space-between;padding:2rem 8rem;">
                    <div>
                        <h1 style="font-weight:bold;font-size:1.5rem;margin:0;">
                            { "Spring 2026" }
                        </h1>
                        <p style="color:#6b7280;margin:0.25rem 0 0 0;">{ &self.today }</p>
                    </div>
                    <button
                        onclick={link.callback(|_| Msg::OpenCreateCourse)}
                        style="border-radius:9999px;background:#000;color:#fff;padding:0.5rem 1rem;height:3rem;border:none;cursor:pointer;"
                    >
                        { "+ Create Course" }
                    </button>
                </div>
                <div style="display:flex;flex-wrap:wrap;gap:1rem;padding:0 8rem 2rem 8rem;">
                    { for self.courses.iter().map(|course| {
                        let selected = course.clone();
                        html! {
                            <CourseCard
                                key={course.id.clone()}
                                title={course.title.clone()}
                                professor={course.professor.clone()}
                                location={course.location.clone()}
                                onclick={link.callback(move |_| Msg::OpenCourse(selected.clone()))}
                            />
                        }
                    }) }
                </div>
                <ModalHost
                    open={self.creating}
                    on_close={link.callback(|_| Msg::CloseCreateCourse)}
                >
                    <CreateCourseComponent
                        on_course_create={link.callback(Msg::CourseCreated)}
                        on_close={link.callback(|_| Msg::CloseCreateCourse)}
                    />
                </ModalHost>
            </div>
        }
    }
}
