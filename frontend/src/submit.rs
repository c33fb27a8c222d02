//! Submission flow shared by the create-entity dialogs.
//!
//! Both dialogs funnel their draft through [`submit`]: validate, hand the
//! optimistic local copy to the parent, dispatch the strategy, then close.
//! The two historical course-creation variants (one purely local, one
//! networked) collapse into one component parameterized by [`SubmitMode`].

use yew::platform::spawn_local;
use yew::Callback;

use common::model::announcement::{Announcement, AnnouncementDraft};
use common::model::course::{Course, CourseDraft};
use common::requests::{CreateAnnouncementRequest, CreateCourseRequest};

use crate::api::{self, SubmissionError};
use crate::clock::Clock;
use crate::toast::show_toast;

/// What happens when the backend rejects the write or the request cannot be
/// sent. The optimistic local entry stays either way.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FailurePolicy {
    /// Log to the console only. Matches the historical dashboard behavior.
    #[default]
    SilentLog,
    /// Show a toast in addition to the console entry.
    Toast,
}

/// How a dialog disposes of its draft on submit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SubmitMode {
    /// Append locally only; nothing leaves the browser.
    LocalOnly,
    /// Append locally and POST to the backend.
    #[default]
    Remote,
}

/// A draft that can produce the optimistic local copy of its entity.
pub trait Draft {
    type Entity;

    fn title(&self) -> &str;

    /// Builds the locally appended copy with a placeholder id. The clock is
    /// injected so entities that carry a date stay testable.
    fn to_entity(&self, clock: &dyn Clock) -> Self::Entity;
}

impl Draft for CourseDraft {
    type Entity = Course;

    fn title(&self) -> &str {
        &self.title
    }

    fn to_entity(&self, _clock: &dyn Clock) -> Course {
        Course {
            id: uuid::Uuid::new_v4().to_string(),
            title: self.title.clone(),
            professor: self.professor.clone(),
            location: self.location.clone(),
        }
    }
}

impl Draft for AnnouncementDraft {
    type Entity = Announcement;

    fn title(&self) -> &str {
        &self.title
    }

    fn to_entity(&self, clock: &dyn Clock) -> Announcement {
        Announcement {
            id: uuid::Uuid::new_v4().to_string(),
            title: self.title.clone(),
            date: clock.today(),
            description: self.description.clone(),
        }
    }
}

/// Disposal of a submitted draft.
///
/// `Remote` detaches its network task; the futures in [`crate::api`] stay
/// awaitable for callers that want to wait or cancel instead.
pub trait SubmitStrategy<D> {
    fn dispatch(&self, draft: &D);
}

/// No network traffic at all.
pub struct LocalOnly;

impl<D> SubmitStrategy<D> for LocalOnly {
    fn dispatch(&self, _draft: &D) {}
}

/// POSTs the draft to the backend on a detached task.
pub struct Remote {
    pub policy: FailurePolicy,
}

impl SubmitStrategy<CourseDraft> for Remote {
    fn dispatch(&self, draft: &CourseDraft) {
        let body = CreateCourseRequest::from(draft);
        let policy = self.policy;
        spawn_local(async move {
            if let Err(err) = api::create_course(&body).await {
                report_failure(policy, "course", &err);
            }
        });
    }
}

impl SubmitStrategy<AnnouncementDraft> for Remote {
    fn dispatch(&self, draft: &AnnouncementDraft) {
        let body = CreateAnnouncementRequest::from(draft);
        let policy = self.policy;
        spawn_local(async move {
            if let Err(err) = api::create_announcement(&body).await {
                report_failure(policy, "announcement", &err);
            }
        });
    }
}

fn report_failure(policy: FailurePolicy, what: &str, err: &SubmissionError) {
    gloo_console::error!(format!("Failed to create {}: {}", what, err));
    if policy == FailurePolicy::Toast {
        show_toast(&format!(
            "Could not save the {}. It may disappear on reload.",
            what
        ));
    }
}

/// Drives one submission of `draft`.
///
/// With a required-but-empty title nothing happens and `false` is returned,
/// mirroring the native `required` short-circuit. Otherwise the optimistic
/// copy goes to `on_create`, the strategy dispatches, and `on_close` fires,
/// all synchronously and in that order. A remote dispatch resolves later and
/// never reorders these callbacks; there is no retry and no de-duplication
/// of a second submit racing the first.
pub fn submit<D: Draft>(
    draft: &D,
    require_title: bool,
    strategy: &dyn SubmitStrategy<D>,
    clock: &dyn Clock,
    on_create: &Callback<D::Entity>,
    on_close: &Callback<()>,
) -> bool {
    if require_title && draft.title().trim().is_empty() {
        return false;
    }
    on_create.emit(draft.to_entity(clock));
    strategy.dispatch(draft);
    on_close.emit(());
    true
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::clock::FixedClock;
    use crate::store::ListStore;

    struct Recording {
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl<D> SubmitStrategy<D> for Recording {
        fn dispatch(&self, _draft: &D) {
            self.log.borrow_mut().push("dispatch");
        }
    }

    /// Stands in for a backend that answers HTTP 500: the outcome is logged
    /// at the client boundary and never reaches the caller.
    struct Rejecting;

    impl<D> SubmitStrategy<D> for Rejecting {
        fn dispatch(&self, _draft: &D) {}
    }

    fn course_draft(title: &str, professor: &str) -> CourseDraft {
        CourseDraft {
            title: title.to_string(),
            professor: professor.to_string(),
            location: String::new(),
        }
    }

    #[test]
    fn submit_fires_create_then_dispatch_then_close() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let strategy = Recording { log: log.clone() };
        let on_create = {
            let log = log.clone();
            Callback::from(move |_: Course| log.borrow_mut().push("create"))
        };
        let on_close = {
            let log = log.clone();
            Callback::from(move |_| log.borrow_mut().push("close"))
        };

        let accepted = submit(
            &course_draft("CS101", "Dr. Smith"),
            true,
            &strategy,
            &FixedClock::default(),
            &on_create,
            &on_close,
        );

        assert!(accepted);
        assert_eq!(*log.borrow(), vec!["create", "dispatch", "close"]);
    }

    #[test]
    fn required_empty_title_short_circuits() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let strategy = Recording { log: log.clone() };
        let on_create = {
            let log = log.clone();
            Callback::from(move |_: Course| log.borrow_mut().push("create"))
        };
        let on_close = {
            let log = log.clone();
            Callback::from(move |_| log.borrow_mut().push("close"))
        };

        let accepted = submit(
            &CourseDraft::default(),
            true,
            &strategy,
            &FixedClock::default(),
            &on_create,
            &on_close,
        );

        assert!(!accepted);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn unenforced_title_submits_even_when_empty() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let strategy = Recording { log: log.clone() };
        let on_create = Callback::from(|_: Course| {});
        let on_close = Callback::from(|_| {});

        let accepted = submit(
            &CourseDraft::default(),
            false,
            &strategy,
            &FixedClock::default(),
            &on_create,
            &on_close,
        );

        assert!(accepted);
        assert_eq!(*log.borrow(), vec!["dispatch"]);
    }

    #[test]
    fn optimistic_append_survives_server_rejection() {
        let store = Rc::new(RefCell::new(ListStore::new()));
        let on_create = {
            let store = store.clone();
            Callback::from(move |course: Course| store.borrow_mut().append(course))
        };
        let on_close = Callback::from(|_| {});

        submit(
            &course_draft("Systems", "teacher-42"),
            true,
            &Rejecting,
            &FixedClock::default(),
            &on_create,
            &on_close,
        );

        let store = store.borrow();
        assert_eq!(store.len(), 1);
        assert_eq!(store.iter().next().unwrap().title, "Systems");
    }

    #[test]
    fn dashboard_flow_appends_matching_course() {
        let store = Rc::new(RefCell::new(ListStore::new()));
        let on_create = {
            let store = store.clone();
            Callback::from(move |course: Course| store.borrow_mut().append(course))
        };
        let on_close = Callback::from(|_| {});
        let before = store.borrow().len();

        submit(
            &course_draft("CS101", "Dr. Smith"),
            true,
            &LocalOnly,
            &FixedClock::default(),
            &on_create,
            &on_close,
        );

        let store = store.borrow();
        assert_eq!(store.len(), before + 1);
        let course = store.iter().next().unwrap();
        assert_eq!(course.title, "CS101");
        assert_eq!(course.professor, "Dr. Smith");
        assert_eq!(course.location, "");
        assert!(!course.id.is_empty());
    }

    #[test]
    fn announcement_copy_is_stamped_by_injected_clock() {
        let mut draft =
            AnnouncementDraft::new("course-7".to_string(), String::new());
        draft.title = "Office hours".to_string();
        draft.description = "Moved to 3pm.".to_string();

        let announcement = draft.to_entity(&FixedClock("2/1/2026".to_string()));

        assert_eq!(announcement.date, "2/1/2026");
        assert_eq!(announcement.title, "Office hours");
        assert_eq!(announcement.description, "Moved to 3pm.");
    }

    #[test]
    fn each_local_copy_gets_a_fresh_placeholder_id() {
        let draft = course_draft("CS101", "Dr. Smith");
        let clock = FixedClock::default();
        let first = draft.to_entity(&clock);
        let second = draft.to_entity(&clock);
        assert_ne!(first.id, second.id);
    }
}
