pub mod course_card;
pub mod course_page;
pub mod create_announcement;
pub mod create_course;
