pub mod announcement;
pub mod course;
