pub mod course;
pub mod semester;

pub use course::CourseService;
pub use semester::SemesterService;
