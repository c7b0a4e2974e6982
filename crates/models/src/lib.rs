pub mod course;
pub mod semester;

pub use course::{Course, CourseDetails, CourseKey, Instructor, SemesterCourseEntry};
pub use semester::{Semester, sem_num_from_name};
