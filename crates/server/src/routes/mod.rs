pub mod courses;
pub mod health;
pub mod root;
pub mod semesters;
