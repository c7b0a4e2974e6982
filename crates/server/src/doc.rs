use crate::routes::{courses, health, root, semesters};
use crate::dtos;
use models::{Course, CourseDetails, Instructor, Semester, SemesterCourseEntry};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        courses::list_courses,
        courses::import_subject,
        semesters::list_semesters,
        semesters::create_semester,
        semesters::list_semester_courses,
        semesters::add_semester_course,
        semesters::delete_semester_course,
        semesters::update_course_details,
    ),
    components(schemas(
        Course,
        CourseDetails,
        Instructor,
        Semester,
        SemesterCourseEntry,
        dtos::MessageResponse,
        dtos::ErrorResponse,
        dtos::course::ImportResponse,
        dtos::course::AddCourseRequest,
        dtos::semester::CreateSemesterRequest,
        dtos::semester::CreateSemesterResponse,
        dtos::semester::UpdateDetailsRequest,
    )),
    tags(
        (name = "Courses", description = "Global course catalog and catalog import"),
        (name = "Semesters", description = "Semesters and their course entries"),
        (name = "Health", description = "Service health"),
    ),
    info(
        title = "Course Plan API",
        version = "1.0.0",
        description = "Course plan synchronization API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
