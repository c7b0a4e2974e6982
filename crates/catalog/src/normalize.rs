use crate::types::RawClass;
use log::warn;
use models::{Course, CourseDetails};

/// Extracts the detail fields from a raw class record, in the fixed
/// precedence order description, credits, whenOffered, instructors.
///
/// Credits come from the first enrollment group's minimum unit count;
/// instructors from the first meeting of the first class section of the first
/// enrollment group. A missing level anywhere in that chain leaves the field
/// unset without failing the record.
pub fn details_from_class(raw: &RawClass) -> CourseDetails {
    let description = raw.description.clone();
    let credits = raw.enroll_groups.first().and_then(|group| group.units_minimum);
    let when_offered = raw.catalog_when_offered.clone();
    let instructors = raw
        .enroll_groups
        .first()
        .and_then(|group| group.class_sections.first())
        .and_then(|section| section.meetings.first())
        .map(|meeting| meeting.instructors.clone());

    CourseDetails {
        description,
        credits,
        when_offered,
        instructors,
    }
}

/// Normalizes a raw class record into a catalog [`Course`].
///
/// Returns `None` for records missing a usable catalog number or title; a
/// bulk import skips such records rather than aborting.
pub fn course_from_class(raw: &RawClass) -> Option<Course> {
    let Some(catalog_nbr) = raw.catalog_nbr.as_u32() else {
        warn!("skipping {} record with unparsable catalogNbr", raw.subject);
        return None;
    };
    let Some(title_short) = raw.title_short.clone() else {
        warn!("skipping {} {} record without a title", raw.subject, catalog_nbr);
        return None;
    };

    let mut course = Course {
        subject: raw.subject.clone(),
        catalog_nbr,
        title_short,
        ..Default::default()
    };
    details_from_class(raw).merge_into(&mut course);

    Some(course)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_class(value: serde_json::Value) -> RawClass {
        serde_json::from_value(value).unwrap()
    }

    fn full_record() -> RawClass {
        raw_class(json!({
            "subject": "CS",
            "catalogNbr": "1110",
            "titleShort": "Intro to Computing",
            "description": "Programming and problem solving.",
            "catalogWhenOffered": "Fall, Spring",
            "enrollGroups": [{
                "unitsMinimum": 4.0,
                "classSections": [{
                    "meetings": [{
                        "instructors": [
                            {"firstName": "Ada", "lastName": "Lovelace", "netid": "al123"}
                        ]
                    }]
                }]
            }]
        }))
    }

    #[test]
    fn test_full_record_populates_every_field() {
        let course = course_from_class(&full_record()).unwrap();

        assert_eq!(course.subject, "CS");
        assert_eq!(course.catalog_nbr, 1110);
        assert_eq!(course.title_short, "Intro to Computing");
        assert_eq!(
            course.description.as_deref(),
            Some("Programming and problem solving.")
        );
        assert_eq!(course.credits, Some(4.0));
        assert_eq!(course.when_offered.as_deref(), Some("Fall, Spring"));
        let instructors = course.instructors.unwrap();
        assert_eq!(instructors.len(), 1);
        assert_eq!(instructors[0].first_name, "Ada");
        assert!(course.id.is_none());
    }

    #[test]
    fn test_numeric_catalog_nbr_is_accepted() {
        let course = course_from_class(&raw_class(json!({
            "subject": "CS",
            "catalogNbr": 2110,
            "titleShort": "OO Programming"
        })))
        .unwrap();
        assert_eq!(course.catalog_nbr, 2110);
    }

    #[test]
    fn test_missing_intermediate_levels_omit_optional_fields() {
        // no class sections -> credits still present, instructors absent
        let course = course_from_class(&raw_class(json!({
            "subject": "CS",
            "catalogNbr": "3110",
            "titleShort": "Functional Programming",
            "enrollGroups": [{"unitsMinimum": 4.0, "classSections": []}]
        })))
        .unwrap();

        assert_eq!(course.credits, Some(4.0));
        assert!(course.instructors.is_none());
        assert!(course.description.is_none());
        assert!(course.when_offered.is_none());
    }

    #[test]
    fn test_no_enroll_groups_at_all() {
        let course = course_from_class(&raw_class(json!({
            "subject": "CS",
            "catalogNbr": "4820",
            "titleShort": "Algorithms"
        })))
        .unwrap();

        assert!(course.credits.is_none());
        assert!(course.instructors.is_none());
    }

    #[test]
    fn test_empty_meeting_yields_empty_instructor_list() {
        let details = details_from_class(&raw_class(json!({
            "subject": "CS",
            "catalogNbr": "1110",
            "titleShort": "Intro",
            "enrollGroups": [{
                "classSections": [{"meetings": [{}]}]
            }]
        })));

        // a meeting exists, so the instructor list is present but empty
        assert_eq!(details.instructors, Some(vec![]));
        assert!(details.credits.is_none());
    }

    #[test]
    fn test_unparsable_catalog_nbr_skips_record() {
        assert!(
            course_from_class(&raw_class(json!({
                "subject": "CS",
                "catalogNbr": "19A",
                "titleShort": "Weird Listing"
            })))
            .is_none()
        );
    }

    #[test]
    fn test_missing_title_skips_record() {
        assert!(
            course_from_class(&raw_class(json!({
                "subject": "CS",
                "catalogNbr": "1110"
            })))
            .is_none()
        );
    }
}
