use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

lazy_static! {
    static ref FIRST_DIGITS: Regex = Regex::new(r"\d+").unwrap();
}

/// A semester in the course plan. `sem_num` is derived from the name and is
/// what the client orders semesters by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Semester {
    pub id: String,
    pub name: String,
    pub sem_num: i32,
}

/// Extracts the semester number from a semester name: the first run of ASCII
/// digits, 0 when the name has none (or the run overflows an `i32`).
///
/// `"Semester 12"` -> 12, `"Fall"` -> 0.
pub fn sem_num_from_name(name: &str) -> i32 {
    FIRST_DIGITS
        .find(name)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
