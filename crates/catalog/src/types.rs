//! Raw response shapes for the class-roster search API. Only the fields the
//! normalizer reads are modeled; everything else in the payload is ignored.

use models::Instructor;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub data: SearchData,
}

#[derive(Debug, Deserialize)]
pub struct SearchData {
    #[serde(default)]
    pub classes: Vec<RawClass>,
}

/// One class record as returned by the roster search
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawClass {
    pub subject: String,
    pub catalog_nbr: RawCatalogNbr,
    pub title_short: Option<String>,
    pub description: Option<String>,
    pub catalog_when_offered: Option<String>,
    #[serde(default)]
    pub enroll_groups: Vec<RawEnrollGroup>,
}

/// The API serves catalog numbers as strings; older payloads used numbers
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawCatalogNbr {
    Text(String),
    Number(u32),
}

impl RawCatalogNbr {
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Self::Text(text) => text.trim().parse().ok(),
            Self::Number(number) => Some(*number),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEnrollGroup {
    pub units_minimum: Option<f32>,
    #[serde(default)]
    pub class_sections: Vec<RawClassSection>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawClassSection {
    #[serde(default)]
    pub meetings: Vec<RawMeeting>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMeeting {
    #[serde(default)]
    pub instructors: Vec<Instructor>,
}
