use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use serde::{Deserialize, Serialize};

use super::details::extract_fields;
use super::text::{element_text, normalize};

static TITLE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.courseblocktitle").unwrap());
static DESC_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.courseblockdesc").unwrap());
static DETAIL_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.courseblockdetail").unwrap());

/// Only this exact annotation is removed from titles.
const UNITS_SUFFIX: &str = ". 100 Units.";

/// One row of the catalog table. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    #[serde(rename = "Course ID")]
    pub id: String,
    #[serde(rename = "Course Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Terms Offered")]
    pub terms: String,
    #[serde(rename = "Equivalent Courses")]
    pub equivalents: String,
    #[serde(rename = "Instructors")]
    pub instructors: String,
    #[serde(rename = "Prerequisites")]
    pub prerequisites: String,
}

/// Parse one `div.courseblock` into a record.
///
/// Returns `None` for cross-listed sequences (hyphen in the title) and for
/// any block missing its title, description or detail paragraph, or whose
/// title has no `ID. Name` split.
pub fn parse_course(block: ElementRef) -> Option<CourseRecord> {
    let title = element_text(block.select(&TITLE_SEL).next()?);
    if title.contains('-') {
        return None;
    }

    let (id, name) = split_title(&title)?;
    let description = element_text(block.select(&DESC_SEL).next()?);
    let detail = element_text(block.select(&DETAIL_SEL).next()?);
    let fields = extract_fields(&detail);

    Some(CourseRecord {
        id,
        name,
        description,
        terms: fields.terms,
        equivalents: fields.equivalents,
        instructors: fields.instructors,
        prerequisites: fields.prerequisites,
    })
}

/// Split `"ECON 101. Principles of Economics. 100 Units."` into
/// `("ECON 101", "Principles of Economics")`.
pub fn split_title(title: &str) -> Option<(String, String)> {
    let title = normalize(&title.replace(UNITS_SUFFIX, ""));
    let (id, name) = title.split_once('.')?;
    let (id, name) = (id.trim(), name.trim());
    if id.is_empty() || name.is_empty() {
        return None;
    }
    Some((id.to_string(), name.to_string()))
}

// ── Tests ──
