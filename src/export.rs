use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::crawler::DepartmentSummary;
use crate::parser::CourseRecord;

pub const CATALOG_FILE: &str = "catalog.csv";
pub const DEPARTMENT_FILE: &str = "department.csv";

const CATALOG_HEADERS: [&str; 7] = [
    "Course ID",
    "Course Name",
    "Description",
    "Terms Offered",
    "Equivalent Courses",
    "Instructors",
    "Prerequisites",
];
const DEPARTMENT_HEADERS: [&str; 2] = ["Department", "Number of Courses"];

/// Write `catalog.csv` into `dir` and return its path.
pub fn write_catalog(dir: &Path, courses: &[CourseRecord]) -> Result<PathBuf> {
    let path = dir.join(CATALOG_FILE);
    write_rows(&path, &CATALOG_HEADERS, courses)?;
    Ok(path)
}

/// Write `department.csv` into `dir` and return its path.
pub fn write_departments(dir: &Path, departments: &[DepartmentSummary]) -> Result<PathBuf> {
    let path = dir.join(DEPARTMENT_FILE);
    write_rows(&path, &DEPARTMENT_HEADERS, departments)?;
    Ok(path)
}

// The header row is written explicitly so empty tables still get one.
fn write_rows<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

// ── Tests ──
