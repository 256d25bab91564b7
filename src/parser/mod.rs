pub mod course;
pub mod details;
pub mod text;

use std::sync::LazyLock;

use scraper::{Html, Selector};

pub use course::CourseRecord;

static COURSE_BLOCK_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.courseblock").unwrap());

/// Department page → course records, in page order.
/// Blocks that are not standalone courses are dropped.
pub fn parse_department_page(html: &str) -> Vec<CourseRecord> {
    let document = Html::parse_document(html);
    document
        .select(&COURSE_BLOCK_SEL)
        .filter_map(course::parse_course)
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap()
    }

    #[test]
    fn economics_page() {
        let courses = parse_department_page(&fixture("economics"));
        let ids: Vec<&str> = courses.iter().map(|c| c.id.as_str()).collect();
        // Sequence entry and the block without a detail paragraph are dropped
        assert_eq!(ids, vec!["ECON 19800", "ECON 20000", "ECON 20100", "ECON 29700"]);

        let micro = &courses[1];
        assert_eq!(micro.name, "The Elements of Economic Analysis I");
        assert_eq!(micro.terms, "Autumn, Winter");
        assert_eq!(micro.instructors, "V. Lima");
        assert_eq!(micro.prerequisites, "MATH 13300 or higher");
        assert_eq!(micro.equivalents, "None");

        let reading = &courses[3];
        assert_eq!(reading.name, "Reading and Research in Economics");
        assert_eq!(reading.terms, "Not specified");
        assert_eq!(reading.instructors, "N/A");
    }

    #[test]
    fn cross_listed_course() {
        let courses = parse_department_page(&fixture("economics"));
        let intro = &courses[0];
        assert_eq!(intro.id, "ECON 19800");
        assert_eq!(intro.name, "Introduction to Microeconomics");
        assert_eq!(intro.equivalents, "PBPL 19800");
        assert_eq!(intro.terms, "Spring");
    }

    #[test]
    fn page_without_blocks() {
        assert!(parse_department_page("<html><body><p>Nothing here</p></body></html>").is_empty());
        assert!(parse_department_page("").is_empty());
    }
}
