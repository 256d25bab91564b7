use std::sync::LazyLock;

use regex::Regex;

// Each label stops at its own set of neighbouring labels. The sets are not
// uniform; keep them that way, real pages were matched against these.
static TERMS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Terms Offered: (.*?)(?:<br>|Equivalent Course\(s\)|Prerequisite\(s\)|Note\(s\)|$)")
        .unwrap()
});
static EQUIVALENTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Equivalent Course\(s\): (.+?)(?:$|Instructor\(s\)|Prerequisite\(s\))").unwrap()
});
static INSTRUCTORS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Instructor\(s\): (.+?)(?:$|Terms Offered:|Prerequisite\(s\))").unwrap()
});
static PREREQUISITES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Prerequisite\(s\): (.+?)(?:$|Terms Offered:|Equivalent Course\(s\))").unwrap()
});

pub const DEFAULT_TERMS: &str = "Not specified";
pub const DEFAULT_EQUIVALENTS: &str = "None";
pub const DEFAULT_INSTRUCTORS: &str = "N/A";
pub const DEFAULT_PREREQUISITES: &str = "None";

/// Sub-fields pulled out of a course's detail paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFields {
    pub terms: String,
    pub equivalents: String,
    pub instructors: String,
    pub prerequisites: String,
}

impl Default for DetailFields {
    fn default() -> Self {
        Self {
            terms: DEFAULT_TERMS.to_string(),
            equivalents: DEFAULT_EQUIVALENTS.to_string(),
            instructors: DEFAULT_INSTRUCTORS.to_string(),
            prerequisites: DEFAULT_PREREQUISITES.to_string(),
        }
    }
}

/// Extract the labeled sub-fields from a detail blob.
///
/// Labels are searched independently, in any order. A field keeps its
/// default only when its label does not match at all; a label followed by
/// nothing but whitespace yields an empty string.
pub fn extract_fields(blob: &str) -> DetailFields {
    let mut fields = DetailFields::default();

    if let Some(v) = capture(&TERMS_RE, blob) {
        fields.terms = v;
    }
    if let Some(v) = capture(&EQUIVALENTS_RE, blob) {
        fields.equivalents = v;
    }
    if let Some(v) = capture(&INSTRUCTORS_RE, blob) {
        fields.instructors = v;
    }
    if let Some(v) = capture(&PREREQUISITES_RE, blob) {
        fields.prerequisites = v;
    }

    fields
}

fn capture(re: &Regex, blob: &str) -> Option<String> {
    re.captures(blob)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_labels_without_prerequisites() {
        let f = extract_fields(
            "Terms Offered: Autumn, Spring Equivalent Course(s): MATH 200 Instructor(s): J. Smith",
        );
        assert_eq!(f.terms, "Autumn, Spring");
        assert_eq!(f.equivalents, "MATH 200");
        assert_eq!(f.instructors, "J. Smith");
        assert_eq!(f.prerequisites, "None");
    }

    #[test]
    fn empty_blob_keeps_defaults() {
        assert_eq!(extract_fields(""), DetailFields::default());
        let f = extract_fields("Note(s): Open to first-years only.");
        assert_eq!(f.terms, "Not specified");
        assert_eq!(f.equivalents, "None");
        assert_eq!(f.instructors, "N/A");
        assert_eq!(f.prerequisites, "None");
    }

    #[test]
    fn label_order_does_not_matter() {
        let f = extract_fields(
            "Prerequisite(s): ECON 100 Terms Offered: Winter Instructor(s): A. Lee Prerequisite(s): ignored",
        );
        assert_eq!(f.prerequisites, "ECON 100");
        assert_eq!(f.terms, "Winter Instructor(s): A. Lee");
        assert_eq!(f.instructors, "A. Lee");
    }

    #[test]
    fn spans_line_breaks() {
        let blob = "Instructor(s): J. Smith\nTerms Offered: Autumn\nWinter\nPrerequisite(s): MATH 151\nor placement";
        let f = extract_fields(blob);
        assert_eq!(f.instructors, "J. Smith");
        assert_eq!(f.terms, "Autumn\nWinter");
        assert_eq!(f.prerequisites, "MATH 151\nor placement");
    }

    #[test]
    fn terms_stop_at_note_but_others_do_not() {
        let f = extract_fields("Terms Offered: Spring Note(s): lab fee Instructor(s): K. Ng Note(s): TBD");
        assert_eq!(f.terms, "Spring");
        assert_eq!(f.instructors, "K. Ng Note(s): TBD");
    }

    #[test]
    fn equivalents_run_past_terms_label() {
        // Terms Offered is not one of the equivalents terminators.
        let f = extract_fields("Equivalent Course(s): HIST 101 Terms Offered: Autumn");
        assert_eq!(f.equivalents, "HIST 101 Terms Offered: Autumn");
        assert_eq!(f.terms, "Autumn");
    }

    #[test]
    fn prerequisites_run_past_instructors_label() {
        let f = extract_fields("Prerequisite(s): None Instructor(s): Staff");
        assert_eq!(f.prerequisites, "None Instructor(s): Staff");
        assert_eq!(f.instructors, "Staff");
    }

    #[test]
    fn blank_value_is_empty_not_default() {
        let f = extract_fields("Terms Offered: Equivalent Course(s):  Prerequisite(s): CHEM 101");
        assert_eq!(f.terms, "");
        assert_eq!(f.equivalents, "");
        assert_eq!(f.prerequisites, "CHEM 101");
    }

    #[test]
    fn terms_stop_at_literal_br() {
        let f = extract_fields("Terms Offered: Autumn<br>Spring");
        assert_eq!(f.terms, "Autumn");
    }
}
