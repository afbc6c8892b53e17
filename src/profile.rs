// User Profile - one per form submission
// Ephemeral input: GPA, funding preference, free-text category keywords.

use serde::{Deserialize, Serialize};

// ============================================================================
// FUNDING PREFERENCE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundPreference {
    Scholarship,
    Loan,
    Both,
}

impl FundPreference {
    pub fn includes_scholarships(&self) -> bool {
        matches!(self, FundPreference::Scholarship | FundPreference::Both)
    }

    pub fn includes_loans(&self) -> bool {
        matches!(self, FundPreference::Loan | FundPreference::Both)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FundPreference::Scholarship => "Scholarships",
            FundPreference::Loan => "Loans",
            FundPreference::Both => "Both",
        }
    }

    /// Cycle through the options, for single-key selection in the form.
    pub fn next(&self) -> Self {
        match self {
            FundPreference::Both => FundPreference::Scholarship,
            FundPreference::Scholarship => FundPreference::Loan,
            FundPreference::Loan => FundPreference::Both,
        }
    }
}

// ============================================================================
// PROFILE
// ============================================================================

/// Courses offered in the profile form. "Other" reveals a free-text input.
pub const COURSES: &[&str] = &["Engineering", "Business", "Medicine", "Law", "Arts", "Other"];

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub gpa: f64,
    pub preference: FundPreference,

    /// Normalized category keywords from the free-text field
    pub tokens: Vec<String>,

    /// Course of study; collected by the form but not consulted by the
    /// recommendation filter.
    pub course: String,
}

impl Profile {
    pub fn new(gpa: f64, preference: FundPreference, raw_categories: &str, course: &str) -> Self {
        Profile {
            gpa,
            preference,
            tokens: parse_categories(raw_categories),
            course: course.to_string(),
        }
    }
}

/// Tokenize the free-text category field: split on comma, trim, drop empty
/// tokens, lowercase. Malformed text degrades to an empty list, which the
/// filter treats as "no category filter".
pub fn parse_categories(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// GPA field parsing: malformed numeric input defaults to zero.
pub fn parse_gpa(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_categories_normalizes() {
        assert_eq!(
            parse_categories(" STEM, Need-Based ,merit"),
            vec!["stem", "need-based", "merit"]
        );
    }

    #[test]
    fn test_parse_categories_drops_empty_tokens() {
        assert_eq!(parse_categories(""), Vec::<String>::new());
        assert_eq!(parse_categories(" , ,, "), Vec::<String>::new());
        assert_eq!(parse_categories(",stem,"), vec!["stem"]);
    }

    #[test]
    fn test_parse_categories_keeps_inner_spaces() {
        // "low income" must survive as a single token for loan scoring
        assert_eq!(parse_categories("low income"), vec!["low income"]);
    }

    #[test]
    fn test_parse_gpa_defaults_to_zero() {
        assert_eq!(parse_gpa("3.6"), 3.6);
        assert_eq!(parse_gpa(" 2.5 "), 2.5);
        assert_eq!(parse_gpa(""), 0.0);
        assert_eq!(parse_gpa("abc"), 0.0);
    }

    #[test]
    fn test_preference_inclusion() {
        assert!(FundPreference::Both.includes_scholarships());
        assert!(FundPreference::Both.includes_loans());
        assert!(FundPreference::Scholarship.includes_scholarships());
        assert!(!FundPreference::Scholarship.includes_loans());
        assert!(FundPreference::Loan.includes_loans());
        assert!(!FundPreference::Loan.includes_scholarships());
    }

    #[test]
    fn test_preference_cycle_covers_all() {
        let start = FundPreference::Both;
        let mut p = start.next();
        let mut seen = vec![start];
        while p != start {
            seen.push(p);
            p = p.next();
        }
        assert_eq!(seen.len(), 3);
    }
}
