// Recommendation Filter
// Pure function from a profile to a subset of the catalog. Scholarships are
// gated on GPA and category tags; loans always pass and carry an advisory
// priority score.

use crate::catalog::{Catalog, Record};
use crate::profile::Profile;

// ============================================================================
// RECOMMENDATION
// ============================================================================

/// A catalog record picked for the user, with advisory metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub record: Record,

    /// Loan priority: 2 when the profile mentions low income, else 1.
    /// Carried as metadata only; never used to order or highlight results.
    pub loan_score: Option<u8>,
}

impl Recommendation {
    fn scholarship(record: Record) -> Self {
        Recommendation {
            record,
            loan_score: None,
        }
    }

    fn loan(record: Record, score: u8) -> Self {
        Recommendation {
            record,
            loan_score: Some(score),
        }
    }
}

// ============================================================================
// FILTER
// ============================================================================

/// Map a profile to an ordered list of recommendations: matching scholarships
/// first, then every loan. GPA is taken as-is; values outside [0,4] are not
/// an error.
pub fn recommend(profile: &Profile, catalog: &Catalog) -> Vec<Recommendation> {
    let mut picks = Vec::new();

    if profile.preference.includes_scholarships() {
        for s in &catalog.scholarships {
            let meets_gpa = s.min_gpa.map_or(true, |min| profile.gpa >= min);
            let matches_cat = profile.tokens.is_empty()
                || s.categories
                    .iter()
                    .any(|c| profile.tokens.contains(&c.to_lowercase()));
            if meets_gpa && matches_cat {
                picks.push(Recommendation::scholarship(Record::Scholarship(s.clone())));
            }
        }
    }

    if profile.preference.includes_loans() {
        let low_income = profile
            .tokens
            .iter()
            .any(|t| t == "low-income" || t == "low income");
        let score = if low_income { 2 } else { 1 };
        for l in &catalog.loans {
            picks.push(Recommendation::loan(Record::Loan(l.clone()), score));
        }
    }

    picks
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RecordKind;
    use crate::profile::FundPreference;

    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    fn ids(picks: &[Recommendation]) -> Vec<&str> {
        picks.iter().map(|p| p.record.id()).collect()
    }

    #[test]
    fn test_qualifying_gpa_with_empty_tokens_includes_scholarship() {
        let profile = Profile::new(4.0, FundPreference::Scholarship, "", "Engineering");
        let picks = recommend(&profile, &catalog());
        assert!(ids(&picks).contains(&"scholarship_A_gpa35"));
        assert!(ids(&picks).contains(&"scholarship_B_low_income"));
    }

    #[test]
    fn test_gpa_below_minimum_excludes_scholarship_regardless_of_tokens() {
        let profile = Profile::new(3.0, FundPreference::Scholarship, "stem,merit", "Engineering");
        let picks = recommend(&profile, &catalog());
        // Merit Scholars requires 3.2
        assert!(!ids(&picks).contains(&"scholarship_A_gpa35"));
    }

    #[test]
    fn test_loan_preference_always_returns_both_loans() {
        for gpa in [0.0, 1.0, 4.0] {
            let profile = Profile::new(gpa, FundPreference::Loan, "anything, at all", "Law");
            let picks = recommend(&profile, &catalog());
            assert_eq!(ids(&picks), vec!["loan_A_student_friendly", "loan_B_micro"]);
        }
    }

    #[test]
    fn test_low_income_token_scores_every_loan_two() {
        let profile = Profile::new(3.0, FundPreference::Loan, "low-income", "Arts");
        let picks = recommend(&profile, &catalog());
        assert!(picks.iter().all(|p| p.loan_score == Some(2)));

        // The spaced spelling works too
        let profile = Profile::new(3.0, FundPreference::Loan, "low income", "Arts");
        let picks = recommend(&profile, &catalog());
        assert!(picks.iter().all(|p| p.loan_score == Some(2)));
    }

    #[test]
    fn test_without_low_income_token_loans_score_one() {
        let profile = Profile::new(3.0, FundPreference::Loan, "stem", "Arts");
        let picks = recommend(&profile, &catalog());
        assert!(picks.iter().all(|p| p.loan_score == Some(1)));
    }

    #[test]
    fn test_stem_profile_matches_only_merit_scholars() {
        let profile = Profile::new(3.6, FundPreference::Scholarship, "STEM", "Engineering");
        let picks = recommend(&profile, &catalog());
        assert_eq!(ids(&picks), vec!["scholarship_A_gpa35"]);
    }

    #[test]
    fn test_low_gpa_both_preference_yields_loans_only() {
        let profile = Profile::new(2.0, FundPreference::Both, "", "Business");
        let picks = recommend(&profile, &catalog());
        assert_eq!(ids(&picks), vec!["loan_A_student_friendly", "loan_B_micro"]);
        assert_eq!(
            picks.iter().map(|p| p.loan_score).collect::<Vec<_>>(),
            vec![Some(1), Some(1)]
        );
    }

    #[test]
    fn test_output_orders_scholarships_before_loans() {
        let profile = Profile::new(4.0, FundPreference::Both, "", "Medicine");
        let picks = recommend(&profile, &catalog());
        let first_loan = picks
            .iter()
            .position(|p| p.record.kind() == RecordKind::Loan)
            .unwrap();
        assert!(picks[..first_loan]
            .iter()
            .all(|p| p.record.kind() == RecordKind::Scholarship));
        assert!(picks[first_loan..]
            .iter()
            .all(|p| p.record.kind() == RecordKind::Loan));
    }

    #[test]
    fn test_scholarships_carry_no_loan_score() {
        let profile = Profile::new(4.0, FundPreference::Both, "", "Medicine");
        let picks = recommend(&profile, &catalog());
        assert!(picks
            .iter()
            .filter(|p| p.record.kind() == RecordKind::Scholarship)
            .all(|p| p.loan_score.is_none()));
    }

    #[test]
    fn test_tag_match_is_case_insensitive() {
        let profile = Profile::new(4.0, FundPreference::Scholarship, "need-based", "Law");
        let picks = recommend(&profile, &catalog());
        assert_eq!(ids(&picks), vec!["scholarship_B_low_income"]);
    }
}
