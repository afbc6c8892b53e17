// Card Renderer - text content for record cards and detail views
// Pure formatting: the UI layer decides layout, this module decides wording.

use crate::catalog::Record;

/// Save control label, reflecting saved-set membership at render time.
pub fn save_label(saved: bool) -> &'static str {
    if saved {
        "Saved"
    } else {
        "Save"
    }
}

/// One-line, type-specific summary shown under a card title.
pub fn subtitle(record: &Record) -> String {
    match record {
        Record::Scholarship(s) => {
            let min_gpa = s
                .min_gpa
                .map(|g| format!("{}", g))
                .unwrap_or_else(|| "—".to_string());
            format!("Amount: ${} | Min GPA: {}", format_amount(s.amount), min_gpa)
        }
        Record::Loan(l) => format!(
            "Up to ${} | {}% APR | {}m grace",
            format_amount(l.max_amount),
            l.interest_rate,
            l.grace_period_months
        ),
    }
}

/// Labeled rows for the detail modal body.
pub fn detail_rows(record: &Record) -> Vec<(String, String)> {
    match record {
        Record::Scholarship(s) => vec![
            ("Amount".to_string(), format!("${}", format_amount(s.amount))),
            (
                "Minimum GPA".to_string(),
                s.min_gpa
                    .map(|g| format!("{}", g))
                    .unwrap_or_else(|| "—".to_string()),
            ),
            ("Categories".to_string(), s.categories.join(", ")),
            ("Eligibility".to_string(), s.eligibility.clone()),
        ],
        Record::Loan(l) => vec![
            (
                "Max amount".to_string(),
                format!("${}", format_amount(l.max_amount)),
            ),
            ("Interest rate".to_string(), format!("{}% APR", l.interest_rate)),
            (
                "Grace period".to_string(),
                format!("{} months", l.grace_period_months),
            ),
            ("Notes".to_string(), l.notes.clone()),
        ],
    }
}

/// Whole-dollar amount with thousands separators.
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(950), "950");
        assert_eq!(format_amount(1500), "1,500");
        assert_eq!(format_amount(25000), "25,000");
        assert_eq!(format_amount(1234567), "1,234,567");
    }

    #[test]
    fn test_scholarship_subtitle() {
        let catalog = Catalog::embedded().unwrap();
        let record = Record::Scholarship(catalog.scholarships[0].clone());
        assert_eq!(subtitle(&record), "Amount: $2,000 | Min GPA: 3.2");
    }

    #[test]
    fn test_scholarship_without_min_gpa_gets_placeholder() {
        let catalog = Catalog::embedded().unwrap();
        let mut s = catalog.scholarships[0].clone();
        s.min_gpa = None;
        assert_eq!(subtitle(&Record::Scholarship(s)), "Amount: $2,000 | Min GPA: —");
    }

    #[test]
    fn test_loan_subtitle() {
        let catalog = Catalog::embedded().unwrap();
        let record = Record::Loan(catalog.loans[0].clone());
        assert_eq!(subtitle(&record), "Up to $5,000 | 4.2% APR | 6m grace");
    }

    #[test]
    fn test_save_label_tracks_membership() {
        assert_eq!(save_label(true), "Saved");
        assert_eq!(save_label(false), "Save");
    }

    #[test]
    fn test_detail_rows_are_type_specific() {
        let catalog = Catalog::embedded().unwrap();

        let rows = detail_rows(&Record::Scholarship(catalog.scholarships[1].clone()));
        assert_eq!(rows[0], ("Amount".to_string(), "$1,500".to_string()));
        assert!(rows.iter().any(|(label, _)| label == "Eligibility"));

        let rows = detail_rows(&Record::Loan(catalog.loans[1].clone()));
        assert_eq!(rows[0], ("Max amount".to_string(), "$1,500".to_string()));
        assert!(rows.iter().any(|(label, _)| label == "Notes"));
    }
}
