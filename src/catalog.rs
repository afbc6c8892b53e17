// Static Catalog - scholarship and loan records
// Records are immutable after load; the catalog lives for the process lifetime.

use anyhow::{bail, Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Catalog bundled into the binary; the default data source.
const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

// ============================================================================
// RECORD TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScholarshipRecord {
    /// Stable identifier, unique across both catalogs
    pub id: String,

    pub name: String,

    /// Award amount in whole dollars
    pub amount: u64,

    /// Minimum GPA requirement; None means no requirement
    pub min_gpa: Option<f64>,

    /// Category tags matched against profile tokens (set semantics)
    pub categories: Vec<String>,

    pub eligibility: String,

    pub apply_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRecord {
    /// Stable identifier, unique across both catalogs
    pub id: String,

    pub name: String,

    /// Maximum loan amount in whole dollars
    pub max_amount: u64,

    /// Annual percentage rate
    pub interest_rate: f64,

    pub grace_period_months: u32,

    pub notes: String,

    pub apply_url: String,
}

/// Which catalog a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Scholarship,
    Loan,
}

impl RecordKind {
    pub fn badge(&self) -> &'static str {
        match self {
            RecordKind::Scholarship => "Scholarship",
            RecordKind::Loan => "Loan",
        }
    }
}

/// A catalog entry of either kind, so downstream components can handle one
/// ordered sequence of records.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Scholarship(ScholarshipRecord),
    Loan(LoanRecord),
}

impl Record {
    pub fn id(&self) -> &str {
        match self {
            Record::Scholarship(s) => &s.id,
            Record::Loan(l) => &l.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Record::Scholarship(s) => &s.name,
            Record::Loan(l) => &l.name,
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Scholarship(_) => RecordKind::Scholarship,
            Record::Loan(_) => RecordKind::Loan,
        }
    }

    pub fn apply_url(&self) -> &str {
        match self {
            Record::Scholarship(s) => &s.apply_url,
            Record::Loan(l) => &l.apply_url,
        }
    }
}

// ============================================================================
// CATALOG
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub scholarships: Vec<ScholarshipRecord>,
    pub loans: Vec<LoanRecord>,
}

impl Catalog {
    /// Load the catalog bundled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG).context("Failed to parse embedded catalog")
    }

    /// Load a catalog from an external JSON file. Any feed honoring the
    /// record shape can replace the embedded data.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read catalog file: {:?}", path.as_ref()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse catalog file: {:?}", path.as_ref()))
    }

    fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Record identifiers must be unique across both catalogs; the saved set
    /// and the modal resolve records by id.
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for id in self.ids() {
            if !seen.insert(id) {
                bail!("Duplicate record id in catalog: {}", id);
            }
        }
        Ok(())
    }

    fn ids(&self) -> impl Iterator<Item = &str> {
        self.scholarships
            .iter()
            .map(|s| s.id.as_str())
            .chain(self.loans.iter().map(|l| l.id.as_str()))
    }

    /// All records in catalog order: scholarships first, then loans.
    pub fn records(&self) -> Vec<Record> {
        self.scholarships
            .iter()
            .cloned()
            .map(Record::Scholarship)
            .chain(self.loans.iter().cloned().map(Record::Loan))
            .collect()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.ids().any(|i| i == id)
    }

    pub fn record_count(&self) -> usize {
        self.scholarships.len() + self.loans.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.scholarships.len(), 2);
        assert_eq!(catalog.loans.len(), 2);
        assert_eq!(catalog.record_count(), 4);
    }

    #[test]
    fn test_embedded_catalog_records() {
        let catalog = Catalog::embedded().unwrap();

        assert!(catalog.contains_id("scholarship_A_gpa35"));
        assert!(catalog.contains_id("scholarship_B_low_income"));
        assert!(catalog.contains_id("loan_A_student_friendly"));
        assert!(catalog.contains_id("loan_B_micro"));
        assert!(!catalog.contains_id("grant_C_unknown"));

        let merit = &catalog.scholarships[0];
        assert_eq!(merit.name, "Merit Scholars Award");
        assert_eq!(merit.min_gpa, Some(3.2));
        assert_eq!(merit.categories, vec!["STEM", "Merit"]);
    }

    #[test]
    fn test_records_order_scholarships_first() {
        let catalog = Catalog::embedded().unwrap();
        let records = catalog.records();

        assert_eq!(records.len(), 4);
        assert_eq!(records[0].kind(), RecordKind::Scholarship);
        assert_eq!(records[1].kind(), RecordKind::Scholarship);
        assert_eq!(records[2].kind(), RecordKind::Loan);
        assert_eq!(records[3].kind(), RecordKind::Loan);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{
            "scholarships": [{
                "id": "dup",
                "name": "A",
                "amount": 100,
                "min_gpa": null,
                "categories": [],
                "eligibility": "",
                "apply_url": ""
            }],
            "loans": [{
                "id": "dup",
                "name": "B",
                "max_amount": 100,
                "interest_rate": 1.0,
                "grace_period_months": 1,
                "notes": "",
                "apply_url": ""
            }]
        }"#;

        let result = Catalog::from_json(json);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("dup"));
    }
}
