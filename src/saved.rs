// Saved-Set Store
// In-memory bookmarks: a set of record identifiers toggled by the user.
// No capacity limit, no persistence; cleared when the process exits.

use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct SavedSet {
    ids: HashSet<String>,
}

impl SavedSet {
    pub fn new() -> Self {
        SavedSet::default()
    }

    /// Add the id if absent, remove it if present. Returns the new
    /// membership so the acting control can update its label immediately.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.ids.remove(id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut saved = SavedSet::new();

        assert!(saved.toggle("loan_B_micro"));
        assert!(saved.contains("loan_B_micro"));
        assert_eq!(saved.len(), 1);

        assert!(!saved.toggle("loan_B_micro"));
        assert!(!saved.contains("loan_B_micro"));
        assert!(saved.is_empty());
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let mut saved = SavedSet::new();
        saved.toggle("scholarship_A_gpa35");
        let before: Vec<_> = ["scholarship_A_gpa35", "loan_B_micro"]
            .iter()
            .map(|id| saved.contains(id))
            .collect();

        saved.toggle("loan_B_micro");
        saved.toggle("loan_B_micro");

        let after: Vec<_> = ["scholarship_A_gpa35", "loan_B_micro"]
            .iter()
            .map(|id| saved.contains(id))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut saved = SavedSet::new();
        saved.toggle("loan_A_student_friendly");
        saved.remove("loan_A_student_friendly");
        saved.remove("loan_A_student_friendly");
        assert!(saved.is_empty());
    }
}
