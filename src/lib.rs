// FundMatch - Core Library
// Exposes all modules for use in the terminal UI and tests

pub mod app;
pub mod cards;
pub mod catalog;
pub mod profile;
pub mod recommend;
pub mod saved;

// Re-export commonly used types
pub use app::{Action, App, FormField, ProfileForm, Tab, TypeChip};
pub use catalog::{Catalog, LoanRecord, Record, RecordKind, ScholarshipRecord};
pub use profile::{parse_categories, parse_gpa, FundPreference, Profile, COURSES};
pub use recommend::{recommend, Recommendation};
pub use saved::SavedSet;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
