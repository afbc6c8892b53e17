// Application State + Action Dispatch
// All mutable session state lives here, owned by one App value and driven
// through an explicit Action table so the logic is testable without a
// terminal. The UI layer only translates input events into Actions.

use crate::catalog::{Catalog, Record, RecordKind};
use crate::profile::{parse_gpa, FundPreference, Profile, COURSES};
use crate::recommend::{recommend, Recommendation};
use crate::saved::SavedSet;

// ============================================================================
// TABS
// ============================================================================

/// The four view panes. Exactly one is active at a time; any tab is
/// reachable from any tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Profile,
    Results,
    Saved,
}

impl Tab {
    pub fn next(&self) -> Self {
        match self {
            Tab::Home => Tab::Profile,
            Tab::Profile => Tab::Results,
            Tab::Results => Tab::Saved,
            Tab::Saved => Tab::Home,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Tab::Home => Tab::Saved,
            Tab::Profile => Tab::Home,
            Tab::Results => Tab::Profile,
            Tab::Saved => Tab::Results,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Profile => "Profile",
            Tab::Results => "Results",
            Tab::Saved => "Saved",
        }
    }
}

// ============================================================================
// FILTER CHIPS
// ============================================================================

/// Type filter applied to the last recommendations. Single-select: picking
/// one deactivates the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeChip {
    Both,
    ScholarshipOnly,
    LoanOnly,
}

impl TypeChip {
    pub fn admits(&self, kind: RecordKind) -> bool {
        match self {
            TypeChip::Both => true,
            TypeChip::ScholarshipOnly => kind == RecordKind::Scholarship,
            TypeChip::LoanOnly => kind == RecordKind::Loan,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TypeChip::Both => "All",
            TypeChip::ScholarshipOnly => "Scholarships",
            TypeChip::LoanOnly => "Loans",
        }
    }
}

// ============================================================================
// PROFILE FORM
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Gpa,
    Preference,
    Course,
    OtherCourse,
    Categories,
}

/// Edit buffers for the profile form. Text fields accumulate characters;
/// select fields cycle with the space key.
#[derive(Debug, Clone)]
pub struct ProfileForm {
    pub gpa: String,
    pub preference: FundPreference,
    pub course_index: usize,
    pub other_course: String,
    pub categories: String,
    pub focus: FormField,
}

impl Default for ProfileForm {
    fn default() -> Self {
        ProfileForm {
            gpa: String::new(),
            preference: FundPreference::Both,
            course_index: 0,
            other_course: String::new(),
            categories: String::new(),
            focus: FormField::Gpa,
        }
    }
}

impl ProfileForm {
    /// The free-text course input only exists while "Other" is selected.
    pub fn other_course_visible(&self) -> bool {
        COURSES[self.course_index] == "Other"
    }

    pub fn course_label(&self) -> &'static str {
        COURSES[self.course_index]
    }

    fn field_order(&self) -> Vec<FormField> {
        let mut order = vec![FormField::Gpa, FormField::Preference, FormField::Course];
        if self.other_course_visible() {
            order.push(FormField::OtherCourse);
        }
        order.push(FormField::Categories);
        order
    }

    pub fn focus_next(&mut self) {
        let order = self.field_order();
        let i = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(i + 1) % order.len()];
    }

    pub fn focus_previous(&mut self) {
        let order = self.field_order();
        let i = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(i + order.len() - 1) % order.len()];
    }

    pub fn input(&mut self, c: char) {
        match self.focus {
            FormField::Gpa => self.gpa.push(c),
            FormField::Categories => self.categories.push(c),
            FormField::OtherCourse => self.other_course.push(c),
            FormField::Preference => {
                if c == ' ' {
                    self.preference = self.preference.next();
                }
            }
            FormField::Course => {
                if c == ' ' {
                    self.course_index = (self.course_index + 1) % COURSES.len();
                    if !self.other_course_visible() {
                        self.other_course.clear();
                    }
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Gpa => {
                self.gpa.pop();
            }
            FormField::Categories => {
                self.categories.pop();
            }
            FormField::OtherCourse => {
                self.other_course.pop();
            }
            FormField::Preference | FormField::Course => {}
        }
    }

    /// Snapshot the buffers into a Profile. Malformed GPA text becomes 0.0.
    pub fn to_profile(&self) -> Profile {
        let course = if self.other_course_visible() {
            self.other_course.as_str()
        } else {
            self.course_label()
        };
        Profile::new(parse_gpa(&self.gpa), self.preference, &self.categories, course)
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Everything a user interaction can request of the application. The UI maps
/// key events to these; dispatch below maps them to state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GoTab(Tab),
    NextTab,
    PreviousTab,
    /// The "get started" affordance; always lands on the profile form.
    GetStarted,
    FocusNext,
    FocusPrevious,
    Input(char),
    Backspace,
    /// Submit the profile form; always lands on results.
    Submit,
    SelectChip(TypeChip),
    CursorDown,
    CursorUp,
    OpenDetails,
    CloseModal,
    ToggleSave,
    RemoveSaved,
}

// ============================================================================
// APP
// ============================================================================

pub struct App {
    pub catalog: Catalog,
    pub tab: Tab,
    pub form: ProfileForm,

    /// Most recent filter output; replaced wholesale on each submission.
    /// Chips re-slice this without recomputing the filter.
    pub last_recommendations: Vec<Recommendation>,
    pub chip: TypeChip,

    pub saved: SavedSet,
    pub results_cursor: usize,
    pub saved_cursor: usize,
    pub modal: Option<Record>,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        App {
            catalog,
            tab: Tab::Home,
            form: ProfileForm::default(),
            last_recommendations: Vec::new(),
            chip: TypeChip::Both,
            saved: SavedSet::new(),
            results_cursor: 0,
            saved_cursor: 0,
            modal: None,
        }
    }

    /// Recommendations admitted by the active chip, in last-submission order.
    pub fn visible_results(&self) -> Vec<&Recommendation> {
        self.last_recommendations
            .iter()
            .filter(|r| self.chip.admits(r.record.kind()))
            .collect()
    }

    /// Saved records in catalog order (scholarships first, then loans).
    pub fn saved_records(&self) -> Vec<Record> {
        self.catalog
            .records()
            .into_iter()
            .filter(|r| self.saved.contains(r.id()))
            .collect()
    }

    fn selected_result(&self) -> Option<&Recommendation> {
        self.visible_results().get(self.results_cursor).copied()
    }

    fn selected_saved(&self) -> Option<Record> {
        self.saved_records().get(self.saved_cursor).cloned()
    }

    fn active_list_len(&self) -> usize {
        match self.tab {
            Tab::Results => self.visible_results().len(),
            Tab::Saved => self.saved_records().len(),
            _ => 0,
        }
    }

    fn cursor_mut(&mut self) -> Option<&mut usize> {
        match self.tab {
            Tab::Results => Some(&mut self.results_cursor),
            Tab::Saved => Some(&mut self.saved_cursor),
            _ => None,
        }
    }

    /// Apply one action. Handlers run to completion; there is no other way
    /// to mutate session state.
    pub fn dispatch(&mut self, action: Action) {
        // The modal overlays everything; while shown, only closing applies.
        if self.modal.is_some() {
            if action == Action::CloseModal {
                self.modal = None;
            }
            return;
        }

        match action {
            Action::GoTab(tab) => self.tab = tab,
            Action::NextTab => self.tab = self.tab.next(),
            Action::PreviousTab => self.tab = self.tab.previous(),
            Action::GetStarted => self.tab = Tab::Profile,

            Action::FocusNext => {
                if self.tab == Tab::Profile {
                    self.form.focus_next();
                }
            }
            Action::FocusPrevious => {
                if self.tab == Tab::Profile {
                    self.form.focus_previous();
                }
            }
            Action::Input(c) => {
                if self.tab == Tab::Profile {
                    self.form.input(c);
                }
            }
            Action::Backspace => {
                if self.tab == Tab::Profile {
                    self.form.backspace();
                }
            }

            Action::Submit => {
                if self.tab == Tab::Profile {
                    self.submit_profile();
                }
            }

            Action::SelectChip(chip) => {
                self.chip = chip;
                self.results_cursor = 0;
            }

            Action::CursorDown => self.cursor_down(),
            Action::CursorUp => self.cursor_up(),

            Action::OpenDetails => {
                // Opening replaces any previously shown record; no stacking.
                self.modal = match self.tab {
                    Tab::Results => self.selected_result().map(|r| r.record.clone()),
                    Tab::Saved => self.selected_saved(),
                    _ => None,
                };
            }
            Action::CloseModal => {}

            Action::ToggleSave => {
                if self.tab == Tab::Results {
                    let id = self.selected_result().map(|r| r.record.id().to_string());
                    if let Some(id) = id {
                        self.saved.toggle(&id);
                    }
                } else if self.tab == Tab::Saved {
                    self.remove_selected_saved();
                }
            }
            Action::RemoveSaved => {
                if self.tab == Tab::Saved {
                    self.remove_selected_saved();
                }
            }
        }
    }

    fn submit_profile(&mut self) {
        let profile = self.form.to_profile();
        self.last_recommendations = recommend(&profile, &self.catalog);
        self.chip = TypeChip::Both;
        self.results_cursor = 0;
        self.tab = Tab::Results;
    }

    fn remove_selected_saved(&mut self) {
        if let Some(record) = self.selected_saved() {
            self.saved.remove(record.id());
            let len = self.saved_records().len();
            if self.saved_cursor >= len {
                self.saved_cursor = len.saturating_sub(1);
            }
        }
    }

    fn cursor_down(&mut self) {
        let len = self.active_list_len();
        if len == 0 {
            return;
        }
        if let Some(cursor) = self.cursor_mut() {
            *cursor = if *cursor >= len - 1 { 0 } else { *cursor + 1 };
        }
    }

    fn cursor_up(&mut self) {
        let len = self.active_list_len();
        if len == 0 {
            return;
        }
        if let Some(cursor) = self.cursor_mut() {
            *cursor = if *cursor == 0 { len - 1 } else { *cursor - 1 };
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
