//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All mutation goes
//! through [`AttendanceState::apply`], a plain reducer that can be tested
//! without a renderer.

use std::collections::HashMap;

use reactive_stores::Store;

use crate::models::{AttendanceAction, AttendanceSummary};
use crate::search::filter_names;

/// Whole board state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AttendanceState {
    /// Registered names in insertion order, unique (case-sensitive)
    pub roster: Vec<String>,
    /// Presence flag per roster name; keys always equal the roster
    pub attendance: HashMap<String, bool>,
    /// Current filter for the rendered list
    pub search_term: String,
    /// New-name input buffer
    pub pending_name: String,
}

impl AttendanceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action. Returns false if the action was rejected or
    /// changed nothing.
    pub fn apply(&mut self, action: AttendanceAction) -> bool {
        match action {
            AttendanceAction::SetPendingName(text) => replace(&mut self.pending_name, text),
            AttendanceAction::SubmitPending => {
                let text = std::mem::take(&mut self.pending_name);
                if self.add_name(&text) {
                    true
                } else {
                    // Rejected input stays in the field
                    self.pending_name = text;
                    false
                }
            }
            AttendanceAction::AddName(text) => {
                let added = self.add_name(&text);
                if added {
                    self.pending_name.clear();
                }
                added
            }
            AttendanceAction::RemoveName(name) => self.remove_name(&name),
            AttendanceAction::ToggleAttendance(name) => match self.attendance.get_mut(&name) {
                Some(present) => {
                    *present = !*present;
                    true
                }
                None => false,
            },
            AttendanceAction::ResetAll => self.mark_all(false),
            AttendanceAction::MarkAll(status) => self.mark_all(status),
            AttendanceAction::SetSearchTerm(term) => replace(&mut self.search_term, term),
        }
    }

    fn add_name(&mut self, input: &str) -> bool {
        let name = input.trim();
        if name.is_empty() || self.attendance.contains_key(name) {
            return false;
        }
        self.roster.push(name.to_string());
        self.attendance.insert(name.to_string(), false);
        true
    }

    fn remove_name(&mut self, name: &str) -> bool {
        if self.attendance.remove(name).is_none() {
            return false;
        }
        self.roster.retain(|n| n != name);
        true
    }

    fn mark_all(&mut self, status: bool) -> bool {
        let mut changed = false;
        for name in &self.roster {
            let flag = self.attendance.entry(name.clone()).or_default();
            changed |= *flag != status;
            *flag = status;
        }
        changed
    }

    pub fn is_present(&self, name: &str) -> bool {
        self.attendance.get(name).copied().unwrap_or(false)
    }

    /// Roster subset matching the search term
    pub fn filtered_names(&self) -> Vec<String> {
        filter_names(&self.roster, &self.search_term)
    }

    /// Counted over the roster, so map iteration order never matters
    pub fn present_count(&self) -> usize {
        self.roster.iter().filter(|name| self.is_present(name)).count()
    }

    pub fn total_count(&self) -> usize {
        self.roster.len()
    }

    pub fn summary(&self) -> AttendanceSummary {
        AttendanceSummary::new(self.present_count(), self.total_count())
    }
}

fn replace(slot: &mut String, value: String) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Type alias for the store
pub type AttendanceStore = Store<AttendanceState>;
