//! Board Models
//!
//! Actions the board reacts to and the summary it derives.

use serde::Serialize;

/// A single user gesture, applied to the board state by the reducer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum AttendanceAction {
    /// Edit the new-name input buffer
    SetPendingName(String),
    /// Add the current input buffer (add button or Enter)
    SubmitPending,
    /// Add a name directly
    AddName(String),
    RemoveName(String),
    ToggleAttendance(String),
    /// Everyone back to absent
    ResetAll,
    MarkAll(bool),
    SetSearchTerm(String),
}

/// Aggregate counts shown in the header and footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AttendanceSummary {
    pub present: usize,
    pub total: usize,
    /// Rounded percentage, 0 when the roster is empty
    pub rate: u32,
}

impl AttendanceAction {
    /// Keystroke-level edits of the input fields
    pub fn is_input_edit(&self) -> bool {
        matches!(self, Self::SetPendingName(_) | Self::SetSearchTerm(_))
    }
}
