//! Board Context
//!
//! Dispatch handle provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::{AttendanceAction, AttendanceSummary};
use crate::store::AttendanceStore;

/// Board-wide dispatcher provided via context
#[derive(Clone, Copy)]
pub struct BoardContext {
    pub store: AttendanceStore,
}

impl BoardContext {
    pub fn new(store: AttendanceStore) -> Self {
        Self { store }
    }

    /// Run an action through the reducer and log it if it changed the board
    pub fn dispatch(&self, action: AttendanceAction) {
        let changed = self
            .store
            .try_maybe_update(|state| {
                let changed = state.apply(action.clone());
                (changed, changed)
            })
            .unwrap_or(false);

        let summary = self.store.with_untracked(|state| state.summary());
        if let Some(line) = dispatch_log_line(&action, changed, &summary) {
            web_sys::console::log_1(&line.into());
        }
    }
}

/// Console line for a dispatched action.
///
/// Rejected actions and input edits produce nothing.
fn dispatch_log_line(
    action: &AttendanceAction,
    changed: bool,
    summary: &AttendanceSummary,
) -> Option<String> {
    if !changed || action.is_input_edit() {
        return None;
    }
    Some(format!(
        "[BOARD] applied {} -> {}",
        serde_json::to_string(action).unwrap_or_default(),
        serde_json::to_string(summary).unwrap_or_default()
    ))
}

/// Get the board context
pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_action_is_not_logged() {
        let action = AttendanceAction::AddName("   ".into());
        assert_eq!(dispatch_log_line(&action, false, &AttendanceSummary::new(0, 0)), None);

        let action = AttendanceAction::ToggleAttendance("Zed".into());
        assert_eq!(dispatch_log_line(&action, false, &AttendanceSummary::new(0, 1)), None);
    }

    #[test]
    fn test_input_edits_are_not_logged() {
        let summary = AttendanceSummary::new(0, 1);
        assert_eq!(
            dispatch_log_line(&AttendanceAction::SetPendingName("Al".into()), true, &summary),
            None
        );
        assert_eq!(
            dispatch_log_line(&AttendanceAction::SetSearchTerm("al".into()), true, &summary),
            None
        );
    }

    #[test]
    fn test_applied_action_logs_action_and_summary() {
        let line = dispatch_log_line(
            &AttendanceAction::ToggleAttendance("Bob".into()),
            true,
            &AttendanceSummary::new(1, 3),
        );
        assert_eq!(
            line.as_deref(),
            Some(r#"[BOARD] applied {"type":"ToggleAttendance","value":"Bob"} -> {"present":1,"total":3,"rate":33}"#)
        );
    }
}
