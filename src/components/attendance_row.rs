//! Attendance Row Component
//!
//! One roster entry: presence toggle, name, badge and remove button.

use leptos::prelude::*;

use crate::context::use_board;
use crate::labels;
use crate::models::AttendanceAction;

#[component]
pub fn AttendanceRow(name: String) -> impl IntoView {
    let board = use_board();

    let present = {
        let name = name.clone();
        Memo::new(move |_| board.store.with(|state| state.is_present(&name)))
    };
    let toggle_name = name.clone();
    let remove_name = name.clone();

    view! {
        <div class=move || if present.get() { "attendance-row present" } else { "attendance-row" }>
            <div class="row-main">
                <button
                    class="toggle-btn"
                    on:click=move |_| board.dispatch(AttendanceAction::ToggleAttendance(toggle_name.clone()))
                >
                    {move || if present.get() { "☑" } else { "☐" }}
                </button>
                <span class="row-name">{name}</span>
                <Show when=move || present.get()>
                    <span class="present-badge">{labels::PRESENT_BADGE}</span>
                </Show>
            </div>
            <button
                class="delete-btn"
                on:click=move |_| board.dispatch(AttendanceAction::RemoveName(remove_name.clone()))
            >
                "×"
            </button>
        </div>
    }
}
