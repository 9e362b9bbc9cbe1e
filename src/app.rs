//! Attendance Board App
//!
//! Root component: owns the store and lays out the board.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AttendanceList, BoardControls, BoardHeader, NameInput, SummaryFooter};
use crate::context::BoardContext;
use crate::store::{AttendanceState, AttendanceStateStoreFields};

#[component]
pub fn AttendanceBoard() -> impl IntoView {
    let store = Store::new(AttendanceState::new());

    // Provide context to all children
    provide_context(BoardContext::new(store));

    let has_names = Memo::new(move |_| store.roster().with(|roster| !roster.is_empty()));

    view! {
        <div class="board-layout">
            <BoardHeader />
            <NameInput />
            <Show when=move || has_names.get()>
                <BoardControls />
            </Show>
            <AttendanceList />
            <Show when=move || has_names.get()>
                <SummaryFooter />
            </Show>
        </div>
    }
}
