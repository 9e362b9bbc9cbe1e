//! Board Controls Component
//!
//! Search field and bulk attendance actions. Rendered only while the
//! roster has names.

use leptos::prelude::*;

use crate::context::use_board;
use crate::labels;
use crate::models::AttendanceAction;
use crate::store::AttendanceStateStoreFields;

#[component]
pub fn BoardControls() -> impl IntoView {
    let board = use_board();
    let search_term = board.store.search_term();

    view! {
        <section class="board-controls">
            <div class="search-box">
                <span class="search-icon">"🔍"</span>
                <input
                    type="text"
                    placeholder=labels::SEARCH_PLACEHOLDER
                    prop:value=move || search_term.get()
                    on:input=move |ev| board.dispatch(AttendanceAction::SetSearchTerm(event_target_value(&ev)))
                />
            </div>
            <div class="bulk-actions">
                <button
                    class="bulk-btn mark-present"
                    on:click=move |_| board.dispatch(AttendanceAction::MarkAll(true))
                >
                    {labels::MARK_ALL_PRESENT}
                </button>
                <button
                    class="bulk-btn mark-absent"
                    on:click=move |_| board.dispatch(AttendanceAction::MarkAll(false))
                >
                    {labels::MARK_ALL_ABSENT}
                </button>
                <button
                    class="bulk-btn reset"
                    title=labels::RESET
                    on:click=move |_| board.dispatch(AttendanceAction::ResetAll)
                >
                    "↺"
                </button>
            </div>
        </section>
    }
}
