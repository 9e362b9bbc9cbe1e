//! Name Input Component
//!
//! Text field and add button for registering new names.

use leptos::prelude::*;

use crate::context::use_board;
use crate::labels;
use crate::models::AttendanceAction;
use crate::store::AttendanceStateStoreFields;

/// Input row for new names. Enter or the add button submits.
#[component]
pub fn NameInput() -> impl IntoView {
    let board = use_board();
    let pending = board.store.pending_name();

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == labels::CONFIRM_KEY {
            ev.prevent_default();
            board.dispatch(AttendanceAction::SubmitPending);
        }
    };

    view! {
        <div class="name-input-row">
            <input
                type="text"
                placeholder=labels::NAME_PLACEHOLDER
                prop:value=move || pending.get()
                on:input=move |ev| board.dispatch(AttendanceAction::SetPendingName(event_target_value(&ev)))
                on:keydown=on_keydown
            />
            <button class="add-btn" on:click=move |_| board.dispatch(AttendanceAction::SubmitPending)>
                "+"
            </button>
        </div>
    }
}
