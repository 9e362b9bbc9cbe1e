//! Board Header Component
//!
//! Title bar with the live present/total ratio.

use leptos::prelude::*;

use crate::context::use_board;
use crate::labels;

#[component]
pub fn BoardHeader() -> impl IntoView {
    let board = use_board();
    let ratio = Memo::new(move |_| board.store.with(|state| state.summary().ratio_label()));

    view! {
        <header class="board-header">
            <h1>{labels::TITLE}</h1>
            <div class="board-ratio">
                <span class="icon">"👥"</span>
                <span>{move || ratio.get()}</span>
            </div>
        </header>
    }
}
