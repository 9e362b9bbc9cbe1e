//! Summary Footer Component
//!
//! Literal counts and the rounded attendance rate.

use leptos::prelude::*;

use crate::context::use_board;
use crate::labels;

#[component]
pub fn SummaryFooter() -> impl IntoView {
    let board = use_board();
    let summary = Memo::new(move |_| board.store.with(|state| state.summary()));

    view! {
        <footer class="summary-footer">
            <div class="summary-counts">
                {move || {
                    let s = summary.get();
                    labels::footer_counts(s.present, s.total)
                }}
            </div>
            <div class="summary-rate">{move || labels::footer_rate(summary.get().rate)}</div>
        </footer>
    }
}
