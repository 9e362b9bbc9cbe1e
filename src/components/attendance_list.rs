//! Attendance List Component
//!
//! Filtered roster, or the empty / no-results message.

use leptos::prelude::*;

use crate::components::AttendanceRow;
use crate::context::use_board;
use crate::labels;

#[component]
pub fn AttendanceList() -> impl IntoView {
    let board = use_board();
    let filtered = Memo::new(move |_| board.store.with(|state| state.filtered_names()));
    let roster_empty = Memo::new(move |_| board.store.with(|state| state.total_count() == 0));

    view! {
        <section class="attendance-list">
            <Show
                when=move || !filtered.get().is_empty()
                fallback=move || {
                    if roster_empty.get() {
                        view! {
                            <div class="list-empty">
                                <div class="icon">"👥"</div>
                                <p>{labels::EMPTY_ROSTER}</p>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <div class="list-empty">
                                <p>{labels::NO_RESULTS}</p>
                            </div>
                        }.into_any()
                    }
                }
            >
                <For
                    each=move || filtered.get()
                    key=|name| name.clone()
                    children=move |name| view! { <AttendanceRow name=name /> }
                />
            </Show>
        </section>
    }
}
