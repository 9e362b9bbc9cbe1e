//! Attendance Board Entry Point

mod app;
mod components;
mod context;
mod labels;
mod models;
mod search;
mod stats;
mod store;

use app::AttendanceBoard;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(AttendanceBoard);
}
