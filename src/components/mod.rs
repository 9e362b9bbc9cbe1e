//! UI Components
//!
//! Pieces of the attendance board.

mod attendance_list;
mod attendance_row;
mod board_controls;
mod board_header;
mod name_input;
mod summary_footer;

pub use attendance_list::AttendanceList;
pub use attendance_row::AttendanceRow;
pub use board_controls::BoardControls;
pub use board_header::BoardHeader;
pub use name_input::NameInput;
pub use summary_footer::SummaryFooter;
