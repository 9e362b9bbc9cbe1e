//! Attendance Statistics
//!
//! Count and percentage helpers shared by the header and footer.

use crate::models::AttendanceSummary;

/// Rounded percentage of `present` over `total`, half rounding up.
///
/// Returns 0 for an empty roster.
pub fn attendance_rate(present: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let present = present.min(total) as u64;
    let total = total as u64;
    // round(100 * p / t) == floor((200 * p + t) / (2 * t))
    ((200 * present + total) / (2 * total)) as u32
}

impl AttendanceSummary {
    pub fn new(present: usize, total: usize) -> Self {
        Self {
            present,
            total,
            rate: attendance_rate(present, total),
        }
    }

    /// Header text, e.g. "1/3"
    pub fn ratio_label(&self) -> String {
        format!("{}/{}", self.present, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_roster_rate_is_zero() {
        assert_eq!(attendance_rate(0, 0), 0);
        assert_eq!(AttendanceSummary::new(0, 0).rate, 0);
    }

    #[test]
    fn test_rate_rounds_to_nearest() {
        assert_eq!(attendance_rate(1, 3), 33);
        assert_eq!(attendance_rate(2, 3), 67);
        assert_eq!(attendance_rate(3, 3), 100);
        assert_eq!(attendance_rate(0, 7), 0);
    }

    #[test]
    fn test_rate_half_rounds_up() {
        // 1/8 = 12.5%, 3/8 = 37.5%
        assert_eq!(attendance_rate(1, 8), 13);
        assert_eq!(attendance_rate(3, 8), 38);
        // 1/200 = 0.5%
        assert_eq!(attendance_rate(1, 200), 1);
    }

    #[test]
    fn test_ratio_label() {
        assert_eq!(AttendanceSummary::new(1, 3).ratio_label(), "1/3");
        assert_eq!(AttendanceSummary::new(0, 0).ratio_label(), "0/0");
    }
}
