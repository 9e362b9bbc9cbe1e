//! UI Labels
//!
//! Literal strings shown on the board.

pub const TITLE: &str = "출석체크";
pub const NAME_PLACEHOLDER: &str = "이름을 입력하세요";
pub const SEARCH_PLACEHOLDER: &str = "이름 검색...";
pub const MARK_ALL_PRESENT: &str = "전체 출석";
pub const MARK_ALL_ABSENT: &str = "전체 미출석";
pub const RESET: &str = "초기화";
pub const EMPTY_ROSTER: &str = "이름을 추가해주세요";
pub const NO_RESULTS: &str = "검색 결과가 없습니다";
pub const PRESENT_BADGE: &str = "출석";

/// Key that submits the new-name input
pub const CONFIRM_KEY: &str = "Enter";

/// Footer count line, e.g. "출석: 1명 / 전체: 3명"
pub fn footer_counts(present: usize, total: usize) -> String {
    format!("출석: {}명 / 전체: {}명", present, total)
}

/// Footer rate line, e.g. "출석률: 33%"
pub fn footer_rate(rate: u32) -> String {
    format!("출석률: {}%", rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_labels() {
        assert_eq!(footer_counts(1, 3), "출석: 1명 / 전체: 3명");
        assert_eq!(footer_rate(33), "출석률: 33%");
    }
}
