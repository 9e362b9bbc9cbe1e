//! Search Utilities
//!
//! Case-insensitive name filtering for the roster view.

/// Check if `term` appears anywhere in `name`, ignoring case
pub fn matches_search(term: &str, name: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&term.to_lowercase())
}

/// Roster subset matching `term`, in roster order
pub fn filter_names(roster: &[String], term: &str) -> Vec<String> {
    roster
        .iter()
        .filter(|name| matches_search(term, name))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_matches_search_ignores_case() {
        assert!(matches_search("al", "Alice"));
        assert!(matches_search("AL", "alice"));
        assert!(matches_search("ic", "ALICE"));
        assert!(!matches_search("bo", "Alice"));
    }

    #[test]
    fn test_empty_term_matches_everything() {
        assert!(matches_search("", "Alice"));
        assert!(matches_search("", ""));
    }

    #[test]
    fn test_filter_names_keeps_roster_order() {
        let names = roster(&["Alice", "Bob", "alice", "Malory"]);
        assert_eq!(filter_names(&names, "al"), roster(&["Alice", "alice", "Malory"]));
        assert_eq!(filter_names(&names, ""), names);
        assert!(filter_names(&names, "zed").is_empty());
    }

    #[test]
    fn test_filter_names_non_ascii() {
        let names = roster(&["김철수", "이영희"]);
        assert_eq!(filter_names(&names, "영"), roster(&["이영희"]));
    }
}
