use serde::{Deserialize, Serialize};

/// Status fragments that mean a vote is imminent
const URGENT_MARKERS: &[&str] = &["floor", "voting", "vote"];

/// Status fragments that mean the bill is still being worked on
const INFORMATIONAL_MARKERS: &[&str] = &["committee"];

const URGENT_ADVISORY: &str = "Voting soon. Send a letter!";
const INFORMATIONAL_ADVISORY: &str = "In committee. Share your opinion early.";

/// Advisory category derived from a bill's free-text status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Urgent,
    Informational,
    None,
}

impl Category {
    /// Call-to-action text for this category, if any
    pub const fn advisory(self) -> Option<&'static str> {
        match self {
            Category::Urgent => Some(URGENT_ADVISORY),
            Category::Informational => Some(INFORMATIONAL_ADVISORY),
            Category::None => None,
        }
    }

    /// Whether the call-to-action should be emphasized (pulsing button).
    /// Always derived from the category so it cannot drift from the advisory.
    pub const fn needs_emphasis(self) -> bool {
        matches!(self, Category::Urgent)
    }
}

impl From<&str> for Category {
    fn from(status: &str) -> Self {
        classify(status)
    }
}

/// Classify a status label. Matching is a case-insensitive substring search;
/// urgent markers take precedence over informational ones.
pub fn classify(status: &str) -> Category {
    let status = status.to_lowercase();
    let contains_any = |markers: &[&str]| markers.iter().any(|m| status.contains(m));

    if contains_any(URGENT_MARKERS) {
        Category::Urgent
    } else if contains_any(INFORMATIONAL_MARKERS) {
        Category::Informational
    } else {
        Category::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_case_insensitive() {
        assert_eq!(classify("Senate Floor"), Category::Urgent);
        assert_eq!(classify("senate floor"), Category::Urgent);
        assert_eq!(classify("SENATE FLOOR"), Category::Urgent);
        assert_eq!(classify("In Committee"), Category::Informational);
        assert_eq!(classify("in COMMITTEE"), Category::Informational);
    }

    #[test]
    fn test_classify_vote_markers() {
        assert_eq!(classify("Voting scheduled"), Category::Urgent);
        assert_eq!(classify("Final vote"), Category::Urgent);
        assert_eq!(classify("Vote pending"), Category::Urgent);
    }

    #[test]
    fn test_urgent_takes_precedence() {
        // Mentions both; the floor/vote rule wins
        assert_eq!(classify("Committee vote"), Category::Urgent);
        assert_eq!(classify("Out of committee, to floor"), Category::Urgent);
    }

    #[test]
    fn test_classify_falls_through_to_none() {
        assert_eq!(classify(""), Category::None);
        assert_eq!(classify("   "), Category::None);
        assert_eq!(classify("Introduced"), Category::None);
        assert_eq!(classify("Signed by Governor"), Category::None);
    }

    #[test]
    fn test_advisory_mapping() {
        let urgent = Category::Urgent.advisory().unwrap();
        let info = Category::Informational.advisory().unwrap();
        assert!(!urgent.is_empty());
        assert!(!info.is_empty());
        assert_ne!(urgent, info);
        assert!(Category::None.advisory().is_none());
    }

    #[test]
    fn test_emphasis_follows_category() {
        for status in ["Senate Floor", "House vote", "In Committee", "Introduced", ""] {
            let category = classify(status);
            assert_eq!(category.needs_emphasis(), category == Category::Urgent);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Category::from("House Floor"), Category::Urgent);
    }
}
