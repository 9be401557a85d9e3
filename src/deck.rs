use crate::classifier::{classify, Category};
use crate::error::{Error, Result};
use crate::types::{Bill, BillFile};
use std::fs;
use std::path::Path;

/// A bill together with the category its status was classified into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedBill {
    pub bill: Bill,
    pub category: Category,
}

impl From<Bill> for ClassifiedBill {
    fn from(bill: Bill) -> Self {
        let category = classify(&bill.status);
        Self { bill, category }
    }
}

/// The ordered, fixed set of bills for one session.
///
/// Statuses are classified once, as bills enter the deck.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillDeck {
    cards: Vec<ClassifiedBill>,
}

impl BillDeck {
    pub fn new(bills: Vec<Bill>) -> Self {
        Self {
            cards: bills.into_iter().map(ClassifiedBill::from).collect(),
        }
    }

    /// Parse a JSON bill file (bare list or `{"bills": [...]}`)
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let file: BillFile = serde_json::from_str(contents)?;
        Ok(Self::new(file.into_bills()))
    }

    /// Parse a YAML bill file (bare list or `bills:` mapping)
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let file: BillFile = serde_yaml::from_str(contents)?;
        Ok(Self::new(file.into_bills()))
    }

    /// Load a bill file, choosing the format from the extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        let deck = match extension.as_deref() {
            Some("json") => Self::from_json_str(&contents)?,
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents)?,
            _ => {
                return Err(Error::Path(format!(
                    "Unsupported bill file extension (expected .json, .yaml or .yml): {}",
                    path.display()
                )))
            }
        };

        tracing::info!(path = %path.display(), bills = deck.len(), "loaded bill deck");
        Ok(deck)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at `position`; an empty deck reports `EmptyCollection`
    pub fn get(&self, position: usize) -> Result<&ClassifiedBill> {
        if self.cards.is_empty() {
            return Err(Error::EmptyCollection);
        }
        self.cards.get(position).ok_or(Error::PositionOutOfRange {
            position,
            len: self.cards.len(),
        })
    }

    /// Category of the bill at `position`
    pub fn classify_at(&self, position: usize) -> Result<Category> {
        Ok(self.get(position)?.category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassifiedBill> {
        self.cards.iter()
    }
}

impl From<Vec<Bill>> for BillDeck {
    fn from(bills: Vec<Bill>) -> Self {
        Self::new(bills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const YAML: &str = r#"
bills:
  - state: California
    title: Clean Energy Act 2025
    summary: Require utilities to generate 70% clean energy by 2030.
    keyIssues: [Renewable Energy, Environment]
    stats: { like: 120, dislike: 10, watch: 50 }
    status: Senate Floor
    voteDate: "10/01/25"
  - state: U.S. Federal
    title: One Big Beautiful Bill Act (H.R.1)
    summary: Cuts Medicaid/SNAP, changes tax rules, lifts energy restrictions.
    status: In Committee
"#;

    #[test]
    fn test_classifies_on_entry() {
        let deck = BillDeck::from_yaml_str(YAML).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.classify_at(0).unwrap(), Category::Urgent);
        assert_eq!(deck.classify_at(1).unwrap(), Category::Informational);
        assert_eq!(deck.get(1).unwrap().bill.stats.like, 0);
    }

    #[test]
    fn test_empty_deck() {
        let deck = BillDeck::from_json_str("[]").unwrap();
        assert!(deck.is_empty());
        assert!(matches!(deck.get(0), Err(Error::EmptyCollection)));
        assert!(matches!(deck.classify_at(0), Err(Error::EmptyCollection)));
    }

    #[test]
    fn test_out_of_range_position() {
        let deck = BillDeck::from_yaml_str(YAML).unwrap();
        assert!(matches!(
            deck.get(2),
            Err(Error::PositionOutOfRange { position: 2, len: 2 })
        ));
        assert!(matches!(
            deck.classify_at(7),
            Err(Error::PositionOutOfRange { position: 7, len: 2 })
        ));
    }

    #[test]
    fn test_from_path_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("bills.yml");
        fs::File::create(&yaml_path)
            .unwrap()
            .write_all(YAML.as_bytes())
            .unwrap();
        assert_eq!(BillDeck::from_path(&yaml_path).unwrap().len(), 2);

        let txt_path = dir.path().join("bills.txt");
        fs::write(&txt_path, "[]").unwrap();
        assert!(matches!(BillDeck::from_path(&txt_path), Err(Error::Path(_))));

        let missing = dir.path().join("missing.json");
        assert!(matches!(BillDeck::from_path(&missing), Err(Error::Io(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            BillDeck::from_json_str("{\"bills\": 3}"),
            Err(Error::Json(_))
        ));
    }
}
