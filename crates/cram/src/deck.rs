//! A deck of cards backed by a single CSV file.
//!
//! The deck is loaded fully into memory when a command starts, mutated in
//! memory, and rewritten whole on every mutating operation. One process owns
//! the in-memory list for the duration of one invocation; there is no
//! cross-process locking beyond the store's atomic-replace save.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use crate::card::Card;
use crate::error::{Error, Result};
use crate::store;

/// An ordered set of cards at one file path.
#[derive(Debug, Clone)]
pub struct Deck {
    path: PathBuf,
    cards: Vec<Card>,
}

impl Deck {
    /// Open the deck at `path`.
    ///
    /// Fails fast before touching the store if the path does not end in
    /// `.csv` or does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.extension().and_then(|ext| ext.to_str()) != Some("csv") {
            return Err(Error::NotCsv(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(Error::DeckNotFound(path.to_path_buf()));
        }
        let cards = store::load(path)?;
        debug!(path = %path.display(), cards = cards.len(), "opened deck");
        Ok(Self {
            path: path.to_path_buf(),
            cards,
        })
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The deck's display name: the file stem.
    ///
    /// Threaded into generated questions so the model can phrase them in
    /// context ("you are practicing capitals...").
    pub fn name(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("deck")
    }

    /// The cards in stored order. Read-only; never touches the file.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Append a new card with `bin = 0` and `next_due = today`, then
    /// persist the whole deck immediately.
    ///
    /// Duplicate content is allowed and produces a duplicate id; the store
    /// keeps both rows.
    pub fn add(&mut self, content: impl Into<String>, today: NaiveDate) -> Result<()> {
        let card = Card::new(content, today);
        debug!(id = %card.id, "adding card");
        self.cards.push(card);
        self.save()
    }

    /// Rewrite the backing file from the in-memory cards.
    pub fn save(&self) -> Result<()> {
        store::save(&self.cards, &self.path)
    }

    /// Replace the in-memory cards without saving. Used by the review
    /// session to stage a full pass before its single end-of-pass save.
    pub(crate) fn replace_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn open_rejects_non_csv_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deck.txt");
        fs::write(&path, "").unwrap();
        assert!(matches!(Deck::open(&path), Err(Error::NotCsv(_))));
    }

    #[test]
    fn open_rejects_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        assert!(matches!(Deck::open(&path), Err(Error::DeckNotFound(_))));
    }

    #[test]
    fn open_rejects_malformed_file_without_mutating_it() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deck.csv");
        let body = "id,content\nx,y\n";
        fs::write(&path, body).unwrap();
        assert!(Deck::open(&path).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), body);
    }

    #[test]
    fn add_to_empty_deck_persists_one_card() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deck.csv");
        fs::write(&path, "").unwrap();
        let today = day(2024, 5, 10);

        let mut deck = Deck::open(&path).unwrap();
        deck.add("capital of France", today).unwrap();

        let reloaded = Deck::open(&path).unwrap();
        assert_eq!(reloaded.cards().len(), 1);
        let card = &reloaded.cards()[0];
        assert_eq!(card.bin, 0);
        assert_eq!(card.next_due, today);
        assert!(!card.id.is_empty());
    }

    #[test]
    fn add_keeps_duplicate_content_with_identical_ids() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deck.csv");
        fs::write(&path, "").unwrap();
        let today = day(2024, 5, 10);

        let mut deck = Deck::open(&path).unwrap();
        deck.add("capital of France", today).unwrap();
        deck.add("capital of France", today).unwrap();

        let cards = Deck::open(&path).unwrap().cards().to_vec();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, cards[1].id);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deck.csv");
        fs::write(&path, "").unwrap();
        let today = day(2024, 5, 10);

        let mut deck = Deck::open(&path).unwrap();
        deck.add("first", today).unwrap();
        deck.add("second", today).unwrap();
        deck.add("third", today).unwrap();

        let contents: Vec<_> = Deck::open(&path)
            .unwrap()
            .cards()
            .iter()
            .map(|c| c.content.clone())
            .collect();
        assert_eq!(contents, ["first", "second", "third"]);
    }

    #[test]
    fn reading_cards_never_mutates_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deck.csv");
        fs::write(&path, "").unwrap();
        let mut deck = Deck::open(&path).unwrap();
        deck.add("only card", day(2024, 5, 10)).unwrap();

        let before = fs::read(&path).unwrap();
        let deck = Deck::open(&path).unwrap();
        let first: Vec<_> = deck.cards().iter().map(|c| &c.content).collect();
        let second: Vec<_> = deck.cards().iter().map(|c| &c.content).collect();
        assert_eq!(first, second);
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn name_is_the_file_stem() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("capitals.csv");
        fs::write(&path, "").unwrap();
        assert_eq!(Deck::open(&path).unwrap().name(), "capitals");
    }
}
