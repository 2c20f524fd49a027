//! The flashcard data model.

use chrono::NaiveDate;

/// One flashcard.
///
/// A card's identity is derived from its content at creation time and is
/// never reassigned. The content itself is immutable; only the scheduling
/// state (`bin`, `next_due`) changes over the card's life.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Content-derived identity: lowercase hex MD5 of `content`.
    pub id: String,
    /// The knowledge unit being tested.
    pub content: String,
    /// Spaced-repetition bucket. Counts consecutive successful recalls and
    /// doubles as the day-count interval until the next review.
    pub bin: u32,
    /// Date on which the card becomes eligible for review again.
    pub next_due: NaiveDate,
}

impl Card {
    /// Create a new card in bin 0, due today.
    ///
    /// Identical content produces identical ids. The store does not
    /// deduplicate, so adding the same content twice keeps both cards.
    pub fn new(content: impl Into<String>, today: NaiveDate) -> Self {
        let content = content.into();
        Self {
            id: hash_content(&content),
            content,
            bin: 0,
            next_due: today,
        }
    }
}

/// Lowercase hex MD5 of the card content.
fn hash_content(content: &str) -> String {
    format!("{:x}", md5::compute(content.as_bytes()))
}
