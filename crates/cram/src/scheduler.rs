//! Pure scheduling rules.
//!
//! Which cards are due, and how a review outcome moves a card between bins.
//! Fully deterministic given the card, the outcome, and "today"; no I/O and
//! no clock access.

use chrono::{Days, NaiveDate};

use crate::card::Card;

/// Whether a card is eligible for review on `today`.
///
/// A card whose `next_due` equals `today` is due.
pub fn is_due(card: &Card, today: NaiveDate) -> bool {
    card.next_due <= today
}

/// The due subset of a deck, in stored order.
pub fn due_cards(cards: &[Card], today: NaiveDate) -> impl Iterator<Item = &Card> {
    cards.iter().filter(move |card| is_due(card, today))
}

/// Re-schedule a card after one review.
///
/// A remembered card moves up one bin; a forgotten card drops back to bin 0.
/// The new due date is `today` plus the new bin in days, so a forgotten card
/// is immediately eligible again.
///
/// A hand-edited deck can carry an arbitrarily large (but format-valid) bin,
/// so the increment saturates and the due date clamps to the calendar
/// horizon ([`NaiveDate::MAX`]) instead of overflowing.
///
/// ```
/// use chrono::NaiveDate;
/// use cram::{Card, scheduler};
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// let card = Card::new("capital of France", today);
/// let reviewed = scheduler::apply_outcome(&card, true, today);
/// assert_eq!(reviewed.bin, 1);
/// assert_eq!(reviewed.next_due, NaiveDate::from_ymd_opt(2024, 1, 6).unwrap());
/// ```
pub fn apply_outcome(card: &Card, remembered: bool, today: NaiveDate) -> Card {
    let bin = if remembered { card.bin.saturating_add(1) } else { 0 };
    Card {
        id: card.id.clone(),
        content: card.content.clone(),
        bin,
        next_due: today
            .checked_add_days(Days::new(u64::from(bin)))
            .unwrap_or(NaiveDate::MAX),
    }
}
