//! One practice pass over a deck's due cards.
//!
//! The session walks cards in stored order, hands each due card to the
//! external [`Grader`], and re-schedules it from the verdict. The deck file
//! is written exactly once, after the whole pass: either every update
//! commits or none do, so an abort mid-session leaves the on-disk deck
//! untouched.

use std::future::Future;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{Error, Result};
use crate::scheduler;

/// Outcome of grading one response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the response showed the user remembers the content.
    pub remembered: bool,
    /// A corrected answer, supplied when the response was wrong.
    #[serde(default)]
    pub correction: Option<String>,
}

/// External capability that turns a card into a question and the user's
/// response into a verdict.
///
/// Question generation and grading are inherently serial: the grader needs
/// the specific question it asked before it can grade the specific reply,
/// so the session never reviews two cards concurrently.
pub trait Grader {
    /// Quiz the user on one card and return the verdict.
    fn review(&mut self, card: &Card) -> impl Future<Output = Result<Verdict>>;
}

/// Summary of one practice pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    /// Number of due cards reviewed.
    pub reviewed: usize,
    /// Cards the user remembered (bin moved up).
    pub remembered: usize,
    /// Cards the user forgot (bin reset to 0).
    pub forgotten: usize,
}

/// Drives one practice pass over a deck.
///
/// "Today" is injected so sessions are testable and replayable; callers
/// normally pass the current local date.
pub struct ReviewSession<'a, G: Grader> {
    grader: &'a mut G,
    today: NaiveDate,
}

impl<'a, G: Grader> ReviewSession<'a, G> {
    /// Create a session reviewing against `today`.
    pub fn new(grader: &'a mut G, today: NaiveDate) -> Self {
        Self { grader, today }
    }

    /// Review every due card in stored order, then save the deck once.
    ///
    /// `confirm_retry` is consulted on each grader failure; returning `true`
    /// allows one more attempt, and each further failure asks again. If the
    /// retry is declined the whole session aborts with [`Error::Aborted`]
    /// and nothing is saved.
    pub async fn run<F>(&mut self, deck: &mut Deck, mut confirm_retry: F) -> Result<SessionReport>
    where
        F: FnMut(&Error) -> bool,
    {
        let mut report = SessionReport::default();
        let mut updated = Vec::with_capacity(deck.cards().len());

        for card in deck.cards() {
            if !scheduler::is_due(card, self.today) {
                updated.push(card.clone());
                continue;
            }

            let verdict = self.grade_with_retry(card, &mut confirm_retry).await?;
            report.reviewed += 1;
            if verdict.remembered {
                report.remembered += 1;
            } else {
                report.forgotten += 1;
            }
            updated.push(scheduler::apply_outcome(card, verdict.remembered, self.today));
        }

        deck.replace_cards(updated);
        deck.save()?;
        info!(
            reviewed = report.reviewed,
            remembered = report.remembered,
            forgotten = report.forgotten,
            "practice pass saved"
        );
        Ok(report)
    }

    async fn grade_with_retry<F>(&mut self, card: &Card, confirm_retry: &mut F) -> Result<Verdict>
    where
        F: FnMut(&Error) -> bool,
    {
        loop {
            match self.grader.review(card).await {
                Ok(verdict) => return Ok(verdict),
                Err(err) => {
                    debug!(id = %card.id, error = %err, "grader failure");
                    if confirm_retry(&err) {
                        continue;
                    }
                    return Err(Error::Aborted);
                }
            }
        }
    }
}
