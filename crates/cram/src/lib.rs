//! Core engine for the `cram` spaced-repetition trainer.
//!
//! A deck is a flat CSV file of cards. Each card carries a `bin` counting
//! consecutive successful recalls, which doubles as the day-count interval
//! until the card is due again: remember a card and its bin goes up one,
//! forget it and it drops back to bin 0 (due again the same day).
//!
//! This crate owns the parts with real invariants: the card store
//! ([`store`]), the pure scheduling rules ([`scheduler`]), the deck
//! operations ([`Deck`]), and the review-session orchestrator
//! ([`ReviewSession`]). Asking the actual questions is delegated to an
//! external [`Grader`]; the `cram-quiz` crate provides one backed by a chat
//! model.
//!
//! # Quick Start
//!
//! ```no_run
//! use chrono::Local;
//! use cram::{Deck, ReviewSession};
//!
//! # async fn example(grader: &mut impl cram::Grader) -> cram::Result<()> {
//! let mut deck = Deck::open("capitals.csv")?;
//! let today = Local::now().date_naive();
//!
//! let report = ReviewSession::new(grader, today)
//!     .run(&mut deck, |_err| false)
//!     .await?;
//! println!("{} cards reviewed", report.reviewed);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod card;
mod deck;
mod error;
pub mod scheduler;
mod session;
pub mod store;

pub use card::Card;
pub use deck::Deck;
pub use error::{Error, Result};
pub use session::{Grader, ReviewSession, SessionReport, Verdict};
