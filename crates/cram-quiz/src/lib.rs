//! Chat-model grading for the `cram` spaced-repetition trainer.
//!
//! This crate is the external collaborator the core delegates to: given a
//! card's content it has a chat model write a question, collects the user's
//! answer at the terminal, and has the model grade that answer. The core
//! only ever sees the resulting [`cram::Verdict`].
//!
//! Supported providers are OpenAI (chat completions) and Anthropic
//! (messages); credentials live in a user-level TOML file managed by
//! [`Config`].
//!
//! # Quick Start
//!
//! ```no_run
//! use cram_quiz::{Config, Quiz};
//!
//! # fn example() -> cram_quiz::Result<()> {
//! let config = Config::load(&Config::default_path()?)?;
//! let quiz = Quiz::new(&config, "capitals");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod client;
mod config;
mod error;
mod quiz;

pub use client::{ClientBuilder, ModelClient};
pub use config::{Config, Provider};
pub use error::{Error, Result};
pub use quiz::Quiz;
