//! The interactive quiz: a [`Grader`] backed by a chat model.
//!
//! One review is a strictly serial exchange: the model writes a question for
//! the card, the user answers at the terminal, and the model grades that
//! answer against the question it asked.

use std::io::{self, BufRead, Write};

use cram::{Card, Grader, Verdict};

use crate::client::ModelClient;
use crate::config::Config;
use crate::error::Result;

/// Quizzes the user on cards using the configured chat model.
pub struct Quiz {
    client: ModelClient,
    deck_name: String,
}

impl Quiz {
    /// Create a quiz against the provider's production endpoint.
    pub fn new(config: &Config, deck_name: impl Into<String>) -> Self {
        Self::with_client(ModelClient::new(config), deck_name)
    }

    /// Create a quiz with a custom client.
    pub fn with_client(client: ModelClient, deck_name: impl Into<String>) -> Self {
        Self {
            client,
            deck_name: deck_name.into(),
        }
    }

    async fn ask(&self, card: &Card) -> Result<Verdict> {
        let question = self.client.question(&self.deck_name, &card.content).await?;
        println!("\n{question}");

        let response = prompt_line("Response")?;
        let verdict = self
            .client
            .evaluate(&question, &card.content, &response)
            .await?;

        if verdict.remembered {
            println!("Correct!");
        } else if let Some(correction) = &verdict.correction {
            println!("Correction: {correction}");
        } else {
            println!("Not quite.");
        }
        Ok(verdict)
    }
}

impl Grader for Quiz {
    async fn review(&mut self, card: &Card) -> cram::Result<Verdict> {
        self.ask(card).await.map_err(cram::Error::from)
    }
}

fn prompt_line(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
