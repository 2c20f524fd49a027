//! CSV persistence for a deck.
//!
//! The on-disk format is a UTF-8 comma-separated file with a header row and
//! a fixed column order:
//!
//! ```text
//! id,content,bin,nextShown
//! <hex>,<text>,<int>,<YYYY-MM-DD>
//! ```
//!
//! Column order and names are part of the contract; files missing any
//! required column are rejected. Saves go through a sibling temporary file
//! followed by a rename, so a partial write never corrupts a previously
//! valid deck.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use crate::card::Card;
use crate::error::{Error, Result};

/// On-disk column order.
pub const COLUMNS: [&str; 4] = ["id", "content", "bin", "nextShown"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Load all cards from `path`, preserving row order.
///
/// A zero-byte file loads as an empty deck. Anything else must carry the
/// expected header row and well-formed rows.
pub fn load(path: &Path) -> Result<Vec<Card>> {
    let bytes = fs::read(path)?;
    let raw = String::from_utf8(bytes).map_err(|_| Error::NotUtf8(path.to_path_buf()))?;
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(raw.as_bytes());

    let headers = reader.headers()?;
    if headers.iter().ne(COLUMNS) {
        return Err(Error::Header {
            found: headers.iter().collect::<Vec<_>>().join(","),
        });
    }

    let mut cards = Vec::new();
    for record in reader.records() {
        let record = record?;
        let bin: u32 = record[2].parse().map_err(|_| Error::InvalidBin {
            value: record[2].to_string(),
        })?;
        let next_due =
            NaiveDate::parse_from_str(&record[3], DATE_FORMAT).map_err(|_| Error::InvalidDate {
                value: record[3].to_string(),
            })?;
        cards.push(Card {
            id: record[0].to_string(),
            content: record[1].to_string(),
            bin,
            next_due,
        });
    }

    debug!(path = %path.display(), cards = cards.len(), "loaded deck file");
    Ok(cards)
}

/// Rewrite `path` with the full card list.
///
/// All rows are serialized in one pass; the header is written even for an
/// empty deck.
pub fn save(cards: &[Card], path: &Path) -> Result<()> {
    let mut buf: Vec<u8> = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        writer.write_record(COLUMNS)?;
        for card in cards {
            let bin = card.bin.to_string();
            let next_due = card.next_due.format(DATE_FORMAT).to_string();
            writer.write_record([
                card.id.as_str(),
                card.content.as_str(),
                bin.as_str(),
                next_due.as_str(),
            ])?;
        }
        writer.flush()?;
    }

    write_atomic(path, &buf)?;
    debug!(path = %path.display(), cards = cards.len(), "saved deck file");
    Ok(())
}

/// Write to a sibling temp file, then rename over the target.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let tmp_path = path.with_extension("csv.tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
