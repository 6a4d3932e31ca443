//! Tab-separated player table parsing

use tracing::debug;

use super::PlayerRecord;

/// Parse a tab-separated player table
///
/// The first line holds the column labels. Each later line becomes one
/// record; a row shorter than the header simply lacks the trailing
/// columns, and extra cells beyond the header are dropped. Blank lines are
/// skipped. Never fails: an empty document yields no players.
pub fn parse_roster(text: &str) -> Vec<PlayerRecord> {
    let mut lines = text
        .trim()
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty());

    let headers: Vec<&str> = match lines.next() {
        Some(header) => header.split('\t').map(str::trim).collect(),
        None => return Vec::new(),
    };

    let players: Vec<PlayerRecord> = lines
        .map(|line| {
            let mut record = PlayerRecord::new();
            for (label, value) in headers.iter().zip(line.split('\t')) {
                record.insert(*label, value);
            }
            record
        })
        .collect();

    debug!(columns = headers.len(), players = players.len(), "parsed roster");
    players
}
