use std::cmp::Ordering;

use super::{KeyValueStore, StoreError};
use crate::model::ScoreEntry;

pub const SCORES_KEY: &str = "game-leaderboard";
pub const LEADERBOARD_SIZE: usize = 10;

/// Append-only saved scores, listed together with the built-in rivals.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreStore<S> {
    backend: S,
}

impl<S: KeyValueStore> ScoreStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Everything the player has saved, in save order.
    pub fn saved(&self) -> Vec<ScoreEntry> {
        let Some(raw) = self.backend.read(SCORES_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("ignoring unreadable leaderboard data: {e}");
                Vec::new()
            }
        }
    }

    pub fn append(&self, entry: ScoreEntry) -> Result<(), StoreError> {
        let mut entries = self.saved();
        entries.push(entry);
        let raw = serde_json::to_string(&entries)?;
        self.backend.write(SCORES_KEY, &raw)
    }

    /// Saved entries merged with [`placeholders`], best first, at most [`LEADERBOARD_SIZE`].
    pub fn list(&self) -> Vec<ScoreEntry> {
        let mut entries = self.saved();
        entries.extend(placeholders());
        rank(entries)
    }
}

/// Rivals shown so a fresh leaderboard is never empty.
pub fn placeholders() -> Vec<ScoreEntry> {
    [
        ("1", "SuperMonkey99", 50, "2024-03-20", "Jungle King"),
        ("2", "BananoFan", 40, "2024-03-21", "Fruit Expert"),
        ("3", "TreeClimber", 30, "2024-03-19", "Tree Scout"),
    ]
    .into_iter()
    .map(|(id, name, score, date, level)| ScoreEntry {
        id: id.to_string(),
        name: name.to_string(),
        score,
        date: date.to_string(),
        level: level.to_string(),
    })
    .collect()
}

// Higher score first; ties go to the earlier date, then name, then id.
fn leaderboard_order(a: &ScoreEntry, b: &ScoreEntry) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.date.cmp(&b.date))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

fn rank(mut entries: Vec<ScoreEntry>) -> Vec<ScoreEntry> {
    entries.sort_by(leaderboard_order);
    entries.truncate(LEADERBOARD_SIZE);
    entries
}
