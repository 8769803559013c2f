//! Read-only game catalog.
//!
//! An ordered list of games keyed by id, injected into the host so the
//! results screen can hint at what comes next. Launching that next game
//! is the platform's job, not this crate's.

use std::collections::HashMap;

use serde::Deserialize;

/// One game the platform knows about.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
}

#[derive(Debug, thiserror::Error)]
#[error("duplicate game id `{id}` in catalog")]
pub struct DuplicateGameId {
    pub id: String,
}

/// Keyed, ordered index over catalog entries.
pub struct GameCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl GameCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, DuplicateGameId> {
        let mut index = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            if index.insert(entry.id.clone(), pos).is_some() {
                return Err(DuplicateGameId {
                    id: entry.id.clone(),
                });
            }
        }
        Ok(Self { entries, index })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, game_id: &str) -> Option<&CatalogEntry> {
        self.index.get(game_id).map(|&pos| &self.entries[pos])
    }

    /// Position of a game in catalog order.
    pub fn position(&self, game_id: &str) -> Option<usize> {
        self.index.get(game_id).copied()
    }

    /// The entry after `game_id`, if the id is known and not last.
    pub fn next_after(&self, game_id: &str) -> Option<&CatalogEntry> {
        let pos = self.position(game_id)?;
        self.entries.get(pos + 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }
}
