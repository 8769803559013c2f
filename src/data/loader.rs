//! JSON loading for game and catalog files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;

use crate::catalog::{CatalogEntry, DuplicateGameId, GameCatalog};
use crate::models::GameSpec;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    DuplicateGame(#[from] DuplicateGameId),
}

pub fn load_game<P: AsRef<Path>>(path: P) -> Result<GameSpec, LoadError> {
    let spec: GameSpec = load_json(path.as_ref())?;
    info!(
        "loaded game {} ({} items) from {}",
        spec.id,
        spec.items.len(),
        path.as_ref().display()
    );
    Ok(spec)
}

pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<GameCatalog, LoadError> {
    let entries: Vec<CatalogEntry> = load_json(path.as_ref())?;
    info!(
        "loaded catalog with {} games from {}",
        entries.len(),
        path.as_ref().display()
    );
    Ok(GameCatalog::new(entries)?)
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
