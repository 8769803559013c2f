mod loader;

pub use loader::{LoadError, load_catalog, load_game};
