//! Errors surfaced by the tower driver.

use thiserror::Error;
use tower_core::{CatalogError, DudeId};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("tower needs at least one story with {min} rooms, got {stories} stories of {rooms}")]
    EmptyTower {
        stories: usize,
        rooms: usize,
        min: usize,
    },

    #[error("no dudes to send into the tower")]
    NoDudes,

    #[error("{0} is not in the tower")]
    UnknownDude(DudeId),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
