//! Data-driven content definitions and loaders.
//!
//! This crate houses the tower's static content and provides loaders for
//! RON/TOML data files:
//! - Equipment catalogs (data-driven via RON, with a built-in default)
//! - Dude name pools (data-driven via RON, with a built-in default)
//! - Game configuration (data-driven via TOML)
//!
//! Content is consumed by the runtime through the `tower-core` oracle traits.

pub mod catalog;
pub mod names;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::EquipmentCatalog;
pub use names::{BUILTIN_NAMES, NamePool};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, EquipmentFile, EquipmentLoader, NameLoader};
