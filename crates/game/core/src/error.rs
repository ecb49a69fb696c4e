//! Errors raised while assembling dudes and equipment from content.
//!
//! Runtime simulation never fails: misses, dodges and empty loot rolls are
//! ordinary outcomes. Only setup-time lookups can go wrong, and those must
//! abort construction instead of producing a half-built dude.

/// Failure to resolve a named piece of content.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No equipment template with this name exists in the catalog.
    #[error("unknown equipment `{0}`")]
    UnknownEquipment(String),

    /// A template or request referenced a perk that does not exist.
    #[error("unknown perk `{0}`")]
    UnknownPerk(String),

    /// A profession name could not be parsed.
    #[error("unknown profession `{0}`")]
    UnknownProfession(String),
}
