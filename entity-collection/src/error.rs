//! Error types

use crate::collection::EntityCollection;

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// An error from adding to a collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("The entity type '{entity_type}' can not be added to the collection '{collection}'")]
    TypeNotAllowed {
        entity_type: &'static str,
        collection: String,
    },
}

/// Returned when seeding a new collection fails part of the way through.
///
/// Entities before the one that failed were added and are kept in `collection`.
pub struct SeedError<E> {
    pub collection: EntityCollection<E>,
    pub source: CollectionError,
}

impl<E> SeedError<E> {
    pub fn into_parts(self) -> (EntityCollection<E>, CollectionError) {
        (self.collection, self.source)
    }
}

impl<E> fmt::Debug for SeedError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedError")
            .field("collection", &self.collection.name())
            .field("added", &self.collection.count())
            .field("source", &self.source)
            .finish()
    }
}

impl<E> fmt::Display for SeedError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error seeding collection '{}' after {} entities",
            self.collection.name(),
            self.collection.count()
        )
    }
}

impl<E> StdError for SeedError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}

impl<E> From<SeedError<E>> for CollectionError {
    fn from(err: SeedError<E>) -> Self {
        err.source
    }
}

/// Formats an error followed by each of its causes, one per line.
pub fn full_error_display(err: anyhow::Error) -> String {
    let mut out = format!("Error: {}", err);
    for cause in err.chain().skip(1) {
        out.push_str(&format!("\n    caused by: {}", cause));
    }

    out
}
