//! Insertion-ordered collections of identified entities, optionally restricted to certain entity types.

// Lets the derive macro's `::entity_collection` paths resolve inside this crate.
extern crate self as entity_collection;

#[macro_use]
extern crate derive_builder;

#[macro_use]
mod macros;

pub mod collection;
pub mod cursor;
pub mod entity;
pub mod error;
pub mod policy;
pub mod spec;

pub use collection::EntityCollection;
pub use cursor::Cursor;
pub use entity::{Entity, EntityId, EntityType};
pub use error::{full_error_display, CollectionError, SeedError};
pub use policy::TypePolicy;
pub use spec::{CollectionSpec, CollectionSpecBuilder};

#[cfg(feature = "derive")]
pub use entity_collection_derive::Entity;
