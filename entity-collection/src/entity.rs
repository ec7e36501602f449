/*
 * Copyright (C) Oscar Shrimpton 2020
 *
 * This program is free software: you can redistribute it and/or modify it
 * under the terms of the GNU General Public License as published by the Free
 * Software Foundation, either version 3 of the License, or (at your option)
 * any later version.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT
 * ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
 * FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License for
 * more details.
 *
 * You should have received a copy of the GNU General Public License along
 * with this program.  If not, see <http://www.gnu.org/licenses/>.
 */

//! Identified entities and the static type tags used to restrict collections.

use std::convert::TryFrom;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::TryFromIntError;
use std::ptr;
use std::rc::Rc;
use std::sync::Arc;

/// The key an entity is stored under. Either an integer or a string.
///
/// `Int(1)` and `Str("1")` are different keys. Numeric strings are never coerced to integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityId {
    Int(i64),
    Str(String),
}

impl EntityId {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            EntityId::Int(x) => Some(*x),
            EntityId::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            EntityId::Int(_) => None,
            EntityId::Str(x) => Some(x),
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(x) => write!(f, "{}", x),
            EntityId::Str(x) => f.write_str(x),
        }
    }
}

macro_rules! id_from_int {
    ( $( $int:ty ),* ) => {
        $(
            impl From<$int> for EntityId {
                fn from(x: $int) -> Self {
                    EntityId::Int(i64::from(x))
                }
            }
        )*
    };
}

id_from_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! id_try_from_int {
    ( $( $int:ty ),* ) => {
        $(
            impl TryFrom<$int> for EntityId {
                type Error = TryFromIntError;

                fn try_from(x: $int) -> Result<Self, Self::Error> {
                    i64::try_from(x).map(EntityId::Int)
                }
            }
        )*
    };
}

id_try_from_int!(u64, usize, i128, u128);

impl From<String> for EntityId {
    fn from(x: String) -> Self {
        EntityId::Str(x)
    }
}

impl From<&str> for EntityId {
    fn from(x: &str) -> Self {
        EntityId::Str(x.to_owned())
    }
}

impl From<&String> for EntityId {
    fn from(x: &String) -> Self {
        EntityId::Str(x.clone())
    }
}

/// A static descriptor for a kind of entity.
///
/// Types are compared by identity, so each one should be declared exactly once as a `static`,
/// usually with [`crate::entity_type!`]. Parents are the direct supertypes and must not form a cycle.
pub struct EntityType {
    name: &'static str,
    parents: &'static [&'static EntityType],
}

impl EntityType {
    pub const fn new(name: &'static str, parents: &'static [&'static EntityType]) -> Self {
        EntityType { name, parents }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The directly declared supertypes.
    pub fn parents(&self) -> &'static [&'static EntityType] {
        self.parents
    }

    /// True if `other` is somewhere above this type. A type is never a subtype of itself.
    pub fn is_subtype_of(&self, other: &EntityType) -> bool {
        self.parents
            .iter()
            .any(|parent| *parent == other || parent.is_subtype_of(other))
    }

    /// True if this is `other`, or a subtype of it.
    pub fn is_a(&self, other: &EntityType) -> bool {
        self == other || self.is_subtype_of(other)
    }
}

impl PartialEq for EntityType {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl Eq for EntityType {}

impl Hash for EntityType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(self, state)
    }
}

impl fmt::Debug for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityType")
            .field("name", &self.name)
            .field(
                "parents",
                &self.parents.iter().map(|p| p.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Something with a stable identifier, which can be stored in an [`crate::EntityCollection`].
///
/// Usually implemented with `#[derive(Entity)]`.
pub trait Entity {
    /// The identifier of this entity.
    /// This must not change while the entity is in a collection.
    fn id(&self) -> EntityId;

    /// The type tag checked against a collection's policy.
    fn entity_type(&self) -> &'static EntityType;
}

impl<E: Entity + ?Sized> Entity for &E {
    fn id(&self) -> EntityId {
        (**self).id()
    }
    fn entity_type(&self) -> &'static EntityType {
        (**self).entity_type()
    }
}

impl<E: Entity + ?Sized> Entity for Box<E> {
    fn id(&self) -> EntityId {
        (**self).id()
    }
    fn entity_type(&self) -> &'static EntityType {
        (**self).entity_type()
    }
}

impl<E: Entity + ?Sized> Entity for Rc<E> {
    fn id(&self) -> EntityId {
        (**self).id()
    }
    fn entity_type(&self) -> &'static EntityType {
        (**self).entity_type()
    }
}

impl<E: Entity + ?Sized> Entity for Arc<E> {
    fn id(&self) -> EntityId {
        (**self).id()
    }
    fn entity_type(&self) -> &'static EntityType {
        (**self).entity_type()
    }
}
