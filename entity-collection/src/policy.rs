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

//! Which entity types a collection accepts.

use crate::entity::EntityType;

use std::fmt;
use std::sync::Arc;

/// Decides which entity types a collection accepts.
///
/// The check is made when an entity is added, removed or looked up. It is never re-run on entities
/// already in the collection.
#[derive(Clone)]
pub enum TypePolicy {
    /// Accept everything.
    Unrestricted,

    /// Accept these types and their subtypes. An empty list accepts everything.
    AllowedTypes(Vec<&'static EntityType>),

    /// Accept whatever the predicate returns true for.
    Predicate(Arc<dyn Fn(&EntityType) -> bool + Send + Sync>),
}

impl TypePolicy {
    pub fn allowed_types<I: IntoIterator<Item = &'static EntityType>>(types: I) -> Self {
        TypePolicy::AllowedTypes(types.into_iter().collect())
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&EntityType) -> bool + Send + Sync + 'static,
    {
        TypePolicy::Predicate(Arc::new(predicate))
    }

    /// Whether entities of the given type pass this policy.
    pub fn allows(&self, entity_type: &EntityType) -> bool {
        match self {
            TypePolicy::Unrestricted => true,
            TypePolicy::AllowedTypes(types) if types.is_empty() => true,
            TypePolicy::AllowedTypes(types) => types.iter().any(|allowed| entity_type.is_a(allowed)),
            TypePolicy::Predicate(predicate) => predicate(entity_type),
        }
    }

    /// False if this policy accepts every type without looking.
    pub fn is_restricted(&self) -> bool {
        match self {
            TypePolicy::Unrestricted => false,
            TypePolicy::AllowedTypes(types) => !types.is_empty(),
            TypePolicy::Predicate(_) => true,
        }
    }
}

impl Default for TypePolicy {
    fn default() -> Self {
        TypePolicy::Unrestricted
    }
}

impl From<Vec<&'static EntityType>> for TypePolicy {
    fn from(types: Vec<&'static EntityType>) -> Self {
        TypePolicy::AllowedTypes(types)
    }
}

impl fmt::Debug for TypePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypePolicy::Unrestricted => f.write_str("Unrestricted"),
            TypePolicy::AllowedTypes(types) => f
                .debug_tuple("AllowedTypes")
                .field(&types.iter().map(|t| t.name()).collect::<Vec<_>>())
                .finish(),
            TypePolicy::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl fmt::Display for TypePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypePolicy::AllowedTypes(types) if !types.is_empty() => {
                let names = types.iter().map(|t| t.name()).collect::<Vec<_>>();
                write!(f, "allowed types [{}]", names.join(", "))
            }
            TypePolicy::Predicate(_) => f.write_str("custom predicate"),
            _ => f.write_str("unrestricted"),
        }
    }
}
