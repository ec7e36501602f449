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

use crate::policy::TypePolicy;

/// Configuration for a new [`crate::EntityCollection`].
///
/// ```
/// use entity_collection::{CollectionSpecBuilder, TypePolicy};
///
/// let spec = CollectionSpecBuilder::default()
///     .name("garage")
///     .capacity(16usize)
///     .policy(TypePolicy::Unrestricted)
///     .build()
///     .unwrap();
///
/// assert_eq!(spec.name(), Some("garage"));
/// ```
#[derive(Builder, Debug, Clone, Default)]
#[builder(public)]
pub struct CollectionSpec {
    /// Used in error messages and logs. Defaults to the collection's type name.
    #[builder(setter(into, strip_option), default)]
    name: Option<String>,

    #[builder(default)]
    policy: TypePolicy,

    /// Number of entities to allocate space for up front.
    #[builder(default = "0")]
    capacity: usize,
}

impl CollectionSpec {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn policy(&self) -> &TypePolicy {
        &self.policy
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn into_parts(self) -> (Option<String>, TypePolicy, usize) {
        (self.name, self.policy, self.capacity)
    }
}
