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

//! An insertion-ordered set of entities, keyed by id.

use crate::cursor::Cursor;
use crate::entity::{Entity, EntityId};
use crate::error::{CollectionError, SeedError};
use crate::policy::TypePolicy;
use crate::spec::CollectionSpec;

use std::any::type_name;
use std::collections::hash_map::{Entry, HashMap};
use std::slice;
use std::vec;

use log::{debug, trace};

/// Stores entities by their id, remembering the order ids were first added in.
///
/// Internally, this uses a hashmap from ids to entities, and a vector of ids for the order.
///
/// Adding an entity whose id is already present replaces the stored entity but keeps its place.
/// An optional [`TypePolicy`] restricts which entity types may be added.
#[derive(Debug, Clone)]
pub struct EntityCollection<E> {
    name: String,
    policy: TypePolicy,
    entities: HashMap<EntityId, E>,
    order: Vec<EntityId>,
}

impl<E: Entity> EntityCollection<E> {
    /// An empty collection accepting any entity type.
    pub fn new() -> Self {
        Self::from_spec(CollectionSpec::default())
    }

    /// An empty collection restricted by the given policy.
    pub fn with_policy(policy: TypePolicy) -> Self {
        Self::create(None, policy, 0)
    }

    /// An empty collection accepting only the given types and their subtypes.
    pub fn with_allowed_types<I>(types: I) -> Self
    where
        I: IntoIterator<Item = &'static crate::EntityType>,
    {
        Self::with_policy(TypePolicy::allowed_types(types))
    }

    /// An empty collection configured by `spec`.
    pub fn from_spec(spec: CollectionSpec) -> Self {
        let (name, policy, capacity) = spec.into_parts();
        Self::create(name, policy, capacity)
    }

    /// Make a new collection from `spec`, then add each of `initial` in order.
    ///
    /// Stops at the first entity that can't be added. The error keeps the entities added before it.
    pub fn from_spec_with<I>(spec: CollectionSpec, initial: I) -> Result<Self, SeedError<E>>
    where
        I: IntoIterator<Item = E>,
    {
        Self::from_spec(spec).seed(initial)
    }

    /// Make a new collection with the given policy, then add each of `initial` in order.
    ///
    /// Stops at the first entity that can't be added. The error keeps the entities added before it.
    pub fn from_entities<I>(initial: I, policy: TypePolicy) -> Result<Self, SeedError<E>>
    where
        I: IntoIterator<Item = E>,
    {
        Self::with_policy(policy).seed(initial)
    }

    fn create(name: Option<String>, policy: TypePolicy, capacity: usize) -> Self {
        let name = name.unwrap_or_else(|| format!("EntityCollection<{}>", type_name::<E>()));
        debug!("Created collection '{}' ({})", name, policy);

        EntityCollection {
            name,
            policy,
            entities: HashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    fn seed<I: IntoIterator<Item = E>>(mut self, initial: I) -> Result<Self, SeedError<E>> {
        match self.add_multiple(initial) {
            Ok(()) => {
                debug!("Seeded '{}' with {} entities", self.name, self.count());
                Ok(self)
            }
            Err(source) => Err(SeedError {
                collection: self,
                source,
            }),
        }
    }

    /// Add an entity, replacing any entity with the same id.
    ///
    /// # Returns
    /// `TypeNotAllowed` if the collection's policy rejects the entity's type.
    pub fn add(&mut self, entity: E) -> Result<(), CollectionError> {
        self.insert(entity).map(|_| ())
    }

    /// Add an entity, returning the one it replaced, if any.
    /// A replaced entity's position in the order is kept.
    pub fn insert(&mut self, entity: E) -> Result<Option<E>, CollectionError> {
        let entity_type = entity.entity_type();
        if !self.policy.allows(entity_type) {
            debug!(
                "Refused entity {} of type '{}' in '{}'",
                entity.id(),
                entity_type,
                self.name
            );
            return Err(CollectionError::TypeNotAllowed {
                entity_type: entity_type.name(),
                collection: self.name.clone(),
            });
        }

        match self.entities.entry(entity.id()) {
            Entry::Occupied(mut slot) => {
                trace!("Replacing entity {} in '{}'", slot.key(), self.name);
                Ok(Some(slot.insert(entity)))
            }
            Entry::Vacant(slot) => {
                trace!("Adding entity {} to '{}'", slot.key(), self.name);
                self.order.push(slot.key().clone());
                slot.insert(entity);
                Ok(None)
            }
        }
    }

    /// Add each entity in turn.
    ///
    /// Stops at the first failure. Entities added before it stay in the collection.
    pub fn add_multiple<I: IntoIterator<Item = E>>(
        &mut self,
        entities: I,
    ) -> Result<(), CollectionError> {
        for entity in entities {
            self.add(entity)?;
        }

        Ok(())
    }

    /// Remove the entity with the same id as the given one, returning it.
    ///
    /// Does nothing if the entity's type isn't allowed here, or if no entity has that id.
    /// Takes O(n) time.
    pub fn remove<T: Entity + ?Sized>(&mut self, entity: &T) -> Option<E> {
        if !self.policy.allows(entity.entity_type()) {
            return None;
        }

        self.remove_by_id(&entity.id())
    }

    /// Remove the entity with the given id, regardless of policy.
    ///
    /// Takes O(n) time.
    pub fn remove_by_id(&mut self, id: &EntityId) -> Option<E> {
        let removed = self.entities.remove(id)?;
        self.order.retain(|k| k != id);
        trace!("Removed entity {} from '{}'", id, self.name);

        Some(removed)
    }

    /// Whether an entity with the same id is in the collection.
    ///
    /// Always false if the entity's type isn't allowed here, even if its id is present.
    pub fn contains<T: Entity + ?Sized>(&self, entity: &T) -> bool {
        self.policy.allows(entity.entity_type()) && self.entities.contains_key(&entity.id())
    }
}

impl<E> EntityCollection<E> {
    /// Whether any entity has the given id, regardless of policy.
    pub fn contains_id(&self, id: &EntityId) -> bool {
        self.entities.contains_key(id)
    }

    pub fn get(&self, id: &EntityId) -> Option<&E> {
        self.entities.get(id)
    }

    pub fn get_key_value(&self, id: &EntityId) -> Option<(&EntityId, &E)> {
        self.entities.get_key_value(id)
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// The number of entities.
    pub fn count(&self) -> usize {
        self.entities.len()
    }

    pub fn len(&self) -> usize {
        self.count()
    }

    /// Remove every entity. The policy is kept.
    pub fn clear(&mut self) {
        debug!("Clearing {} entities from '{}'", self.count(), self.name);
        self.entities.clear();
        self.order.clear();
    }

    /// All ids, in the order they were first added.
    pub fn entities_id(&self) -> Vec<EntityId> {
        self.order.clone()
    }

    pub fn ids(&self) -> slice::Iter<'_, EntityId> {
        self.order.iter()
    }

    pub fn entities(&self) -> impl Iterator<Item = &E> + '_ {
        self.iter().map(|(_, entity)| entity)
    }

    /// Iterate over `(id, entity)` pairs in the order ids were first added.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            ids: self.order.iter(),
            entities: &self.entities,
        }
    }

    /// A cursor over a snapshot of the current order, which can be stepped while the collection changes.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.entities_id())
    }

    pub fn policy(&self) -> &TypePolicy {
        &self.policy
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<E: Entity> Default for EntityCollection<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing iterator over an [`EntityCollection`]. See [`EntityCollection::iter`].
pub struct Iter<'a, E> {
    ids: slice::Iter<'a, EntityId>,
    entities: &'a HashMap<EntityId, E>,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = (&'a EntityId, &'a E);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.ids.next()?;
        self.entities.get(id).map(|entity| (id, entity))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<'a, E> IntoIterator for &'a EntityCollection<E> {
    type Item = (&'a EntityId, &'a E);
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over an [`EntityCollection`], in insertion order.
pub struct IntoIter<E> {
    ids: vec::IntoIter<EntityId>,
    entities: HashMap<EntityId, E>,
}

impl<E> Iterator for IntoIter<E> {
    type Item = (EntityId, E);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.ids.next()?;
        self.entities.remove(&id).map(|entity| (id, entity))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<E> ExactSizeIterator for IntoIter<E> {}

impl<E> IntoIterator for EntityCollection<E> {
    type Item = (EntityId, E);
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            ids: self.order.into_iter(),
            entities: self.entities,
        }
    }
}
