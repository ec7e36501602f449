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
#![allow(dead_code, unused_macros)]

use entity_collection::{entity_type, Entity, EntityCollection, EntityId, EntityType};

macro_rules! ids(
    { $($id:expr),* } => {
        vec![$(::entity_collection::EntityId::from($id)),*]
    };
);

entity_type! {
    pub static VEHICLE = "Vehicle";
    pub static CAR = "Car": [VEHICLE];
    pub static SPORTS_CAR = "SportsCar": [CAR];
    pub static BUILDING = "Building";
}

/// An entity of any of the types above.
#[derive(Debug, Clone, PartialEq)]
pub struct Thing {
    pub id: EntityId,
    pub kind: &'static EntityType,
    pub label: &'static str,
}

impl Entity for Thing {
    fn id(&self) -> EntityId {
        self.id.clone()
    }

    fn entity_type(&self) -> &'static EntityType {
        self.kind
    }
}

pub fn vehicle<I: Into<EntityId>>(id: I, label: &'static str) -> Thing {
    Thing {
        id: id.into(),
        kind: &VEHICLE,
        label,
    }
}

pub fn car<I: Into<EntityId>>(id: I, label: &'static str) -> Thing {
    Thing {
        id: id.into(),
        kind: &CAR,
        label,
    }
}

pub fn sports_car<I: Into<EntityId>>(id: I, label: &'static str) -> Thing {
    Thing {
        id: id.into(),
        kind: &SPORTS_CAR,
        label,
    }
}

pub fn building<I: Into<EntityId>>(id: I, label: &'static str) -> Thing {
    Thing {
        id: id.into(),
        kind: &BUILDING,
        label,
    }
}

/// The labels of everything in the collection, in iteration order.
pub fn labels(coll: &EntityCollection<Thing>) -> Vec<&'static str> {
    coll.iter().map(|(_, thing)| thing.label).collect()
}
