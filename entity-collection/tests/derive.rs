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
#![cfg(feature = "derive")]

use std::convert::TryFrom;

use entity_collection::{entity_type, Entity, EntityCollection, EntityId};

entity_type! {
    static ANIMAL = "Animal";
    static DOG = "Dog": [ANIMAL];
}

#[derive(Entity, Debug, Clone)]
#[entity(entity_type = "DOG")]
struct Dog {
    #[entity(id)]
    name: String,
    good: bool,
}

#[derive(Entity, Debug, Clone)]
#[entity(entity_type = "ANIMAL")]
struct Animal(#[entity(id)] u32);

#[derive(Entity, Debug, Clone)]
struct Rock {
    weight: f32,
    #[entity(id)]
    serial: i64,
}

#[derive(Entity, Debug, Clone)]
struct Labelled<T: Clone> {
    #[entity(id)]
    label: &'static str,
    value: T,
}

#[derive(Entity, Debug, Clone)]
struct Ticket {
    #[entity(id)]
    number: EntityId,
}

#[test]
fn derived_ids() {
    let dog = Dog {
        name: "rex".to_string(),
        good: true,
    };

    assert_eq!(dog.id(), EntityId::from("rex"));
    assert_eq!(Animal(4).id(), EntityId::Int(4));
    assert_eq!(Rock { weight: 1.5, serial: -2 }.id(), EntityId::Int(-2));
    assert_eq!(
        Labelled {
            label: "k",
            value: ()
        }
        .id(),
        EntityId::from("k")
    );

    let number = EntityId::try_from(9_000usize).unwrap();
    assert_eq!(Ticket { number }.id(), EntityId::Int(9_000));
}

#[test]
fn derived_types() {
    let dog = Dog {
        name: "rex".to_string(),
        good: true,
    };

    assert_eq!(dog.entity_type(), &DOG);
    assert!(dog.entity_type().is_subtype_of(&ANIMAL));
    assert_eq!(Animal(1).entity_type(), &ANIMAL);

    let rock = Rock {
        weight: 1.0,
        serial: 1,
    };
    assert_eq!(rock.entity_type().name(), "Rock");
    assert!(rock.entity_type().parents().is_empty());

    // The default type is the same static every time
    assert_eq!(rock.entity_type(), rock.clone().entity_type());
}

#[test]
fn derived_entities_in_collection() {
    let mut kennel = EntityCollection::with_allowed_types(vec![&ANIMAL]);

    kennel
        .add(Box::new(Dog {
            name: "rex".to_string(),
            good: true,
        }) as Box<dyn Entity>)
        .unwrap();
    kennel.add(Box::new(Animal(7))).unwrap();

    let rock = Rock {
        weight: 3.0,
        serial: 7,
    };
    assert!(kennel.add(Box::new(rock.clone())).is_err());
    // Same id as the animal, but rocks aren't allowed
    assert!(!kennel.contains(&rock));
    assert!(kennel.contains(&Animal(7)));

    assert_eq!(kennel.entities_id(), vec![EntityId::from("rex"), EntityId::Int(7)]);
}
