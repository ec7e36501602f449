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

use crate::collection::EntityCollection;
use crate::entity::EntityId;

/// Steps through a snapshot of a collection's ids, taken when the cursor was made.
///
/// Unlike [`crate::collection::Iter`], a cursor doesn't borrow the collection between steps,
/// so the collection can be changed part way through.
/// Ids added after the snapshot aren't visited. Stepping stops for good at the first snapshot id
/// that is no longer in the collection.
#[derive(Debug, Clone)]
pub struct Cursor {
    snapshot: Vec<EntityId>,
    position: usize,
    stopped: bool,
}

impl Cursor {
    pub(crate) fn new(snapshot: Vec<EntityId>) -> Self {
        Cursor {
            snapshot,
            position: 0,
            stopped: false,
        }
    }

    /// Step to the next entity in the snapshot.
    pub fn next<'c, E>(
        &mut self,
        collection: &'c EntityCollection<E>,
    ) -> Option<(&'c EntityId, &'c E)> {
        if self.stopped {
            return None;
        }

        let found = self
            .snapshot
            .get(self.position)
            .and_then(|id| collection.get_key_value(id));

        match found {
            Some(pair) => {
                self.position += 1;
                Some(pair)
            }
            None => {
                self.stopped = true;
                None
            }
        }
    }

    /// Retake the snapshot and start again from the beginning.
    pub fn rewind<E>(&mut self, collection: &EntityCollection<E>) {
        self.snapshot = collection.entities_id();
        self.position = 0;
        self.stopped = false;
    }

    /// How many entities have been stepped over.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The ids this cursor will visit, in order.
    pub fn snapshot(&self) -> &[EntityId] {
        &self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use crate::{entity_type, Entity, EntityCollection, EntityId, EntityType};

    entity_type! {
        static NOTE = "Note";
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Note(u32);

    impl Entity for Note {
        fn id(&self) -> EntityId {
            self.0.into()
        }
        fn entity_type(&self) -> &'static EntityType {
            &NOTE
        }
    }

    fn notes(n: u32) -> EntityCollection<Note> {
        let mut coll = EntityCollection::new();
        coll.add_multiple((1..=n).map(Note)).unwrap();
        coll
    }

    #[test]
    fn visits_in_order() {
        let coll = notes(3);
        let mut cursor = coll.cursor();

        let mut seen = vec![];
        while let Some((_, note)) = cursor.next(&coll) {
            seen.push(note.0);
        }

        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(cursor.position(), 3);
        assert!(cursor.next(&coll).is_none());
    }

    #[test]
    fn stops_at_removed_entity() {
        let mut coll = notes(4);
        let mut cursor = coll.cursor();

        assert_eq!(cursor.next(&coll).map(|(_, n)| n.0), Some(1));
        coll.remove(&Note(3));
        assert_eq!(cursor.next(&coll).map(|(_, n)| n.0), Some(2));

        // 3 is gone, so 4 is never reached
        assert!(cursor.next(&coll).is_none());
        assert!(cursor.next(&coll).is_none());
    }

    #[test]
    fn ignores_additions_until_rewound() {
        let mut coll = notes(2);
        let mut cursor = coll.cursor();

        coll.add(Note(9)).unwrap();
        assert_eq!(cursor.snapshot().len(), 2);
        assert!(cursor.next(&coll).is_some());
        assert!(cursor.next(&coll).is_some());
        assert!(cursor.next(&coll).is_none());

        cursor.rewind(&coll);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.snapshot().len(), 3);
        assert_eq!(cursor.snapshot().last(), Some(&EntityId::Int(9)));
    }
}
