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

use entity_collection::entity_type;

mod shapes {
    use entity_collection::entity_type;

    entity_type! {
        /// Anything drawable
        pub static SHAPE = "Shape";
        pub(crate) static POLYGON = "Polygon": [SHAPE];
    }
}

entity_type! {
    static SQUARE = "Square": [shapes::POLYGON,];
    static NAMED = "Named";
    static LABELLED_SQUARE = "LabelledSquare": [SQUARE, NAMED];
}

#[test]
fn entity_type_macro() {
    assert_eq!(shapes::SHAPE.name(), "Shape");
    assert!(shapes::SHAPE.parents().is_empty());

    assert_eq!(SQUARE.parents().len(), 1);
    assert_eq!(SQUARE.parents()[0], &shapes::POLYGON);

    assert!(SQUARE.is_subtype_of(&shapes::SHAPE));
    assert!(LABELLED_SQUARE.is_subtype_of(&shapes::SHAPE));
    assert!(LABELLED_SQUARE.is_subtype_of(&NAMED));
    assert!(!NAMED.is_subtype_of(&shapes::SHAPE));

    assert_eq!(LABELLED_SQUARE.to_string(), "LabelledSquare");
}
