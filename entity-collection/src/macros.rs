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

/// Declare one or more static [`crate::EntityType`]s, optionally with parent types.
///
/// ```
/// use entity_collection::entity_type;
///
/// entity_type! {
///     pub static VEHICLE = "Vehicle";
///     pub static CAR = "Car": [VEHICLE];
/// }
///
/// assert!(CAR.is_subtype_of(&VEHICLE));
/// ```
#[macro_export]
macro_rules! entity_type {
    ( $( $(#[$attr:meta])* $vis:vis static $ident:ident = $name:literal $( : [ $( $parent:path ),* $(,)? ] )? ; )* ) => {
        $(
            $(#[$attr])*
            $vis static $ident: $crate::EntityType = {
                static PARENTS: &[&$crate::EntityType] = &[ $( $( &$parent ),* )? ];
                $crate::EntityType::new($name, PARENTS)
            };
        )*
    };
}
