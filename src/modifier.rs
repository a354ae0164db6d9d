/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use smallvec::SmallVec;
use strum_macros::EnumCount;

/// A single SGR text attribute and its fixed numeric parameter. Codes 5, 6 and
/// 8 (blink, rapid blink, concealed) are deliberately not exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount)]
pub enum Modifier {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    Invert,
    Strikethrough,
}

mod modifier_impl {
    use super::*;

    impl Modifier {
        #[rustfmt::skip]
        pub const fn sgr_code(&self) -> u8 {
            match self {
                Modifier::Reset         => 0,
                Modifier::Bold          => 1,
                Modifier::Dim           => 2,
                Modifier::Italic        => 3,
                Modifier::Underline     => 4,
                Modifier::Invert        => 7,
                Modifier::Strikethrough => 9,
            }
        }
    }
}

/// One slot per [Modifier] variant, so a set never spills to the heap.
pub const MAX_MODIFIER_SET_SIZE: usize = <Modifier as strum::EnumCount>::COUNT;
pub type InlineVecModifiers = SmallVec<[Modifier; MAX_MODIFIER_SET_SIZE]>;

/// The set of [Modifier]s attached to a color value. Kept sorted by SGR code
/// at all times, with set semantics (inserting a modifier twice is a no-op),
/// so that rendering is deterministic: codes are emitted in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierSet {
    inner: InlineVecModifiers,
}

mod modifier_set_ops_impl {
    use super::*;

    impl ModifierSet {
        pub const fn new() -> Self {
            Self {
                inner: SmallVec::new_const(),
            }
        }

        pub fn insert(&mut self, arg_modifier: Modifier) {
            if let Err(index) = self.position_of(arg_modifier) {
                self.inner.insert(index, arg_modifier);
            }
        }

        pub fn remove(&mut self, arg_modifier: Modifier) {
            if let Ok(index) = self.position_of(arg_modifier) {
                self.inner.remove(index);
            }
        }

        pub fn contains(&self, arg_modifier: Modifier) -> bool {
            self.position_of(arg_modifier).is_ok()
        }

        pub fn is_empty(&self) -> bool { self.inner.is_empty() }

        pub fn len(&self) -> usize { self.inner.len() }

        pub fn iter(&self) -> core::slice::Iter<'_, Modifier> { self.inner.iter() }

        /// `Ok` holds the position of an existing entry, `Err` the insertion
        /// point that keeps `inner` sorted by SGR code.
        fn position_of(
            &self,
            arg_modifier: Modifier,
        ) -> core::result::Result<usize, usize> {
            self.inner
                .binary_search_by_key(&arg_modifier.sgr_code(), |it| it.sgr_code())
        }
    }

    impl Default for ModifierSet {
        fn default() -> Self { Self::new() }
    }
}

mod modifier_set_display_impl {
    use std::fmt::{Display, Formatter, Result};

    use super::*;

    impl Display for ModifierSet {
        /// Writes the numeric codes in ascending order, joined by `;`, with no
        /// leading or trailing separator. An empty set writes nothing.
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            let mut separate = false;
            for modifier in self.iter() {
                if separate {
                    write!(f, ";")?;
                }
                write!(f, "{}", modifier.sgr_code())?;
                separate = true;
            }
            Ok(())
        }
    }
}

/// Generates the chainable style builder methods that every color value
/// exposes. Each one inserts the matching [Modifier] into the value's set.
macro_rules! impl_modifier_builders {
    ($type: ty) => {
        impl $type {
            #[must_use]
            pub fn bold(mut self) -> Self {
                self.modifiers_mut().insert($crate::Modifier::Bold);
                self
            }

            #[must_use]
            pub fn dim(mut self) -> Self {
                self.modifiers_mut().insert($crate::Modifier::Dim);
                self
            }

            #[must_use]
            pub fn italic(mut self) -> Self {
                self.modifiers_mut().insert($crate::Modifier::Italic);
                self
            }

            #[must_use]
            pub fn underline(mut self) -> Self {
                self.modifiers_mut().insert($crate::Modifier::Underline);
                self
            }

            #[must_use]
            pub fn invert(mut self) -> Self {
                self.modifiers_mut().insert($crate::Modifier::Invert);
                self
            }

            #[must_use]
            pub fn strikethrough(mut self) -> Self {
                self.modifiers_mut().insert($crate::Modifier::Strikethrough);
                self
            }
        }
    };
}
pub(crate) use impl_modifier_builders;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_set_renders_nothing() {
        let set = ModifierSet::new();
        assert_eq!(set.to_string(), "");
        assert!(set.is_empty());
    }

    #[test]
    fn codes_render_in_ascending_order() {
        let mut set = ModifierSet::new();
        set.insert(Modifier::Strikethrough);
        set.insert(Modifier::Bold);
        set.insert(Modifier::Underline);
        assert_eq!(set.to_string(), "1;4;9");
    }

    #[test]
    fn insert_has_set_semantics() {
        let mut set = ModifierSet::new();
        set.insert(Modifier::Italic);
        set.insert(Modifier::Italic);
        assert_eq!(set.len(), 1);
        assert_eq!(set.to_string(), "3");
    }

    #[test]
    fn remove_and_contains() {
        let mut set = ModifierSet::new();
        set.insert(Modifier::Bold);
        set.insert(Modifier::Dim);
        assert!(set.contains(Modifier::Bold));

        set.remove(Modifier::Bold);
        assert!(!set.contains(Modifier::Bold));
        assert_eq!(set.to_string(), "2");

        // Removing an absent modifier is a no-op.
        set.remove(Modifier::Reset);
        assert_eq!(set.to_string(), "2");
    }

    #[test]
    fn all_modifiers_render_their_sgr_codes() {
        let mut set = ModifierSet::new();
        set.insert(Modifier::Reset);
        set.insert(Modifier::Bold);
        set.insert(Modifier::Dim);
        set.insert(Modifier::Italic);
        set.insert(Modifier::Underline);
        set.insert(Modifier::Invert);
        set.insert(Modifier::Strikethrough);
        assert_eq!(set.to_string(), "0;1;2;3;4;7;9");
        assert_eq!(set.len(), MAX_MODIFIER_SET_SIZE);
    }

    #[test]
    fn clone_is_independent() {
        let mut original = ModifierSet::new();
        original.insert(Modifier::Bold);

        let mut copy = original.clone();
        copy.insert(Modifier::Underline);
        copy.remove(Modifier::Bold);

        assert_eq!(original.to_string(), "1");
        assert_eq!(copy.to_string(), "4");
    }
}
