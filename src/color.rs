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
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#Colors>
//! - <https://stackoverflow.com/questions/4842424/list-of-ansi-color-escape-sequences>

use crate::{Ansi256Color, BasicColor, ModifierSet, RgbColor,
            modifier::impl_modifier_builders};

/// Closed sum type over the three color models. Holding a [Color] means "any
/// color value that can render and be cloned", without dynamic dispatch.
/// Cloning yields a fully independent value; mutating the clone's modifiers
/// never affects the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    Basic(BasicColor),
    Ansi256(Ansi256Color),
    Rgb(RgbColor),
}

mod color_impl {
    use super::*;

    impl Color {
        #[rustfmt::skip]
        pub fn modifiers(&self) -> &ModifierSet {
            match self {
                Color::Basic(inner)   => &inner.modifiers,
                Color::Ansi256(inner) => &inner.modifiers,
                Color::Rgb(inner)     => &inner.modifiers,
            }
        }

        #[rustfmt::skip]
        pub fn modifiers_mut(&mut self) -> &mut ModifierSet {
            match self {
                Color::Basic(inner)   => &mut inner.modifiers,
                Color::Ansi256(inner) => &mut inner.modifiers,
                Color::Rgb(inner)     => &mut inner.modifiers,
            }
        }
    }

    impl From<BasicColor> for Color {
        fn from(inner: BasicColor) -> Self { Color::Basic(inner) }
    }

    impl From<Ansi256Color> for Color {
        fn from(inner: Ansi256Color) -> Self { Color::Ansi256(inner) }
    }

    impl From<RgbColor> for Color {
        fn from(inner: RgbColor) -> Self { Color::Rgb(inner) }
    }
}

impl_modifier_builders!(Color);

mod display_impl {
    use std::fmt::{Display, Formatter, Result};

    use super::*;

    impl Display for Color {
        /// Dispatches to the variant's own render; each variant checks the
        /// global output switch itself.
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match self {
                Color::Basic(inner)   => inner.fmt(f),
                Color::Ansi256(inner) => inner.fmt(f),
                Color::Rgb(inner)     => inner.fmt(f),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;
    use crate::{Modifier, global_sgr_output};

    #[test]
    #[serial]
    fn dispatch_renders_each_variant() {
        global_sgr_output::enable();
        let colors: [Color; 3] = [
            BasicColor::new(31).into(),
            Ansi256Color::new(200).into_bg().into(),
            RgbColor::new(255, 0, 128).underline().into(),
        ];
        let rendered: Vec<String> = colors.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "\x1b[31m".to_string(),
                "\x1b[48;5;200m".to_string(),
                "\x1b[4;38;2;255;0;128m".to_string(),
            ]
        );
    }

    #[test]
    #[serial]
    fn builders_reach_through_the_enum() {
        global_sgr_output::enable();
        let color = Color::from(BasicColor::new(31)).bold();
        assert_eq!(color.to_string(), "\x1b[1;31m");
        assert!(color.modifiers().contains(Modifier::Bold));
    }

    #[test]
    fn clone_is_value_independent() {
        let original = Color::from(RgbColor::new(1, 2, 3)).bold();

        let mut copy = original.clone();
        copy.modifiers_mut().insert(Modifier::Underline);
        copy.modifiers_mut().remove(Modifier::Bold);

        assert!(original.modifiers().contains(Modifier::Bold));
        assert!(!original.modifiers().contains(Modifier::Underline));
        assert!(copy.modifiers().contains(Modifier::Underline));

        // And the other way around.
        let mut original = original;
        original.modifiers_mut().insert(Modifier::Italic);
        assert!(!copy.modifiers().contains(Modifier::Italic));
    }

    #[test]
    #[serial]
    fn disabling_the_switch_silences_every_variant() {
        let colors: [Color; 3] = [
            BasicColor::new(31).bold().into(),
            Ansi256Color::new(200).into_bg().into(),
            RgbColor::new(255, 0, 128).underline().into(),
        ];

        global_sgr_output::disable();
        for color in &colors {
            assert_eq!(color.to_string(), "");
        }

        // Re-enabling restores the exact prior output; no state was lost.
        global_sgr_output::enable();
        let rendered: Vec<String> = colors.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "\x1b[1;31m".to_string(),
                "\x1b[48;5;200m".to_string(),
                "\x1b[4;38;2;255;0;128m".to_string(),
            ]
        );
    }
}
