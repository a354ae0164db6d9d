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
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>

use crate::{ModifierSet, modifier::impl_modifier_builders};

/// 8-bit color value: one index into the 256-color ANSI palette, a
/// foreground/background flag, and modifiers. Only indices 16..=231 address
/// the 6×6×6 RGB cube; 0–15 and 232–255 are the named and grayscale ranges.
/// The index is never range-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ansi256Color {
    pub index: u8,
    pub background: bool,
    pub modifiers: ModifierSet,
}

mod ansi256_color_impl {
    use super::*;

    impl Ansi256Color {
        pub const fn new(arg_index: u8) -> Self {
            Self {
                index: arg_index,
                background: false,
                modifiers: ModifierSet::new(),
            }
        }

        /// Derive the palette index from three RGB cube components, each
        /// conventionally in `0..=5`: `index = 16 + 36*r + 6*g + b`.
        /// Out-of-cube components are not rejected; the arithmetic is widened
        /// and then truncated, which silently lands outside the cube.
        pub fn from_cube(arg_red: u8, arg_green: u8, arg_blue: u8) -> Self {
            let index = 16
                + 36 * u16::from(arg_red)
                + 6 * u16::from(arg_green)
                + u16::from(arg_blue);
            Self::new(index as u8)
        }

        #[must_use]
        pub fn into_bg(mut self) -> Self {
            self.background = true;
            self
        }

        pub fn modifiers_mut(&mut self) -> &mut ModifierSet { &mut self.modifiers }
    }
}

impl_modifier_builders!(Ansi256Color);

mod display_impl {
    use std::fmt::{Display, Formatter, Result};

    use super::*;
    use crate::{constants::{CSI, SGR},
                global_sgr_output};

    impl Display for Ansi256Color {
        /// `ESC [ <modifiers;> <38|48> ;5; <index> m`, or nothing at all when
        /// [global_sgr_output] is disabled.
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            if !global_sgr_output::is_enabled() {
                return Ok(());
            }
            write!(f, "{CSI}")?;
            if !self.modifiers.is_empty() {
                write!(f, "{};", self.modifiers)?;
            }
            match self.background {
                false => write!(f, "38;5;{}{SGR}", self.index),
                true => write!(f, "48;5;{}{SGR}", self.index),
            }
        }
    }
}
