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
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>

use crate::{ModifierSet, modifier::impl_modifier_builders};

/// 24-bit (truecolor) color value: three components, a foreground/background
/// flag, and modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub background: bool,
    pub modifiers: ModifierSet,
}

mod rgb_color_impl {
    use super::*;

    impl RgbColor {
        pub const fn new(arg_red: u8, arg_green: u8, arg_blue: u8) -> Self {
            Self {
                red: arg_red,
                green: arg_green,
                blue: arg_blue,
                background: false,
                modifiers: ModifierSet::new(),
            }
        }

        /// Unpack a `0xRRGGBB` integer into components. Bits above the low 24
        /// are masked off, and short literals simply leave the high components
        /// at zero: `0xA300` is the same color as `0x00A300`.
        pub const fn from_hex(arg_hex: u32) -> Self {
            Self::new(
                ((arg_hex >> 16) & 0xFF) as u8,
                ((arg_hex >> 8) & 0xFF) as u8,
                (arg_hex & 0xFF) as u8,
            )
        }

        #[must_use]
        pub fn into_bg(mut self) -> Self {
            self.background = true;
            self
        }

        pub fn modifiers_mut(&mut self) -> &mut ModifierSet { &mut self.modifiers }
    }

    impl From<(u8, u8, u8)> for RgbColor {
        fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::new(red, green, blue) }
    }
}

impl_modifier_builders!(RgbColor);

mod display_impl {
    use std::fmt::{Display, Formatter, Result};

    use super::*;
    use crate::{constants::{CSI, SGR},
                global_sgr_output};

    impl Display for RgbColor {
        /// `ESC [ <modifiers;> <38|48> ;2; <r> ; <g> ; <b> m`, or nothing at
        /// all when [global_sgr_output] is disabled.
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            if !global_sgr_output::is_enabled() {
                return Ok(());
            }
            write!(f, "{CSI}")?;
            if !self.modifiers.is_empty() {
                write!(f, "{};", self.modifiers)?;
            }
            match self.background {
                false => {
                    write!(f, "38;2;{};{};{}{SGR}", self.red, self.green, self.blue)
                }
                true => {
                    write!(f, "48;2;{};{};{}{SGR}", self.red, self.green, self.blue)
                }
            }
        }
    }
}
