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
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>

use crate::{ModifierSet, modifier::impl_modifier_builders};

/// 4-bit color value: one bare SGR numeral plus modifiers. The numeral is the
/// whole story — foreground colors are 30–37, background colors are 40–47,
/// and style-only codes (e.g. 1 for bold) are valid here too. There is no
/// background flag on this variant; a background color is expressed by
/// passing the 40–47 numeral as `code`. The numeral is never range-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicColor {
    pub code: u8,
    pub modifiers: ModifierSet,
}

mod basic_color_impl {
    use super::*;

    impl BasicColor {
        pub const fn new(arg_code: u8) -> Self {
            Self {
                code: arg_code,
                modifiers: ModifierSet::new(),
            }
        }

        pub fn modifiers_mut(&mut self) -> &mut ModifierSet { &mut self.modifiers }
    }
}

impl_modifier_builders!(BasicColor);

mod display_impl {
    use std::fmt::{Display, Formatter, Result};

    use super::*;
    use crate::{constants::{CSI, SGR},
                global_sgr_output};

    impl Display for BasicColor {
        /// `ESC [ <modifiers;> <code> m`, or nothing at all when
        /// [global_sgr_output] is disabled.
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            if !global_sgr_output::is_enabled() {
                return Ok(());
            }
            write!(f, "{CSI}")?;
            if !self.modifiers.is_empty() {
                write!(f, "{};", self.modifiers)?;
            }
            write!(f, "{}{SGR}", self.code)
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
    fn red_foreground() {
        global_sgr_output::enable();
        let color = BasicColor::new(31);
        assert_eq!(color.to_string(), "\x1b[31m");
    }

    #[test]
    #[serial]
    fn bold_red_foreground() {
        global_sgr_output::enable();
        let color = BasicColor::new(31).bold();
        assert_eq!(color.to_string(), "\x1b[1;31m");
    }

    #[test]
    #[serial]
    fn bare_reset_code() {
        global_sgr_output::enable();
        let color = BasicColor::new(0);
        assert_eq!(color.to_string(), "\x1b[0m");
    }

    #[test]
    #[serial]
    fn background_is_just_a_numeral() {
        global_sgr_output::enable();
        let color = BasicColor::new(44);
        assert_eq!(color.to_string(), "\x1b[44m");
    }

    #[test]
    #[serial]
    fn modifiers_emit_ascending_before_the_code() {
        global_sgr_output::enable();
        let color = BasicColor::new(37).strikethrough().dim().underline();
        assert_eq!(color.to_string(), "\x1b[2;4;9;37m");
    }

    #[test]
    #[serial]
    fn direct_set_mutation() {
        global_sgr_output::enable();
        let mut color = BasicColor::new(32);
        color.modifiers_mut().insert(Modifier::Italic);
        assert_eq!(color.to_string(), "\x1b[3;32m");

        color.modifiers_mut().remove(Modifier::Italic);
        assert_eq!(color.to_string(), "\x1b[32m");
    }
}
