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

use smallstr::SmallString;
use smallvec::{SmallVec, smallvec};

use crate::{Ansi256Color, Color, RgbColor, constants::presets};

/// Convenience layer over [Color]: a piece of text plus the color values to
/// prefix it with. Rendering writes each color's escape sequence, then the
/// text, then a reset, so styling never leaks into subsequent output. When
/// [crate::global_sgr_output] is disabled, rendering yields the bare text.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_sgr_color::{bold, red};
///
/// // Using the constructor functions.
/// let warning = red("this is red text.").bg_ansi256(236);
/// println!("{warning}");
/// warning.println();
///
/// // Combine constructor functions.
/// let loud = bold("loud").fg_rgb_color((255, 0, 0));
/// println!("{loud}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsiStyledText<'a> {
    pub text: &'a str,
    pub colors: sizing::InlineVecColors,
}

pub mod sizing {
    use super::*;

    /// A styled text rarely carries more than a foreground and a background;
    /// anything larger spills to the heap.
    pub const MAX_ANSI_STYLED_TEXT_COLOR_SIZE: usize = 4;
    pub type InlineVecColors = SmallVec<[Color; MAX_ANSI_STYLED_TEXT_COLOR_SIZE]>;

    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;
}

mod ansi_styled_text_impl {
    use super::*;

    impl AnsiStyledText<'_> {
        pub fn println(&self) {
            println!("{self}");
        }

        pub fn print(&self) {
            print!("{self}");
        }

        /// This is different than the [std::fmt::Display] trait
        /// implementation, because it doesn't allocate a new [String], but
        /// instead allocates an inline buffer on the stack. If this buffer
        /// gets larger than [sizing::DEFAULT_STRING_STORAGE_SIZE], it will
        /// spill to the heap.
        pub fn to_small_str(
            &self,
        ) -> SmallString<[u8; sizing::DEFAULT_STRING_STORAGE_SIZE]> {
            format!("{self}").into()
        }

        #[must_use]
        pub fn fg_rgb_color(mut self, arg_color: impl Into<RgbColor>) -> Self {
            self.colors.push(Color::Rgb(arg_color.into()));
            self
        }

        #[must_use]
        pub fn bg_rgb_color(mut self, arg_color: impl Into<RgbColor>) -> Self {
            self.colors.push(Color::Rgb(arg_color.into().into_bg()));
            self
        }

        #[must_use]
        pub fn fg_ansi256(mut self, arg_index: u8) -> Self {
            self.colors.push(Color::Ansi256(Ansi256Color::new(arg_index)));
            self
        }

        #[must_use]
        pub fn bg_ansi256(mut self, arg_index: u8) -> Self {
            self.colors
                .push(Color::Ansi256(Ansi256Color::new(arg_index).into_bg()));
            self
        }
    }
}

mod display_trait_impl {
    use std::fmt::{Display, Formatter, Result};

    use super::*;
    use crate::global_sgr_output;

    impl Display for AnsiStyledText<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            for color in &self.colors {
                write!(f, "{color}")?;
            }
            write!(f, "{}", self.text)?;
            if global_sgr_output::is_enabled() {
                write!(f, "{}", presets::RESET)?;
            }
            Ok(())
        }
    }
}

/// Constructor functions, one per entry of the 4-bit preset table that makes
/// sense as a text style starting point.
mod constructor_fns {
    use super::*;

    macro_rules! preset_constructor_fn {
        ($name: ident, $preset: ident) => {
            pub fn $name(text: &str) -> AnsiStyledText<'_> {
                AnsiStyledText {
                    text,
                    colors: smallvec![Color::Basic(presets::$preset)],
                }
            }
        };
    }

    preset_constructor_fn!(black, BLACK);
    preset_constructor_fn!(red, RED);
    preset_constructor_fn!(green, GREEN);
    preset_constructor_fn!(yellow, YELLOW);
    preset_constructor_fn!(blue, BLUE);
    preset_constructor_fn!(magenta, MAGENTA);
    preset_constructor_fn!(cyan, CYAN);
    preset_constructor_fn!(white, WHITE);

    preset_constructor_fn!(bold, BOLD);
    preset_constructor_fn!(dim, DIM);
    preset_constructor_fn!(italic, ITALIC);
    preset_constructor_fn!(underline, UNDERLINE);
    preset_constructor_fn!(invert, INVERT);
    preset_constructor_fn!(strikethrough, STRIKETHROUGH);
}
pub use constructor_fns::*;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use smallvec::smallvec;

    use super::*;
    use crate::{BasicColor, global_sgr_output};

    #[test]
    #[serial]
    fn sequences_then_text_then_reset() {
        global_sgr_output::enable();
        let styled = AnsiStyledText {
            text: "Hello",
            colors: smallvec![
                Color::Basic(BasicColor::new(31).bold()),
                Color::Ansi256(Ansi256Color::new(236).into_bg()),
            ],
        };
        assert_eq!(
            styled.to_string(),
            "\x1b[1;31m\x1b[48;5;236mHello\x1b[0m"
        );
    }

    #[test]
    #[serial]
    fn constructor_fn_plus_builders() {
        global_sgr_output::enable();
        let styled = dim("hello").fg_rgb_color((0, 0, 0)).bg_rgb_color((1, 1, 1));
        assert_eq!(
            styled.to_string(),
            "\x1b[2m\x1b[38;2;0;0;0m\x1b[48;2;1;1;1mhello\x1b[0m"
        );
    }

    #[test]
    #[serial]
    fn disabled_switch_yields_bare_text() {
        let styled = red("plain").bg_ansi256(200);

        global_sgr_output::disable();
        assert_eq!(styled.to_string(), "plain");

        global_sgr_output::enable();
        assert_eq!(styled.to_string(), "\x1b[31m\x1b[48;5;200mplain\x1b[0m");
    }

    #[test]
    #[serial]
    fn to_small_str_matches_display() {
        global_sgr_output::enable();
        let styled = underline("spill past the inline buffer length");
        assert_eq!(styled.to_small_str().as_str(), styled.to_string());
    }
}
