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

//! # r3bl_sgr_color
//!
//! This crate generates ANSI SGR escape sequences for styling terminal output,
//! in all three color-addressing schemes that terminals understand:
//!
//! 1. 4-bit: the 16 named foreground / background colors, plus the bare style
//!    codes (bold, dim, italic, underline, invert, strikethrough) — see
//!    [BasicColor] and the [constants::presets] table.
//! 2. 8-bit: the 256-color palette, addressed by index or derived from a
//!    6×6×6 RGB cube — see [Ansi256Color].
//! 3. 24-bit: truecolor, addressed by component triple or unpacked from a
//!    `0xRRGGBB` literal — see [RgbColor].
//!
//! Every color value carries a [ModifierSet] of SGR attributes which are
//! emitted in ascending code order, so rendering is deterministic and
//! reproducible. Rendering is just [std::fmt::Display]; a value formats to the
//! exact escape sequence, or to the empty string when [global_sgr_output] has
//! been disabled. This crate only *produces* sequences; it never parses them,
//! and it never sniffs the terminal — turning output off is an explicit,
//! process-wide choice.
//!
//! # Example usage:
//!
//! ```rust
//! use r3bl_sgr_color::{Ansi256Color, RgbColor, constants::presets, red};
//!
//! // 4-bit, from the preset table.
//! let bold_red = presets::RED.bold();
//! assert_eq!(bold_red.to_string(), "\x1b[1;31m");
//!
//! // 8-bit, derived from the RGB cube.
//! let sea_green = Ansi256Color::from_cube(1, 4, 3);
//! assert_eq!(sea_green.to_string(), "\x1b[38;5;79m");
//!
//! // 24-bit, unpacked from a hex literal, as a background.
//! let plum_bg = RgbColor::from_hex(0xE34FE3).into_bg();
//! assert_eq!(plum_bg.to_string(), "\x1b[48;2;227;79;227m");
//!
//! // Styled text glue.
//! red("this text is red").println();
//! ```
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

// Attach.
pub mod ansi256_color;
pub mod ansi_styled_text;
pub mod basic_color;
pub mod color;
pub mod constants;
pub mod modifier;
pub mod rgb_color;
pub mod toggle_sgr_output;

// Re-export.
pub use ansi256_color::*;
pub use ansi_styled_text::*;
pub use basic_color::*;
pub use color::*;
pub use constants::{CSI, SGR};
pub use modifier::*;
pub use rgb_color::*;
pub use toggle_sgr_output::*;
