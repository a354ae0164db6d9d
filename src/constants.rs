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
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use crate::BasicColor;

/// Control Sequence Introducer: ESC followed by `[`.
pub const CSI: &str = "\x1b[";
/// The terminating letter of an SGR sequence.
pub const SGR: &str = "m";

/// Pre-constructed 4-bit values with the standard SGR numerals and no
/// modifiers. The style entries carry a bare modifier code as their "color",
/// so e.g. [RESET] renders as `ESC[0m`.
#[rustfmt::skip]
pub mod presets {
    use super::*;

    pub const RESET:         BasicColor = BasicColor::new(0);
    pub const BOLD:          BasicColor = BasicColor::new(1);
    pub const DIM:           BasicColor = BasicColor::new(2);
    pub const ITALIC:        BasicColor = BasicColor::new(3);
    pub const UNDERLINE:     BasicColor = BasicColor::new(4);
    pub const INVERT:        BasicColor = BasicColor::new(7);
    pub const STRIKETHROUGH: BasicColor = BasicColor::new(9);

    pub const BLACK:         BasicColor = BasicColor::new(30);
    pub const RED:           BasicColor = BasicColor::new(31);
    pub const GREEN:         BasicColor = BasicColor::new(32);
    pub const YELLOW:        BasicColor = BasicColor::new(33);
    pub const BLUE:          BasicColor = BasicColor::new(34);
    pub const MAGENTA:       BasicColor = BasicColor::new(35);
    pub const CYAN:          BasicColor = BasicColor::new(36);
    pub const WHITE:         BasicColor = BasicColor::new(37);

    pub const BLACK_BG:      BasicColor = BasicColor::new(40);
    pub const RED_BG:        BasicColor = BasicColor::new(41);
    pub const GREEN_BG:      BasicColor = BasicColor::new(42);
    pub const YELLOW_BG:     BasicColor = BasicColor::new(43);
    pub const BLUE_BG:       BasicColor = BasicColor::new(44);
    pub const MAGENTA_BG:    BasicColor = BasicColor::new(45);
    pub const CYAN_BG:       BasicColor = BasicColor::new(46);
    pub const WHITE_BG:      BasicColor = BasicColor::new(47);
}
