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

use r3bl_sgr_color::{Ansi256Color, AnsiStyledText, BasicColor, Color, RgbColor,
                     constants::presets, global_sgr_output};

fn main() {
    // Print styled strings built from the three color models.
    {
        AnsiStyledText {
            text: "Print a formatted (bold, italic, underline) string w/ 4-bit colors.",
            colors: smallvec::smallvec![Color::Basic(
                presets::YELLOW.bold().italic().underline()
            )],
        }
        .println();

        AnsiStyledText {
            text: "ANSI 256 foreground on an ANSI 256 background.",
            colors: smallvec::smallvec![
                Color::Ansi256(Ansi256Color::from_cube(5, 2, 0)),
                Color::Ansi256(Ansi256Color::new(236).into_bg()),
            ],
        }
        .println();

        AnsiStyledText {
            text: "Truecolor foreground unpacked from a hex literal.",
            colors: smallvec::smallvec![
                Color::Rgb(RgbColor::from_hex(0xE34FE3).dim().strikethrough()),
                Color::Rgb(RgbColor::new(30, 30, 30).into_bg()),
            ],
        }
        .println();
    }

    // Raw sequences, no text wrapper.
    {
        print!("{}", BasicColor::new(32));
        print!("green until reset");
        println!("{}", presets::RESET);
    }

    // Disable the global switch: the same values now render as nothing.
    {
        global_sgr_output::disable();
        let msg = format!(
            "> SGR output disabled (is_enabled = {}), this line is plain.",
            global_sgr_output::is_enabled()
        );
        print_text(&msg);
    }

    // Re-enable it: prior configuration renders exactly as before.
    {
        global_sgr_output::enable();
        let msg = format!(
            "> SGR output enabled (is_enabled = {}), this line is colored.",
            global_sgr_output::is_enabled()
        );
        print_text(&msg);
    }
}

fn print_text(msg: &str) {
    AnsiStyledText {
        text: msg,
        colors: smallvec::smallvec![
            Color::Rgb(RgbColor::new(200, 200, 1).underline()),
            Color::Rgb(RgbColor::new(100, 60, 150).into_bg()),
        ],
    }
    .println();
}
