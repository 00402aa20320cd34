// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Terminal background colour control.
//!
//! Uses OSC (Operating System Command) escape sequences, which most modern
//! terminals (XTerm, iTerm2, Alacritty, Kitty) understand. Terminals without
//! support ignore them.

use std::io::{self, Write};

use tracing::warn;

/// Sets the terminal background color using an OSC 11 escape sequence.
///
/// # Arguments
///
/// * `hex_color` - The color as a hex string (e.g., `"#121826"`).
pub(crate) fn set_terminal_bg(hex_color: &str) {
    write_osc(&format!("\x1b]11;{}\x07", hex_color));
}

/// Resets the terminal background to the user's own color (OSC 111).
pub(crate) fn reset_terminal_bg() {
    write_osc("\x1b]111\x07");
}

fn write_osc(sequence: &str) {
    let mut stdout = io::stdout();
    if let Err(e) = stdout.write_all(sequence.as_bytes()).and_then(|_| stdout.flush()) {
        warn!(error = %e, "Failed to write terminal escape sequence");
    }
}
