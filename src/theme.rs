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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) text_colour: Color,
    pub(crate) error_colour: Color,
    pub(crate) bar_colour: Color,
    pub(crate) commander_colour: Color,

    pub(crate) star_fg: Color,
    pub(crate) table_title_fg: Color,
    pub(crate) table_format_fg: Color,
    pub(crate) table_size_fg: Color,
    pub(crate) table_description_fg: Color,

    pub(crate) highlight_bg: Color,
    pub(crate) highlight_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(18, 24, 38),
            accent_colour: Color::Rgb(96, 165, 250),
            border_colour: Color::Rgb(75, 85, 99),
            muted_colour: Color::Rgb(156, 163, 175),
            text_colour: Color::Rgb(229, 231, 235),
            error_colour: Color::Rgb(248, 113, 113),
            bar_colour: Color::Rgb(31, 41, 55),
            commander_colour: Color::Rgb(250, 204, 21),

            star_fg: Color::Rgb(250, 204, 21),
            table_title_fg: Color::Rgb(255, 255, 255),
            table_format_fg: Color::Rgb(167, 139, 250),
            table_size_fg: Color::Rgb(156, 163, 175),
            table_description_fg: Color::Rgb(203, 213, 225),

            highlight_bg: Color::Rgb(37, 99, 235),
            highlight_fg: Color::Rgb(255, 255, 255),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Only `Rgb` colours have a hex form, anything else
    /// yields `None`.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_colours_format_as_hex() {
        assert_eq!(Theme::to_hex(Color::Rgb(18, 24, 38)).as_deref(), Some("#121826"));
        assert_eq!(Theme::to_hex(Color::Reset), None);
    }
}
