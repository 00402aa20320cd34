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

//! Unicode symbols for the TUI.
//!
//! This module contains standardized icons used across the interface to
//! represent ratings, paging and request status. These are selected for
//! compatibility with most modern terminal emulators and fonts.

// Rating
pub(crate) const ICON_UNSCORED: &str = "\u{2014}";

// Pagination
pub(crate) const ICON_PREV: &str = "\u{25C0}";
pub(crate) const ICON_NEXT: &str = "\u{25B6}";

// Sort direction
pub(crate) const ICON_ASCENDING: &str = "\u{2191}";
pub(crate) const ICON_DESCENDING: &str = "\u{2193}";

// Status
pub(crate) const ICON_ERROR: &str = "\u{2716}";

// Braille spinner, one frame per tick while a request is in flight.
pub(crate) const SPINNER: [&str; 8] = [
    "\u{28F7}", "\u{28EF}", "\u{28DF}", "\u{287F}", "\u{28BF}", "\u{28FB}", "\u{28FD}", "\u{28FE}",
];
