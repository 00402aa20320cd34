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

//! Interactive widgets.
//!
//! Each component keeps its own persistent UI state (selection, cursor) and
//! translates key events into either internal changes or an action for the
//! caller to act on.

mod dataset_table;
mod search_bar;
mod sidebar;

pub(crate) use dataset_table::{DatasetTable, DatasetTableState};
pub(crate) use search_bar::{SearchBar, SearchBarAction};
pub(crate) use sidebar::Sidebar;
