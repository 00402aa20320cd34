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

const ELLIPSIS: char = '\u{2026}';

/// Shortens `text` to at most `max_chars` characters, ending with an ellipsis
/// when anything was cut.
///
/// Counts characters rather than bytes so multi-byte text is never split.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate("Online retail", 8), "Online …");
/// assert_eq!(truncate("Sales", 8), "Sales");
/// ```
pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut shortened: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    shortened.push(ELLIPSIS);
    shortened
}
