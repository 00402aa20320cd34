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

//! Render the command-line interface.
//!
//! Shows the command being typed with its cursor, the result of the last
//! failed command, or a key hint when idle.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::App;

const KEY_HINT: &str =
    "/ search  tab focus  a/d sort  r rating  0 all  n/p page  : command  q quit";

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, app: &App) {
    let commander = &app.commander;
    let theme = &app.theme;

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let (text, style) = if commander.active() {
        (
            format!(":{}", commander.input.value()),
            Style::default().fg(theme.commander_colour),
        )
    } else if let Some(message) = &commander.message {
        (message.clone(), Style::default().fg(theme.error_colour))
    } else {
        (KEY_HINT.to_string(), Style::default().fg(theme.muted_colour))
    };

    f.render_widget(
        Paragraph::new(text).style(style.bg(theme.bar_colour)),
        container[0],
    );

    if commander.active() {
        // One column for the ':' prompt.
        let cursor_x = container[0].x + 1 + commander.input.visual_cursor() as u16;
        let cursor_y = container[0].y;
        f.set_cursor_position((cursor_x, cursor_y));
    }
}
