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

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::{components::Sidebar, model::SearchHistory, theme::Theme};

const EMPTY_HISTORY: &str = "No searches yet";

impl Sidebar {
    pub(crate) fn draw(
        &self,
        f: &mut Frame,
        area: Rect,
        history: &SearchHistory,
        popular: &[String],
        theme: &Theme,
        focused: bool,
    ) {
        let popular_height = popular.len() as u16 + 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(popular_height)])
            .split(area);

        // The sidebar selection spans both lists, split it between them.
        let selected = self.list_state.selected().filter(|_| focused);
        let recent_selected = selected.filter(|i| *i < history.len());
        let popular_selected = selected
            .and_then(|i| i.checked_sub(history.len()))
            .filter(|i| *i < popular.len());

        let recent_items: Vec<ListItem> = if history.is_empty() {
            vec![ListItem::new(EMPTY_HISTORY).style(Style::default().fg(theme.muted_colour))]
        } else {
            history.entries().iter().map(|q| ListItem::new(q.as_str())).collect()
        };

        render_list(f, chunks[0], " Recent Searches ", recent_items, recent_selected, theme, focused);

        let popular_items: Vec<ListItem> = popular.iter().map(|q| ListItem::new(q.as_str())).collect();

        render_list(f, chunks[1], " Popular Searches ", popular_items, popular_selected, theme, focused);
    }
}

fn render_list(
    f: &mut Frame,
    area: Rect,
    title: &str,
    items: Vec<ListItem>,
    selected: Option<usize>,
    theme: &Theme,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border_colour)
    };

    let list = List::new(items)
        .style(Style::default().fg(theme.text_colour))
        .block(Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .border_style(border_style))
        .highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg))
        .highlight_symbol(">> ");

    let mut state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list, area, &mut state);
}
