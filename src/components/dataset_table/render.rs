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

//! UI rendering logic for the dataset table.
//!
//! This module handles the visual representation of dataset cards, including
//! column layout, selection highlighting, and theme application using the
//! Ratatui widget system.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::{
    components::DatasetTable,
    model::Rating,
    render::icons::ICON_UNSCORED,
    theme::Theme,
    util::format::truncate,
};

const MAX_DESCRIPTION_CHARS: usize = 120;

impl DatasetTable<'_> {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, title: &str, theme: &Theme, focused: bool) {
        self.clamp_selection();

        let rows = self.records.iter().map(|record| {
            let rating = match record.rating() {
                Rating::Stars(tier) => Line::from(tier.glyphs()).style(Style::default().fg(theme.star_fg)),
                Rating::Unscored => Line::from(ICON_UNSCORED).style(Style::default().fg(theme.muted_colour)),
            };

            Row::new(vec![
                Cell::from(rating),
                Cell::from(Line::from(record.title.as_str()).style(Style::default().fg(theme.table_title_fg))),
                Cell::from(Line::from(record.format.as_str()).style(Style::default().fg(theme.table_format_fg))),
                Cell::from(
                    Line::from(record.size.as_str())
                        .style(Style::default().fg(theme.table_size_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(
                    Line::from(truncate(&record.description, MAX_DESCRIPTION_CHARS))
                        .style(Style::default().fg(theme.table_description_fg)),
                ),
            ])
        });

        let border_colour = if focused { theme.accent_colour } else { theme.border_colour };

        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Percentage(35),
                Constraint::Length(8),
                Constraint::Length(10),
                Constraint::Percentage(65),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from("Rating"),
                Cell::from("Title"),
                Cell::from("Format"),
                Cell::from(Line::from("Size").alignment(Alignment::Right)),
                Cell::from("Description"),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .column_spacing(2)
        .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg))
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_colour)),
        );

        f.render_stateful_widget(table, area, &mut *self.table_state);
    }
}
