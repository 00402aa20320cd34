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

//! Render the pagination bar.
//!
//! The bar shows a Prev button, the page window and a Next button. Prev and
//! Next are dimmed at the first and last page, the current page is
//! highlighted.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    render::icons::{ICON_NEXT, ICON_PREV},
    state::pagination::{has_next, has_previous, page_window},
    theme::Theme,
};

pub(crate) fn draw_pagination(f: &mut Frame, area: Rect, current_page: usize, total_pages: usize, theme: &Theme) {
    let line = pagination_line(current_page, total_pages, theme);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn pagination_line(current_page: usize, total_pages: usize, theme: &Theme) -> Line<'static> {
    if total_pages == 0 {
        return Line::from(Span::styled("No results", Style::default().fg(theme.muted_colour)));
    }

    let enabled = Style::default().fg(theme.accent_colour);
    let disabled = Style::default().fg(theme.border_colour);

    let mut spans = vec![Span::styled(
        format!("{ICON_PREV} Prev"),
        if has_previous(current_page) { enabled } else { disabled },
    )];

    for page in page_window(current_page, total_pages) {
        spans.push(Span::raw("  "));
        let style = if page == current_page {
            Style::default()
                .bg(theme.highlight_bg)
                .fg(theme.highlight_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_colour)
        };
        spans.push(Span::styled(format!(" {page} "), style));
    }

    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format!("Next {ICON_NEXT}"),
        if has_next(current_page, total_pages) { enabled } else { disabled },
    ));

    Line::from(spans)
}
