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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change to provide a reactive user interface. The
//! records on screen are always derived from the view state through
//! [`ViewState::page`](crate::state::ViewState::page), nothing visible is
//! cached between frames.

mod commander;
pub(crate) mod icons;
mod pagination;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    App,
    events::Focus,
    model::DatasetRecord,
    render::{
        commander::draw_commander,
        icons::{ICON_ASCENDING, ICON_DESCENDING, ICON_ERROR, SPINNER},
        pagination::draw_pagination,
    },
    state::{
        ViewState,
        pipeline::{SortField, SortOrder},
    },
    theme::Theme,
};

const APP_TITLE: &str = "E-commerce Dataset Mining Recommendation System";
const SIDEBAR_WIDTH: u16 = 32;

/// Renders the user interface to the terminal frame.
///
/// It handles:
///
/// * **Layout**: Partitioning the screen into the header, search bar, results
///   and sidebar, and the command line.
/// * **State Mapping**: Running the view state pipeline to produce the page of
///   dataset cards and the pagination bar.
/// * **Styling**: Applying colors and borders defined in the application theme.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, the table keeps its
///   scroll position between frames.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let cta_height = if app.state.show_cta { 1 } else { 0 };

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(cta_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);

    app.search_bar
        .draw(f, outer[1], &app.theme, app.focus == Focus::SearchInput);

    let page = app.state.page();

    if app.state.show_cta {
        draw_cta(f, outer[2], &app.state, page.total_records, &app.theme);
    }

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(SIDEBAR_WIDTH)])
        .split(outer[3]);

    let results = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(content[0]);

    let title = match &app.state.last_query {
        Some(query) => format!(" Results for \"{query}\" "),
        None => " Datasets ".to_string(),
    };

    let mut table = app.dataset_table.as_widget(&page.records);
    table.draw(f, results[0], &title, &app.theme, app.focus == Focus::Results);
    draw_detail(f, results[1], table.selected_record(), &app.theme);

    draw_pagination(f, results[2], app.state.current_page, page.total_pages, &app.theme);

    app.sidebar.draw(
        f,
        content[1],
        &app.state.history,
        &app.config.popular_searches,
        &app.theme,
        app.focus == Focus::Sidebar,
    );

    draw_commander(f, outer[4], app);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    f.render_widget(
        Paragraph::new(APP_TITLE)
            .style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        rows[0],
    );

    let status = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(36)])
        .split(rows[1]);

    f.render_widget(Paragraph::new(status_line(&app.state, app.ticks, theme)), status[0]);
    f.render_widget(
        Paragraph::new(view_options_line(&app.state, theme)).alignment(Alignment::Right),
        status[1],
    );
}

fn status_line(state: &ViewState, ticks: u64, theme: &Theme) -> Line<'static> {
    if state.loading {
        let frame = SPINNER[(ticks % SPINNER.len() as u64) as usize];
        return Line::from(vec![
            Span::styled(format!("{frame} "), Style::default().fg(theme.accent_colour)),
            Span::styled("Loading datasets...", Style::default().fg(theme.text_colour)),
        ]);
    }

    if let Some(error) = &state.last_error {
        return Line::from(vec![
            Span::styled(
                format!("{ICON_ERROR} {error}"),
                Style::default().fg(theme.error_colour).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (Esc to dismiss)", Style::default().fg(theme.muted_colour)),
        ]);
    }

    Line::from(Span::styled(
        format!("{} datasets loaded", state.datasets.len()),
        Style::default().fg(theme.muted_colour),
    ))
}

fn view_options_line(state: &ViewState, theme: &Theme) -> Line<'static> {
    let sort = match state.sort {
        Some(spec) => {
            let arrow = match spec.order {
                SortOrder::Ascending => ICON_ASCENDING,
                SortOrder::Descending => ICON_DESCENDING,
            };
            let field = match spec.field {
                SortField::Size => "size",
            };
            format!("{field} {arrow}")
        }
        None => "none".to_string(),
    };

    let filter = match state.rating_filter {
        Some(tier) => tier.to_string(),
        None => "all".to_string(),
    };

    let label = Style::default().fg(theme.muted_colour);
    let value = Style::default().fg(theme.accent_colour);

    Line::from(vec![
        Span::styled("sort ", label),
        Span::styled(sort, value),
        Span::styled("  rating ", label),
        Span::styled(filter, value),
    ])
}

fn draw_cta(f: &mut Frame, area: Rect, state: &ViewState, total_records: usize, theme: &Theme) {
    let query = state.last_query.as_deref().unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(
            format!(" {total_records} recommended datasets for "),
            Style::default().fg(theme.text_colour),
        ),
        Span::styled(
            format!("\"{query}\""),
            Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            ", select one to see where to get it",
            Style::default().fg(theme.text_colour),
        ),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

fn draw_detail(f: &mut Frame, area: Rect, record: Option<&DatasetRecord>, theme: &Theme) {
    let Some(record) = record else {
        return;
    };

    let label = Style::default().fg(theme.muted_colour);

    let url = Line::from(vec![
        Span::styled(" url    ", label),
        Span::styled(
            record.url.clone(),
            Style::default().fg(theme.accent_colour).add_modifier(Modifier::UNDERLINED),
        ),
    ]);

    let source = Line::from(vec![
        Span::styled(" source ", label),
        Span::styled(
            record.source.clone().unwrap_or_else(|| "unknown".to_string()),
            Style::default().fg(theme.text_colour),
        ),
    ]);

    f.render_widget(Paragraph::new(vec![url, source]), area);
}
