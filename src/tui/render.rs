// src/tui/render.rs
// =============================================================================
// Drawing the dashboard from AppState.
//
// Layout, top to bottom:
//   title
//   search box | language selector
//   stars chart (top 5 of the filtered list)
//   repository list (the whole filtered list)
//   user selector | status line
//   key help
// =============================================================================

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{AppState, FetchStatus, Focus};
use crate::dashboard::{ChartData, LanguageFilter, SERIES_LABEL, TOP_N};
use crate::github::Repository;

const TITLE: &str = "🚀 Open Source GitHub Project Explorer";
const BAR_GAP: u16 = 2;
const MAX_BAR_WIDTH: u16 = 24;

/// Render the whole dashboard for the current state
pub fn view(frame: &mut Frame, state: &AppState) {
    let dashboard = state.derive();

    let [header, controls, chart, list, user_bar, help] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(10),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        header,
    );

    render_controls(frame, controls, state);
    render_chart(frame, chart, &dashboard.chart);
    render_list(frame, list, &dashboard.filtered, state.list_offset);
    render_user_bar(frame, user_bar, state);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Tab focus · ←/→ change · Enter search · ↑/↓ scroll · Esc quit",
            Style::default().fg(Color::DarkGray),
        ))),
        help,
    );
}

fn focused_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::bordered().title(title).border_style(border)
}

fn render_controls(frame: &mut Frame, area: Rect, state: &AppState) {
    let [search_area, language_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(24)]).areas(area);

    let search_focused = state.focus == Focus::Search;
    let mut spans = vec![];
    if state.search.is_empty() && !search_focused {
        spans.push(Span::styled(
            "Search repository...",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::raw(state.search.as_str()));
    }
    if search_focused {
        spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(focused_block(" Search ", search_focused)),
        search_area,
    );

    let language_focused = state.focus == Focus::Language;
    frame.render_widget(
        Paragraph::new(selector_line(language_label(state), language_focused))
            .block(focused_block(" Language ", language_focused)),
        language_area,
    );
}

fn language_label(state: &AppState) -> &str {
    match &state.language {
        LanguageFilter::All => "All Languages",
        LanguageFilter::Exact(label) => label,
    }
}

fn selector_line(label: &str, focused: bool) -> Line<'_> {
    if focused {
        Line::from(vec![
            Span::styled("◀ ", Style::default().fg(Color::Yellow)),
            Span::raw(label),
            Span::styled(" ▶", Style::default().fg(Color::Yellow)),
        ])
    } else {
        Line::from(label)
    }
}

fn bar_width(inner_width: u16, bars: u16) -> u16 {
    if bars == 0 {
        return 1;
    }
    let width = (inner_width + BAR_GAP) / bars;
    width.saturating_sub(BAR_GAP).clamp(1, MAX_BAR_WIDTH)
}

fn render_chart(frame: &mut Frame, area: Rect, chart: &ChartData) {
    let block = Block::bordered().title(format!(
        " 📊 {} Chart (Top {} Repositories) ",
        SERIES_LABEL, TOP_N
    ));

    if chart.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No repositories to chart",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block),
            area,
        );
        return;
    }

    let bars: Vec<Bar> = chart
        .bars()
        .map(|(label, value)| {
            Bar::default()
                .value(value)
                .label(Line::from(label.to_string()))
                .text_value(value.to_string())
        })
        .collect();

    let inner = block.inner(area);
    let width = bar_width(inner.width, bars.len() as u16);

    let widget = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(width)
        .bar_gap(BAR_GAP)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));

    frame.render_widget(widget, area);
}

fn render_list(frame: &mut Frame, area: Rect, repos: &[Repository], offset: usize) {
    let offset = offset.min(repos.len().saturating_sub(1));
    let items: Vec<ListItem> = repos
        .iter()
        .skip(offset)
        .map(|repo| ListItem::new(repo.list_label()))
        .collect();

    let block = Block::bordered().title(format!(" Repositories ({}) ", repos.len()));
    frame.render_widget(List::new(items).block(block), area);
}

fn render_user_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let [user_area, status_area] =
        Layout::horizontal([Constraint::Length(24), Constraint::Fill(1)]).areas(area);

    let user_focused = state.focus == Focus::User;
    let label = if state.username.is_empty() {
        "Select User"
    } else {
        state.username.as_str()
    };
    frame.render_widget(
        Paragraph::new(selector_line(label, user_focused))
            .block(focused_block(" User ", user_focused)),
        user_area,
    );

    frame.render_widget(
        Paragraph::new(status_line(state)).block(Block::bordered().title(" Status ")),
        status_area,
    );
}

/// Text of the status box for the current fetch state
pub fn status_line(state: &AppState) -> Line<'static> {
    let searching = |user: &str| {
        vec![
            Span::raw("Searching repositories for: "),
            Span::styled(
                user.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]
    };

    match &state.fetch_status {
        FetchStatus::Idle => Line::from(Span::styled(
            "Pick a user and press Enter",
            Style::default().fg(Color::DarkGray),
        )),
        FetchStatus::Loading { user } => {
            let mut spans = searching(user);
            spans.push(Span::styled(" (loading…)", Style::default().fg(Color::Yellow)));
            Line::from(spans)
        }
        FetchStatus::Loaded { user, count } => {
            let mut spans = searching(user);
            spans.push(Span::styled(
                format!(" ({} repositories)", count),
                Style::default().fg(Color::Green),
            ));
            Line::from(spans)
        }
        FetchStatus::Failed { user, message } => {
            let mut spans = searching(user);
            spans.push(Span::styled(
                format!(" (failed: {})", message),
                Style::default().fg(Color::Red),
            ));
            Line::from(spans)
        }
    }
}
