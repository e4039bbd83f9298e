//! Dashboard drawing functions
//!
//! This module handles rendering the main dashboard:
//! - Header with menu button and live clock
//! - Greeting banner
//! - Calendar panel (navigation row, weekday header, day grid, holiday list)
//! - Sidebar (docked or overlay)
//! - Status bar

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, ClickTarget};
use crate::calendar::WEEK_LEN;
use crate::locale;
use crate::ui::day_cell::DayCellWidget;
use crate::ui::layout::{CalendarLayout, SidebarPlacement};
use crate::ui::theme::Theme;

/// Width of the sidebar in characters
const SIDEBAR_WIDTH: u16 = 26;
/// Width of the clickable month arrows
const ARROW_WIDTH: u16 = 3;

pub(crate) fn draw_dashboard(f: &mut Frame, app: &mut App, area: Rect) {
    let theme = app.theme().clone();
    let placement = app.sidebar_placement();

    let main_area = if placement == SidebarPlacement::Docked {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
            .split(area);
        draw_sidebar(f, app, columns[0], &theme);
        columns[1]
    } else {
        area
    };

    draw_main(f, app, main_area, &theme);

    // Overlay goes last so it sits on top for drawing and hit-testing
    if placement == SidebarPlacement::Overlay {
        let overlay = Rect {
            width: SIDEBAR_WIDTH.min(area.width),
            ..area
        };
        f.render_widget(Clear, overlay);
        draw_sidebar(f, app, overlay, &theme);
    }
}

fn draw_main(f: &mut Frame, app: &mut App, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Greeting
            Constraint::Min(8),    // Calendar
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, app, chunks[0], theme);
    draw_greeting(f, app, chunks[1], theme);
    draw_calendar(f, app, chunks[2], theme);
    draw_status_bar(f, app, chunks[3], theme);
}

/// Header: menu button and the long clock line
fn draw_header(f: &mut Frame, app: &mut App, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(" darkwall-dash ")
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let button_area = Rect {
        width: ARROW_WIDTH.min(inner.width),
        ..inner
    };
    let button = Paragraph::new(" ☰ ").style(
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(button, button_area);
    let target = if app.is_narrow() {
        ClickTarget::MobileMenu
    } else {
        ClickTarget::SidebarToggle
    };
    app.hits_mut().register(button_area, target);

    let clock_area = Rect {
        x: inner.x + button_area.width,
        width: inner.width.saturating_sub(button_area.width),
        ..inner
    };
    let clock = Paragraph::new(locale::format_long_datetime(app.now()))
        .alignment(Alignment::Right)
        .style(Style::default().fg(theme.foreground));
    f.render_widget(clock, clock_area);
}

/// Greeting banner
fn draw_greeting(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let greeting = app.greeting();
    let style = if greeting.is_holiday() {
        Style::default()
            .fg(theme.holiday)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.foreground)
    };

    let banner = Paragraph::new(greeting.to_string())
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.dimmed_alt))
                .style(Style::default().bg(theme.surface)),
        );
    f.render_widget(banner, area);
}

/// Calendar panel
fn draw_calendar(f: &mut Frame, app: &mut App, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dimmed_alt))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height < 3 {
        return;
    }

    let cursor = app.cursor();
    let month_holidays: Vec<(u32, String)> = app
        .holidays()
        .month_holidays(cursor.year(), cursor.month())
        .into_iter()
        .map(|(day, name)| (day, name.to_string()))
        .collect();
    let legend_height = (month_holidays.len().max(1) as u16).min(inner.height / 3);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Month title + arrows
            Constraint::Length(1),             // Weekday header
            Constraint::Min(1),                // Day grid
            Constraint::Length(legend_height), // Holidays this month
        ])
        .split(inner);

    draw_month_nav(f, app, rows[0], theme);

    let grid = app.grid().clone();
    let layout = centered_layout(rows[2], grid.row_count());

    // Weekday header shares the grid's columns
    let header_layout = CalendarLayout {
        area: Rect {
            y: rows[1].y,
            height: 1,
            ..layout.area
        },
        cell_height: 1,
        ..layout
    };
    for (col, initial) in locale::WEEKDAY_INITIALS.iter().enumerate() {
        if let Some(rect) = header_layout.cell_rect(col) {
            let label = Paragraph::new(*initial)
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(theme.dimmed)
                        .add_modifier(Modifier::BOLD),
                );
            f.render_widget(label, rect);
        }
    }

    let selected = app.selected_day();
    let days = grid.cells().iter().enumerate().skip(grid.leading_blanks());
    for (index, cell) in days {
        let (Some(rect), Some(day)) = (layout.cell_rect(index), cell.day()) else {
            continue;
        };
        let widget = DayCellWidget::new(*cell, theme).selected(day == selected);
        f.render_widget(widget, rect);
        app.hits_mut().register(rect, ClickTarget::Day(day));
    }

    draw_holiday_list(f, &month_holidays, rows[3], theme);
}

/// Grid layout centered horizontally in `area`
fn centered_layout(area: Rect, rows: usize) -> CalendarLayout {
    let layout = CalendarLayout::new(area, rows);
    let width = (layout.cell_width * WEEK_LEN as u16).min(area.width);
    CalendarLayout {
        area: Rect {
            x: area.x + (area.width - width) / 2,
            width,
            ..area
        },
        ..layout
    }
}

/// `‹  Januari 2024  ›` row
fn draw_month_nav(f: &mut Frame, app: &mut App, area: Rect, theme: &Theme) {
    let cursor = app.cursor();
    let title = Paragraph::new(locale::month_title(cursor.year(), cursor.month()))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(title, area);

    if area.width < ARROW_WIDTH * 2 {
        return;
    }
    let arrow_style = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);

    let prev_area = Rect {
        width: ARROW_WIDTH,
        ..area
    };
    f.render_widget(Paragraph::new(" ‹ ").style(arrow_style), prev_area);
    app.hits_mut().register(prev_area, ClickTarget::PreviousMonth);

    let next_area = Rect {
        x: area.x + area.width - ARROW_WIDTH,
        width: ARROW_WIDTH,
        ..area
    };
    f.render_widget(Paragraph::new(" › ").style(arrow_style), next_area);
    app.hits_mut().register(next_area, ClickTarget::NextMonth);
}

/// Holidays of the shown month, below the grid
fn draw_holiday_list(f: &mut Frame, holidays: &[(u32, String)], area: Rect, theme: &Theme) {
    if area.height == 0 {
        return;
    }

    let lines: Vec<Line> = if holidays.is_empty() {
        vec![Line::styled(
            "Tidak ada hari libur nasional",
            Style::default().fg(theme.dimmed),
        )]
    } else {
        holidays
            .iter()
            .map(|(day, name)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>2} ", day),
                        Style::default()
                            .fg(theme.holiday)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(name.clone(), Style::default().fg(theme.foreground)),
                ])
            })
            .collect()
    };

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Sidebar: short date, theme switch, collapse control
fn draw_sidebar(f: &mut Frame, app: &mut App, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dimmed_alt))
        .title(" Menu ")
        .style(Style::default().bg(theme.surface));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height < 4 || inner.width == 0 {
        return;
    }

    let date = Paragraph::new(locale::format_short_date(app.now())).style(
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(date, line_at(inner, 0));

    let switch = if app.theme_mode().is_dark() { "[■]" } else { "[ ]" };
    let switch_line = line_at(inner, 2);
    let switch_text = Line::from(vec![
        Span::styled(switch, Style::default().fg(theme.accent)),
        Span::styled(" Mode gelap", Style::default().fg(theme.foreground)),
    ]);
    f.render_widget(Paragraph::new(switch_text), switch_line);
    let switch_width = (switch.width() + " Mode gelap".width()) as u16;
    app.hits_mut().register(
        Rect {
            width: switch_width.min(switch_line.width),
            ..switch_line
        },
        ClickTarget::ThemeSwitch,
    );

    let close_line = line_at(inner, inner.height - 1);
    let (label, target) = if app.is_narrow() {
        ("✕ Tutup menu", ClickTarget::MobileMenu)
    } else {
        ("« Sembunyikan", ClickTarget::SidebarToggle)
    };
    f.render_widget(
        Paragraph::new(label).style(Style::default().fg(theme.dimmed)),
        close_line,
    );
    app.hits_mut().register(
        Rect {
            width: (label.width() as u16).min(close_line.width),
            ..close_line
        },
        target,
    );
}

/// Single-line rect at row `offset` of `area`
fn line_at(area: Rect, offset: u16) -> Rect {
    Rect {
        y: area.y + offset.min(area.height.saturating_sub(1)),
        height: 1,
        ..area
    }
}

/// Draw the status bar
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let menu_hint = if app.is_narrow() { "m: menu" } else { "b: sidebar" };
    let status = format!(
        " ←↓↑→: select | Enter: details | [ ]: month | t: theme | {} | q: quit",
        menu_hint
    );

    let status_bar =
        Paragraph::new(status).style(Style::default().fg(theme.dimmed).bg(theme.background));

    f.render_widget(status_bar, area);
}
