//! Day-detail popup

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::DayDetail;
use crate::ui::theme::Theme;

const POPUP_WIDTH: u16 = 44;
const POPUP_HEIGHT: u16 = 7;

/// Rect of `width` x `height` centered in `area`, clamped to it
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub(crate) fn draw_day_popup(f: &mut Frame, detail: &DayDetail, theme: &Theme, area: Rect) {
    let popup_area = centered_rect(area, POPUP_WIDTH, POPUP_HEIGHT);
    f.render_widget(Clear, popup_area);

    let body_style = if detail.is_holiday {
        Style::default()
            .fg(theme.holiday)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.foreground)
    };

    let lines = vec![
        Line::styled(detail.heading.clone(), Style::default().fg(theme.accent)),
        Line::raw(""),
        Line::styled(detail.body.clone(), body_style),
        Line::raw(""),
        Line::styled("Enter/Esc: close", Style::default().fg(theme.dimmed)),
    ];

    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .style(Style::default().bg(theme.surface)),
        );
    f.render_widget(popup, popup_area);
}
