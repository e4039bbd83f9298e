//! Day cell widget
//!
//! Renders one cell of the month grid:
//! - Day number, centered
//! - Today highlighted with the accent background
//! - Holidays in the holiday color, with a dot marker when there is room
//! - Leading blanks left empty

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::theme::Theme;
use crate::calendar::DayCell;

/// Day cell widget
pub struct DayCellWidget<'a> {
    cell: DayCell,
    selected: bool,
    theme: &'a Theme,
}

impl<'a> DayCellWidget<'a> {
    pub fn new(cell: DayCell, theme: &'a Theme) -> Self {
        Self {
            cell,
            selected: false,
            theme,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn style(&self) -> Style {
        let theme = self.theme;
        let mut style = Style::default().fg(theme.foreground).bg(theme.background);
        if self.cell.is_holiday() {
            style = style.fg(theme.holiday).add_modifier(Modifier::BOLD);
        }
        if self.selected {
            style = style.bg(theme.selection_bg);
            if !self.cell.is_holiday() {
                style = style.fg(theme.selection_fg);
            }
        }
        if self.cell.is_today() {
            style = style
                .fg(theme.today_fg)
                .bg(theme.today_bg)
                .add_modifier(Modifier::BOLD);
        }
        style
    }
}

impl<'a> Widget for DayCellWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let Some(day) = self.cell.day() else {
            return;
        };

        let style = self.style();

        // Fill background
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(style);
                }
            }
        }

        let label = format!("{:>2}", day);
        let x = area.x + area.width.saturating_sub(label.len() as u16) / 2;
        buf.set_stringn(x, area.y, &label, area.width as usize, style);

        if self.cell.is_holiday() && area.height >= 2 {
            let marker_x = area.x + area.width.saturating_sub(1) / 2 + 1;
            buf.set_stringn(
                marker_x.min(area.x + area.width - 1),
                area.y + 1,
                "•",
                1,
                style,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_renders_day_number() {
        let theme = Theme::light();
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        let cell = DayCell::Day {
            day: 7,
            is_today: false,
            is_holiday: false,
        };
        DayCellWidget::new(cell, &theme).render(area, &mut buf);
        assert_eq!(row_text(&buf, 0), "  7 ");
    }

    #[test]
    fn test_blank_cell_untouched() {
        let theme = Theme::light();
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        DayCellWidget::new(DayCell::OtherMonth, &theme).render(area, &mut buf);
        assert_eq!(row_text(&buf, 0), "    ");
    }

    #[test]
    fn test_today_and_holiday_styles() {
        let theme = Theme::dark();
        let today = DayCell::Day {
            day: 17,
            is_today: true,
            is_holiday: true,
        };
        let style = DayCellWidget::new(today, &theme).selected(true).style();
        assert_eq!(style.bg, Some(theme.today_bg));

        let holiday = DayCell::Day {
            day: 25,
            is_today: false,
            is_holiday: true,
        };
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        DayCellWidget::new(holiday, &theme).render(area, &mut buf);
        assert_eq!(buf[(1, 0)].fg, theme.holiday);
        assert_eq!(row_text(&buf, 1).trim(), "•");
    }
}
