//! Grid layout for the calendar panel
//!
//! Provides:
//! - 7-column row-major cell placement
//! - Day selection movement (left/right/up/down, clamped to the month)
//! - Cell geometry
//! - Sidebar placement for wide and narrow terminals

use ratatui::layout::Rect;

use crate::calendar::WEEK_LEN;

/// Minimum cell width in characters (" 31")
const MIN_CELL_WIDTH: u16 = 3;

/// Calendar grid geometry within an area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarLayout {
    /// Area holding the day cells (weekday header excluded)
    pub area: Rect,
    pub cell_width: u16,
    pub cell_height: u16,
}

impl CalendarLayout {
    /// Fit `rows` rows of 7 cells into `area`.
    pub fn new(area: Rect, rows: usize) -> Self {
        let rows = rows.max(1) as u16;
        let cell_width = (area.width / WEEK_LEN as u16).max(MIN_CELL_WIDTH);
        let cell_height = (area.height / rows).clamp(1, 3);
        Self {
            area,
            cell_width,
            cell_height,
        }
    }

    /// Convert flat cell index to (row, col), row-major:
    /// ```text
    /// Index:  0  1  2  3  4  5  6
    ///         7  8  9 10 11 12 13
    /// ```
    pub fn index_to_position(index: usize) -> (u16, u16) {
        ((index / WEEK_LEN) as u16, (index % WEEK_LEN) as u16)
    }

    /// Screen rect of a cell, `None` if it falls outside the area
    pub fn cell_rect(&self, index: usize) -> Option<Rect> {
        let (row, col) = Self::index_to_position(index);
        let x = self.area.x + col * self.cell_width;
        let y = self.area.y + row * self.cell_height;
        if x + self.cell_width > self.area.x + self.area.width
            || y + self.cell_height > self.area.y + self.area.height
        {
            return None;
        }
        Some(Rect {
            x,
            y,
            width: self.cell_width,
            height: self.cell_height,
        })
    }
}

/// Day selection movement within a month of `days` days
pub fn move_left(day: u32) -> u32 {
    day.saturating_sub(1).max(1)
}

pub fn move_right(day: u32, days: u32) -> u32 {
    (day + 1).min(days)
}

/// One week back; stays put in the first week
pub fn move_up(day: u32) -> u32 {
    if day > WEEK_LEN as u32 {
        day - WEEK_LEN as u32
    } else {
        day
    }
}

/// One week forward; stays put in the last week
pub fn move_down(day: u32, days: u32) -> u32 {
    if day + WEEK_LEN as u32 <= days {
        day + WEEK_LEN as u32
    } else {
        day
    }
}

/// Where the sidebar goes for the current terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarPlacement {
    /// Side column next to the content
    Docked,
    /// Drawn over the content (narrow terminal with the menu open)
    Overlay,
    Hidden,
}

impl SidebarPlacement {
    pub fn resolve(width: u16, narrow_width: u16, collapsed: bool, mobile_open: bool) -> Self {
        if width < narrow_width {
            if mobile_open {
                SidebarPlacement::Overlay
            } else {
                SidebarPlacement::Hidden
            }
        } else if collapsed {
            SidebarPlacement::Hidden
        } else {
            SidebarPlacement::Docked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_to_position() {
        assert_eq!(CalendarLayout::index_to_position(0), (0, 0));
        assert_eq!(CalendarLayout::index_to_position(6), (0, 6));
        assert_eq!(CalendarLayout::index_to_position(7), (1, 0));
        assert_eq!(CalendarLayout::index_to_position(31), (4, 3));
    }

    #[test]
    fn test_cell_geometry() {
        let layout = CalendarLayout::new(Rect::new(10, 5, 28, 12), 6);
        assert_eq!(layout.cell_width, 4);
        assert_eq!(layout.cell_height, 2);

        assert_eq!(layout.cell_rect(0), Some(Rect::new(10, 5, 4, 2)));
        assert_eq!(layout.cell_rect(8), Some(Rect::new(14, 7, 4, 2)));
        assert_eq!(layout.cell_rect(42), None);
    }

    #[test]
    fn test_day_movement() {
        assert_eq!(move_left(1), 1);
        assert_eq!(move_left(10), 9);
        assert_eq!(move_right(31, 31), 31);
        assert_eq!(move_right(30, 31), 31);
        assert_eq!(move_up(5), 5);
        assert_eq!(move_up(12), 5);
        assert_eq!(move_down(24, 31), 31);
        assert_eq!(move_down(25, 31), 25);
    }

    #[test]
    fn test_sidebar_placement() {
        use SidebarPlacement::*;
        assert_eq!(SidebarPlacement::resolve(120, 80, false, false), Docked);
        assert_eq!(SidebarPlacement::resolve(120, 80, true, false), Hidden);
        assert_eq!(SidebarPlacement::resolve(60, 80, false, false), Hidden);
        assert_eq!(SidebarPlacement::resolve(60, 80, false, true), Overlay);
    }
}
