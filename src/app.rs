use chrono::{Datelike, NaiveDateTime};
use ratatui::layout::{Position, Rect};

use crate::calendar::{self, MonthCursor, MonthGrid, Step};
use crate::clock::Clock;
use crate::config::Config;
use crate::greeting::{self, Greeting};
use crate::holidays::HolidayTable;
use crate::locale;
use crate::preferences::{self, PreferenceStore, ThemeMode};
use crate::ui::layout::{self, SidebarPlacement};
use crate::ui::theme::Theme;

/// Something on screen that reacts to a left click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    PreviousMonth,
    NextMonth,
    Day(u32),
    ThemeSwitch,
    SidebarToggle,
    MobileMenu,
}

/// Clickable regions recorded during the last draw
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, ClickTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, area: Rect, target: ClickTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Topmost target under a position (later registrations win)
    pub fn target_at(&self, x: u16, y: u16) -> Option<ClickTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(Position { x, y }))
            .map(|&(_, target)| target)
    }
}

/// Contents of the day-detail popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayDetail {
    pub heading: String,
    pub body: String,
    pub is_holiday: bool,
}

/// Application state
pub struct App {
    config: Config,
    holidays: HolidayTable,
    clock: Box<dyn Clock>,
    prefs: Box<dyn PreferenceStore>,
    /// Last clock reading
    now: NaiveDateTime,
    /// Month being shown
    cursor: MonthCursor,
    /// Grid for `cursor`, re-rendered on navigation and date change
    grid: MonthGrid,
    /// Selected day in the shown month
    selected_day: u32,
    greeting: Greeting,
    theme_mode: ThemeMode,
    theme: Theme,
    sidebar_collapsed: bool,
    mobile_open: bool,
    popup: Option<DayDetail>,
    hits: HitMap,
    /// Terminal width seen at the last draw
    width: u16,
}

impl App {
    pub fn new(
        config: Config,
        holidays: HolidayTable,
        clock: Box<dyn Clock>,
        prefs: Box<dyn PreferenceStore>,
        start: Option<MonthCursor>,
        theme_override: Option<ThemeMode>,
    ) -> Self {
        let now = clock.now();
        let today = now.date();
        let cursor = start.unwrap_or_else(|| MonthCursor::containing(today));
        let grid = calendar::render(cursor, &holidays, today);
        let selected_day = if cursor.contains(today) { today.day() } else { 1 };

        let theme_mode = theme_override.unwrap_or_else(|| {
            preferences::load_theme(prefs.as_ref(), config.appearance.default_theme)
        });
        let theme = config.resolve_theme(theme_mode);
        let greeting = greeting::resolve_at(now, &holidays);
        let sidebar_collapsed = config.appearance.sidebar_collapsed;

        Self {
            config,
            holidays,
            clock,
            prefs,
            now,
            cursor,
            grid,
            selected_day,
            greeting,
            theme_mode,
            theme,
            sidebar_collapsed,
            mobile_open: false,
            popup: None,
            hits: HitMap::default(),
            width: u16::MAX,
        }
    }

    /// 1 Hz tick: read the clock, re-render the grid when the date rolls over.
    pub fn tick_clock(&mut self) {
        let previous = self.now.date();
        self.now = self.clock.now();
        if self.now.date() != previous {
            tracing::debug!("Date changed to {}", self.now.date());
            self.rerender();
        }
    }

    /// Periodic greeting refresh
    pub fn refresh_greeting(&mut self) {
        let greeting = greeting::resolve_at(self.now, &self.holidays);
        if greeting != self.greeting {
            tracing::debug!("Greeting changed: {}", greeting);
        }
        self.greeting = greeting;
    }

    fn rerender(&mut self) {
        self.grid = calendar::render(self.cursor, &self.holidays, self.now.date());
    }

    /// Move to the previous or next month and re-render.
    pub fn navigate(&mut self, step: Step) {
        if !self.cursor.navigate(step) {
            tracing::warn!("Cannot move past {}", self.cursor);
            return;
        }
        self.selected_day = self.selected_day.min(self.cursor.days_in_month());
        self.rerender();
        tracing::debug!("Showing {}", self.cursor);
    }

    pub fn select_day(&mut self, day: u32) {
        if self.grid.cell_for_day(day).is_some() {
            self.selected_day = day;
        }
    }

    pub fn select_left(&mut self) {
        self.selected_day = layout::move_left(self.selected_day);
    }

    pub fn select_right(&mut self) {
        self.selected_day = layout::move_right(self.selected_day, self.grid.days_in_month());
    }

    pub fn select_up(&mut self) {
        self.selected_day = layout::move_up(self.selected_day);
    }

    pub fn select_down(&mut self) {
        self.selected_day = layout::move_down(self.selected_day, self.grid.days_in_month());
    }

    /// Holiday details for a day of the shown month
    pub fn day_detail(&self, day: u32) -> DayDetail {
        let (year, month) = (self.cursor.year(), self.cursor.month());
        let holiday = self.holidays.lookup(year, month, day);
        DayDetail {
            heading: locale::day_heading(day, month, year),
            body: holiday.unwrap_or(locale::NO_EVENTS).to_string(),
            is_holiday: holiday.is_some(),
        }
    }

    /// Open the popup for the selected day
    pub fn open_selected_day(&mut self) {
        self.popup = Some(self.day_detail(self.selected_day));
    }

    pub fn close_popup(&mut self) {
        self.popup = None;
    }

    pub fn popup(&self) -> Option<&DayDetail> {
        self.popup.as_ref()
    }

    /// Flip light/dark and persist the choice.
    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        self.theme = self.config.resolve_theme(self.theme_mode);
        tracing::info!("Theme set to {}", self.theme_mode);
        if let Err(e) = preferences::save_theme(self.prefs.as_mut(), self.theme_mode) {
            tracing::warn!("Failed to save theme preference: {:#}", e);
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    /// Dispatch a left click at a screen position.
    pub fn click(&mut self, x: u16, y: u16) {
        if self.popup.is_some() {
            self.close_popup();
            return;
        }
        let Some(target) = self.hits.target_at(x, y) else {
            return;
        };
        tracing::debug!("Click on {:?}", target);
        match target {
            ClickTarget::PreviousMonth => self.navigate(Step::Previous),
            ClickTarget::NextMonth => self.navigate(Step::Next),
            ClickTarget::Day(day) => {
                self.select_day(day);
                self.open_selected_day();
            }
            ClickTarget::ThemeSwitch => self.toggle_theme(),
            ClickTarget::SidebarToggle => self.toggle_sidebar(),
            ClickTarget::MobileMenu => self.toggle_mobile_menu(),
        }
    }

    pub fn sidebar_placement(&self) -> SidebarPlacement {
        SidebarPlacement::resolve(
            self.width,
            self.config.appearance.narrow_width,
            self.sidebar_collapsed,
            self.mobile_open,
        )
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    pub fn is_narrow(&self) -> bool {
        self.width < self.config.appearance.narrow_width
    }

    pub fn hits_mut(&mut self) -> &mut HitMap {
        &mut self.hits
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub fn selected_day(&self) -> u32 {
        self.selected_day
    }

    pub fn greeting(&self) -> &Greeting {
        &self.greeting
    }

    pub fn holidays(&self) -> &HolidayTable {
        &self.holidays
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::preferences::MemoryPreferences;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn app_at(now: NaiveDateTime) -> (App, FixedClock) {
        let clock = FixedClock::at(now);
        let app = App::new(
            Config::default(),
            HolidayTable::builtin(),
            Box::new(clock.clone()),
            Box::new(MemoryPreferences::default()),
            None,
            None,
        );
        (app, clock)
    }

    #[test]
    fn test_starts_on_current_month() {
        let (app, _) = app_at(at(2024, 8, 17, 9));
        assert_eq!((app.cursor().year(), app.cursor().month()), (2024, 7));
        assert_eq!(app.selected_day(), 17);
        assert!(app.grid().cell_for_day(17).unwrap().is_today());
        assert_eq!(app.greeting().to_string(), "🎉 Hari Kemerdekaan RI 🎉");
    }

    #[test]
    fn test_navigation_rerenders() {
        let (mut app, _) = app_at(at(2024, 12, 31, 9));
        app.navigate(Step::Next);
        assert_eq!((app.cursor().year(), app.cursor().month()), (2025, 0));
        // 31 stays valid in January
        assert_eq!(app.selected_day(), 31);
        assert!(!app.grid().cells().iter().any(|c| c.is_today()));
        assert!(app.grid().cell_for_day(1).unwrap().is_holiday());

        app.navigate(Step::Next);
        assert_eq!(app.grid().days_in_month(), 28);
        assert_eq!(app.selected_day(), 28);
    }

    #[test]
    fn test_day_detail() {
        let (app, _) = app_at(at(2024, 1, 5, 9));
        let holiday = app.day_detail(1);
        assert_eq!(holiday.heading, "📅 1 Januari 2024");
        assert_eq!(holiday.body, "Tahun Baru 2024 Masehi");
        assert!(holiday.is_holiday);

        let plain = app.day_detail(2);
        assert_eq!(plain.body, "Tidak ada kegiatan khusus.");
        assert!(!plain.is_holiday);
    }

    #[test]
    fn test_greeting_refresh_follows_clock() {
        let (mut app, clock) = app_at(at(2024, 1, 2, 9));
        assert_eq!(app.greeting().to_string(), "Selamat pagi! Semangat untuk hari ini! 🌅");

        clock.set(at(2024, 1, 2, 19));
        app.tick_clock();
        app.refresh_greeting();
        assert_eq!(app.greeting().to_string(), "Selamat malam! Istirahat yang cukup! 🌙");
    }

    #[test]
    fn test_greeting_uses_todays_year_not_cursor() {
        let (mut app, _) = app_at(at(2024, 8, 17, 9));
        for _ in 0..12 {
            app.navigate(Step::Previous);
        }
        assert_eq!(app.cursor().to_string(), "2023-08");
        app.refresh_greeting();
        assert!(app.greeting().is_holiday());
    }

    #[test]
    fn test_date_rollover_moves_today() {
        let (mut app, clock) = app_at(at(2024, 3, 10, 23));
        clock.set(at(2024, 3, 11, 0));
        app.tick_clock();
        assert!(app.grid().cell_for_day(11).unwrap().is_today());
        assert!(!app.grid().cell_for_day(10).unwrap().is_today());
    }

    #[test]
    fn test_toggle_theme_persists() {
        let (mut app, _) = app_at(at(2024, 1, 2, 9));
        assert_eq!(app.theme_mode(), ThemeMode::Light);
        app.toggle_theme();
        assert_eq!(app.theme_mode(), ThemeMode::Dark);
        assert_eq!(
            preferences::load_theme(app.prefs.as_ref(), ThemeMode::Light),
            ThemeMode::Dark
        );
    }

    #[test]
    fn test_stored_theme_loaded() {
        let mut prefs = MemoryPreferences::default();
        preferences::save_theme(&mut prefs, ThemeMode::Dark).unwrap();
        let app = App::new(
            Config::default(),
            HolidayTable::builtin(),
            Box::new(FixedClock::at(at(2024, 1, 2, 9))),
            Box::new(prefs),
            None,
            None,
        );
        assert_eq!(app.theme_mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_session_theme_not_persisted() {
        let app = App::new(
            Config::default(),
            HolidayTable::builtin(),
            Box::new(FixedClock::at(at(2024, 1, 2, 9))),
            Box::new(MemoryPreferences::default()),
            None,
            Some(ThemeMode::Dark),
        );
        assert_eq!(app.theme_mode(), ThemeMode::Dark);
        assert_eq!(app.prefs.get("theme"), None);
    }

    #[test]
    fn test_select_day_outside_month_ignored() {
        let (mut app, _) = app_at(at(2024, 2, 10, 9));
        app.select_day(29);
        assert_eq!(app.selected_day(), 29);
        app.select_day(30);
        assert_eq!(app.selected_day(), 29);
        app.select_day(0);
        assert_eq!(app.selected_day(), 29);
    }

    #[test]
    fn test_click_dispatch() {
        let (mut app, _) = app_at(at(2024, 1, 2, 9));
        app.hits_mut().register(Rect::new(0, 0, 3, 1), ClickTarget::PreviousMonth);
        app.hits_mut().register(Rect::new(10, 5, 4, 1), ClickTarget::Day(17));

        app.click(1, 0);
        assert_eq!(app.cursor().month(), 11);

        app.click(11, 5);
        assert_eq!(app.selected_day(), 17);
        assert_eq!(app.popup().unwrap().heading, "📅 17 Desember 2023");

        // Any click dismisses the popup first
        app.click(1, 0);
        assert!(app.popup().is_none());
        assert_eq!(app.cursor().month(), 11);
    }

    #[test]
    fn test_selection_clamped() {
        let (mut app, _) = app_at(at(2024, 2, 29, 9));
        app.select_right();
        assert_eq!(app.selected_day(), 29);
        app.select_down();
        assert_eq!(app.selected_day(), 29);
        app.select_up();
        assert_eq!(app.selected_day(), 22);
        app.select_day(40);
        assert_eq!(app.selected_day(), 22);
    }

    #[test]
    fn test_sidebar_toggles() {
        let (mut app, _) = app_at(at(2024, 1, 2, 9));
        app.set_width(120);
        assert_eq!(app.sidebar_placement(), SidebarPlacement::Docked);
        app.toggle_sidebar();
        assert_eq!(app.sidebar_placement(), SidebarPlacement::Hidden);

        app.set_width(60);
        assert!(app.is_narrow());
        assert_eq!(app.sidebar_placement(), SidebarPlacement::Hidden);
        app.toggle_mobile_menu();
        assert_eq!(app.sidebar_placement(), SidebarPlacement::Overlay);
    }
}
