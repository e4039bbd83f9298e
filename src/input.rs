//! Terminal input to dashboard actions

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use crate::app::App;
use crate::calendar::Step;

/// What a key or click asks the dashboard to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    PreviousMonth,
    NextMonth,
    SelectLeft,
    SelectRight,
    SelectUp,
    SelectDown,
    OpenDay,
    ClosePopup,
    ToggleTheme,
    ToggleSidebar,
    ToggleMobileMenu,
    Click { x: u16, y: u16 },
}

/// Map a key press. While the popup is open only dismiss keys apply.
pub fn map_key(key: KeyEvent, popup_open: bool) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    if popup_open {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('q') => {
                Some(Action::ClosePopup)
            }
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('[') | KeyCode::PageUp | KeyCode::Char('p') => Action::PreviousMonth,
        KeyCode::Char(']') | KeyCode::PageDown | KeyCode::Char('n') => Action::NextMonth,
        KeyCode::Left | KeyCode::Char('h') => Action::SelectLeft,
        KeyCode::Right | KeyCode::Char('l') => Action::SelectRight,
        KeyCode::Up | KeyCode::Char('k') => Action::SelectUp,
        KeyCode::Down | KeyCode::Char('j') => Action::SelectDown,
        KeyCode::Enter | KeyCode::Char(' ') => Action::OpenDay,
        KeyCode::Char('t') => Action::ToggleTheme,
        KeyCode::Char('b') => Action::ToggleSidebar,
        KeyCode::Char('m') => Action::ToggleMobileMenu,
        _ => return None,
    };
    Some(action)
}

/// Map any terminal event
pub fn map_event(event: &Event, popup_open: bool) -> Option<Action> {
    match event {
        Event::Key(key) => map_key(*key, popup_open),
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            Some(Action::Click {
                x: mouse.column,
                y: mouse.row,
            })
        }
        _ => None,
    }
}

/// Apply an action. Returns false when the app should exit.
pub fn apply(app: &mut App, action: Action) -> bool {
    match action {
        Action::Quit => return false,
        Action::PreviousMonth => app.navigate(Step::Previous),
        Action::NextMonth => app.navigate(Step::Next),
        Action::SelectLeft => app.select_left(),
        Action::SelectRight => app.select_right(),
        Action::SelectUp => app.select_up(),
        Action::SelectDown => app.select_down(),
        Action::OpenDay => app.open_selected_day(),
        Action::ClosePopup => app.close_popup(),
        Action::ToggleTheme => app.toggle_theme(),
        Action::ToggleSidebar => app.toggle_sidebar(),
        Action::ToggleMobileMenu => app.toggle_mobile_menu(),
        Action::Click { x, y } => app.click(x, y),
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{MouseEvent, MouseEventKind};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_month_keys() {
        assert_eq!(map_key(press(KeyCode::Char('[')), false), Some(Action::PreviousMonth));
        assert_eq!(map_key(press(KeyCode::PageDown), false), Some(Action::NextMonth));
        assert_eq!(map_key(press(KeyCode::Char('n')), false), Some(Action::NextMonth));
    }

    #[test]
    fn test_popup_swallows_keys() {
        assert_eq!(map_key(press(KeyCode::Char('t')), true), None);
        assert_eq!(map_key(press(KeyCode::Esc), true), Some(Action::ClosePopup));
        assert_eq!(map_key(press(KeyCode::Esc), false), Some(Action::Quit));
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key, true), Some(Action::Quit));
        assert_eq!(map_key(key, false), Some(Action::Quit));
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key, false), None);
    }

    #[test]
    fn test_left_click() {
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(&event, false), Some(Action::Click { x: 12, y: 4 }));

        let scroll = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 12,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(&scroll, false), None);
    }
}
