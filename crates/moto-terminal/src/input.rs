// ABOUTME: Conversion of crossterm events into canonical key strings.
// ABOUTME: Key strings are what the configured key bindings are written in.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::TerminalError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key press such as `"tab"`, `"ctrl+c"` or `"E"`
    Key(String),
    Resize(u16, u16),
}

/// Wait up to `timeout` for the next terminal event and convert it.
/// Returns `Ok(None)` on timeout and for events the UI does not use.
pub fn read_input(timeout: Duration) -> Result<Option<InputEvent>, TerminalError> {
    if !event::poll(timeout).map_err(TerminalError::ReadError)? {
        return Ok(None);
    }
    let event = event::read().map_err(TerminalError::ReadError)?;
    Ok(to_input(event))
}

pub fn to_input(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => key_name(key).map(InputEvent::Key),
        Event::Resize(columns, rows) => Some(InputEvent::Resize(columns, rows)),
        _ => None,
    }
}

fn key_name(key: KeyEvent) -> Option<String> {
    let name = match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(format!("ctrl+{}", c.to_ascii_lowercase()));
        }
        KeyCode::Char(c) => return Some(c.to_string()),
        KeyCode::F(n) => return Some(format!("f{n}")),
        KeyCode::Tab => "tab",
        KeyCode::BackTab => "shift+tab",
        KeyCode::Enter => "enter",
        KeyCode::Esc => "esc",
        KeyCode::Backspace => "backspace",
        KeyCode::Up => "up",
        KeyCode::Down => "down",
        KeyCode::Left => "left",
        KeyCode::Right => "right",
        _ => return None,
    };
    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Option<InputEvent> {
        to_input(Event::Key(KeyEvent::new(code, modifiers)))
    }

    fn key(name: &str) -> Option<InputEvent> {
        Some(InputEvent::Key(name.to_string()))
    }

    #[test]
    fn plain_characters_keep_their_case() {
        assert_eq!(press(KeyCode::Char('E'), KeyModifiers::SHIFT), key("E"));
        assert_eq!(press(KeyCode::Char('<'), KeyModifiers::SHIFT), key("<"));
        assert_eq!(press(KeyCode::Char('-'), KeyModifiers::NONE), key("-"));
    }

    #[test]
    fn control_chords_are_prefixed() {
        assert_eq!(press(KeyCode::Char('c'), KeyModifiers::CONTROL), key("ctrl+c"));
        assert_eq!(press(KeyCode::Char('C'), KeyModifiers::CONTROL), key("ctrl+c"));
    }

    #[test]
    fn named_keys() {
        assert_eq!(press(KeyCode::Tab, KeyModifiers::NONE), key("tab"));
        assert_eq!(press(KeyCode::Esc, KeyModifiers::NONE), key("esc"));
        assert_eq!(press(KeyCode::F(5), KeyModifiers::NONE), key("f5"));
        assert_eq!(press(KeyCode::Home, KeyModifiers::NONE), None);
    }

    #[test]
    fn key_releases_are_dropped() {
        let release = KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(to_input(Event::Key(release)), None);
    }

    #[test]
    fn resize_and_focus_events() {
        assert_eq!(
            to_input(Event::Resize(120, 40)),
            Some(InputEvent::Resize(120, 40))
        );
        assert_eq!(to_input(Event::FocusGained), None);
    }
}
