//! Event handling for the TUI.

use std::borrow::Cow;
use std::io;

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent, KeyModifiers,
};
use crossterm::execute;
use futures::StreamExt;

use slidedeck_core::{NavIntent, direction_from_key};

/// Key action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// One of the four navigation keys.
    Navigate(NavIntent),
    JumpToFirst,
    JumpToLast,

    // Slide number entry
    /// Append a digit to the pending slide number.
    JumpDigit(u8),
    /// Go to the pending slide number.
    ConfirmJump,
    /// Remove the last pending digit.
    JumpBackspace,

    // UI toggles
    ToggleHelp,
    ToggleTheme,
    TogglePicker,

    Cancel,
    Quit,
    ForceQuit,

    // No action
    None,
}

impl KeyAction {
    /// Convert a key event to an action.
    ///
    /// Navigation keys are resolved by name through [`direction_from_key`];
    /// every key it ignores falls through to the app bindings below.
    pub fn from_key_event(event: KeyEvent) -> Self {
        let plain = !event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        if plain {
            if let Some(name) = key_name(event.code) {
                let intent = direction_from_key(&name);
                if intent.is_navigation() {
                    return KeyAction::Navigate(intent);
                }
            }
        }

        match (event.code, event.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::ForceQuit,

            (KeyCode::Esc, _) => KeyAction::Cancel,

            // Jump
            (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::JumpToFirst,
            (KeyCode::Char('G'), KeyModifiers::SHIFT) => KeyAction::JumpToLast,
            (KeyCode::Char('G'), KeyModifiers::NONE) => KeyAction::JumpToLast,
            (KeyCode::Home, _) => KeyAction::JumpToFirst,
            (KeyCode::End, _) => KeyAction::JumpToLast,

            // Slide number entry
            (KeyCode::Char(c @ '0'..='9'), KeyModifiers::NONE) => {
                KeyAction::JumpDigit(c as u8 - b'0')
            }
            (KeyCode::Enter, _) => KeyAction::ConfirmJump,
            (KeyCode::Backspace, _) => KeyAction::JumpBackspace,

            // UI toggles
            (KeyCode::Char('?'), _) => KeyAction::ToggleHelp,
            (KeyCode::Char('t'), KeyModifiers::NONE) => KeyAction::ToggleTheme,
            (KeyCode::Char('p'), KeyModifiers::NONE) => KeyAction::TogglePicker,

            _ => KeyAction::None,
        }
    }
}

/// DOM-style name for a terminal key code.
///
/// Character keys are named by the character itself, matching the
/// browser's `KeyboardEvent.key`.
pub fn key_name(code: KeyCode) -> Option<Cow<'static, str>> {
    let name = match code {
        KeyCode::Right => "ArrowRight",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::Enter => "Enter",
        KeyCode::Esc => "Escape",
        KeyCode::Tab | KeyCode::BackTab => "Tab",
        KeyCode::Backspace => "Backspace",
        KeyCode::Delete => "Delete",
        KeyCode::Insert => "Insert",
        KeyCode::Char(c) => return Some(Cow::Owned(c.to_string())),
        KeyCode::F(n) => return Some(Cow::Owned(format!("F{n}"))),
        _ => return None,
    };
    Some(Cow::Borrowed(name))
}

/// Scoped registration of the terminal input listener.
///
/// Attaching enables mouse capture (when requested) and opens the event
/// stream. Dropping the listener disables mouse capture again, so events
/// stop being delivered once the presentation is no longer active.
pub struct KeyListener {
    events: EventStream,
    mouse: bool,
}

impl KeyListener {
    /// Start listening for terminal input.
    pub fn attach(mouse: bool) -> io::Result<Self> {
        if mouse {
            execute!(io::stdout(), EnableMouseCapture)?;
        }
        tracing::info!(mouse, "input listener attached");
        Ok(Self {
            events: EventStream::new(),
            mouse,
        })
    }

    /// Next terminal event, or `None` once the stream is closed.
    pub async fn next(&mut self) -> Option<io::Result<Event>> {
        self.events.next().await
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        if self.mouse {
            if let Err(err) = execute!(io::stdout(), DisableMouseCapture) {
                tracing::warn!(%err, "failed to disable mouse capture");
            }
        }
        tracing::info!("input listener detached");
    }
}

/// A section of key bindings for the help display.
pub struct HelpSection {
    pub title: &'static str,
    pub bindings: Vec<KeyBinding>,
}

/// Key binding for display in help.
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Get all key bindings organized by section for help display.
pub fn get_help_sections() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "Navigation",
            bindings: vec![
                KeyBinding { keys: "→ PgDn", description: "Next slide" },
                KeyBinding { keys: "← PgUp", description: "Previous slide" },
                KeyBinding { keys: "g/Home", description: "First slide" },
                KeyBinding { keys: "G/End", description: "Last slide" },
                KeyBinding { keys: "0-9 Enter", description: "Go to slide number" },
            ],
        },
        HelpSection {
            title: "Mouse",
            bindings: vec![
                KeyBinding { keys: "Prev/Next", description: "Click to move one slide" },
                KeyBinding { keys: "Picker", description: "Click a chip to jump" },
                KeyBinding { keys: "Wheel", description: "Scroll through slides" },
            ],
        },
        HelpSection {
            title: "Display",
            bindings: vec![
                KeyBinding { keys: "p", description: "Toggle slide picker" },
                KeyBinding { keys: "t", description: "Toggle dark/light theme" },
                KeyBinding { keys: "?", description: "Show this help" },
                KeyBinding { keys: "Esc", description: "Close help / clear input" },
                KeyBinding { keys: "q", description: "Quit" },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn action(code: KeyCode) -> KeyAction {
        KeyAction::from_key_event(key_event(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(action(KeyCode::Right), KeyAction::Navigate(NavIntent::Next));
        assert_eq!(action(KeyCode::PageDown), KeyAction::Navigate(NavIntent::Next));
        assert_eq!(action(KeyCode::Left), KeyAction::Navigate(NavIntent::Prev));
        assert_eq!(action(KeyCode::PageUp), KeyAction::Navigate(NavIntent::Prev));
    }

    #[test]
    fn test_non_navigation_keys_fall_through() {
        assert_eq!(action(KeyCode::Up), KeyAction::None);
        assert_eq!(action(KeyCode::Down), KeyAction::None);
        assert_eq!(action(KeyCode::Enter), KeyAction::ConfirmJump);
        assert_eq!(action(KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(action(KeyCode::Char('7')), KeyAction::JumpDigit(7));
        assert_eq!(action(KeyCode::Char('x')), KeyAction::None);
    }

    #[test]
    fn test_modified_arrows_are_not_navigation() {
        let event = key_event(KeyCode::Right, KeyModifiers::CONTROL);
        assert_eq!(KeyAction::from_key_event(event), KeyAction::None);

        let event = key_event(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyAction::from_key_event(event), KeyAction::ForceQuit);
    }

    #[test]
    fn test_shift_arrow_still_navigates() {
        let event = key_event(KeyCode::Right, KeyModifiers::SHIFT);
        assert_eq!(
            KeyAction::from_key_event(event),
            KeyAction::Navigate(NavIntent::Next)
        );
    }

    #[test]
    fn test_key_names() {
        assert_eq!(key_name(KeyCode::Right).as_deref(), Some("ArrowRight"));
        assert_eq!(key_name(KeyCode::PageUp).as_deref(), Some("PageUp"));
        assert_eq!(key_name(KeyCode::Enter).as_deref(), Some("Enter"));
        assert_eq!(key_name(KeyCode::Char('a')).as_deref(), Some("a"));
        assert_eq!(key_name(KeyCode::F(5)).as_deref(), Some("F5"));
        assert_eq!(key_name(KeyCode::Null), None);
    }

    #[test]
    fn test_help_sections_cover_navigation() {
        let sections = get_help_sections();
        assert!(sections.iter().any(|s| s.title == "Navigation"));
        assert!(sections.iter().all(|s| !s.bindings.is_empty()));
    }
}
