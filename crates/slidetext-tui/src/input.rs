use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    ToggleSliding,  // Space: start or stop the selected marquee
    StartAll,       // 'a': start every marquee
    Restart,        // 'r': restart the selected marquee
    CycleText,      // 's': swap content of the selected marquee
    Faster,
    Slower,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Selection
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::MoveUp,

        // Lifecycle
        (KeyCode::Char(' '), _) | (KeyCode::Enter, _) => Action::ToggleSliding,
        (KeyCode::Char('a'), KeyModifiers::NONE) => Action::StartAll,
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::Restart,
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::CycleText,

        // Speed ('+' arrives with SHIFT on most layouts)
        (KeyCode::Char('+'), _) | (KeyCode::Char('='), KeyModifiers::NONE) => Action::Faster,
        (KeyCode::Char('-'), KeyModifiers::NONE) => Action::Slower,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_bindings() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(handle_key_event(key(KeyCode::Char(' '))), Action::ToggleSliding);
        assert_eq!(handle_key_event(key(KeyCode::Down)), Action::MoveDown);
        assert_eq!(handle_key_event(key(KeyCode::Char('r'))), Action::Restart);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT)),
            Action::Faster
        );
        assert_eq!(handle_key_event(key(KeyCode::Char('-'))), Action::Slower);
        assert_eq!(handle_key_event(key(KeyCode::Char('x'))), Action::None);
    }
}
