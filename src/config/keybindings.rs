//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Arrow keys pan, with vim-style `h`/`j`/`k`/`l` as aliases.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only presses are bound; releases and repeats (reported on some
    /// platforms) yield `None`, as does any key without a binding.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };

        // Arrow key panning
        bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::PanUp);
        bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::PanDown);
        bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::PanLeft);
        bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::PanRight);

        // Vim-style panning
        bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::PanUp);
        bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::PanDown);
        bind(KeyCode::Char('h'), KeyModifiers::NONE, KeyAction::PanLeft);
        bind(KeyCode::Char('l'), KeyModifiers::NONE, KeyAction::PanRight);

        // Zoom
        bind(KeyCode::Char('z'), KeyModifiers::NONE, KeyAction::ZoomIn);
        bind(KeyCode::Char('x'), KeyModifiers::NONE, KeyAction::ZoomOut);

        bind(KeyCode::Char('c'), KeyModifiers::NONE, KeyAction::ToggleColor);

        // Quit
        bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        Self { bindings }
    }
}
