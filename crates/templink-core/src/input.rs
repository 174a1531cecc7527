//! Keyboard modifier tracking for selection and resize behavior.

use serde::{Deserialize, Serialize};

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Keyboard event type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
}

/// Tracks the modifier keys the host window forwards to the designer.
///
/// This is a plain value owned by the view rather than a global listener:
/// when the view is torn down the context is dropped with it, so there are
/// no handlers to unregister and nothing leaks across remounts.
#[derive(Debug, Clone, Default)]
pub struct InputContext {
    modifiers: Modifiers,
}

impl InputContext {
    /// Create a context with no modifiers held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a key event from the host window.
    ///
    /// Mirrors the held state of the shift key: any key-down carrying the
    /// shift modifier sets the flag, and releasing the shift key itself
    /// clears it.
    pub fn handle_key_event(&mut self, event: &KeyEvent, modifiers: Modifiers) {
        match event {
            KeyEvent::Pressed(_) => {
                if modifiers.shift {
                    self.modifiers.shift = true;
                }
            }
            KeyEvent::Released(key) => {
                if key == "Shift" {
                    self.modifiers.shift = false;
                }
            }
        }
        self.modifiers.ctrl = modifiers.ctrl;
        self.modifiers.alt = modifiers.alt;
        self.modifiers.meta = modifiers.meta;
    }

    /// Current modifier state.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Whether a new selection gesture adds to the active set (shift held)
    /// instead of replacing it.
    pub fn continue_select(&self) -> bool {
        self.modifiers.shift
    }

    /// Whether resizes should keep the aspect ratio (shift held).
    pub fn keep_ratio(&self) -> bool {
        self.modifiers.shift
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift() -> Modifiers {
        Modifiers {
            shift: true,
            ..Modifiers::default()
        }
    }

    #[test]
    fn test_shift_tracked_across_events() {
        let mut input = InputContext::new();
        assert!(!input.continue_select());

        input.handle_key_event(&KeyEvent::Pressed("Shift".to_string()), shift());
        assert!(input.continue_select());
        assert!(input.keep_ratio());

        // Releasing another key keeps shift held.
        input.handle_key_event(&KeyEvent::Released("a".to_string()), shift());
        assert!(input.continue_select());

        input.handle_key_event(&KeyEvent::Released("Shift".to_string()), Modifiers::default());
        assert!(!input.continue_select());
        assert!(!input.keep_ratio());
    }

    #[test]
    fn test_shifted_letter_press_sets_flag() {
        // A key-down for any key with the shift modifier held counts.
        let mut input = InputContext::new();
        input.handle_key_event(&KeyEvent::Pressed("A".to_string()), shift());
        assert!(input.continue_select());
    }
}
