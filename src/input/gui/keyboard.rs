use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::controllers::mosaic::ports::key_source::KeySource;
use crate::core::view::ViewKey;

/// Held state of the view keys, fed from winit key events.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardState {
    left_held: bool,
    right_held: bool,
    up_held: bool,
    down_held: bool,
    page_up_held: bool,
    page_down_held: bool,
    home_held: bool,
    end_held: bool,
}

impl KeyboardState {
    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match key_code {
            KeyCode::ArrowLeft => self.left_held = pressed,
            KeyCode::ArrowRight => self.right_held = pressed,
            KeyCode::ArrowUp => self.up_held = pressed,
            KeyCode::ArrowDown => self.down_held = pressed,
            KeyCode::PageUp => self.page_up_held = pressed,
            KeyCode::PageDown => self.page_down_held = pressed,
            KeyCode::Home => self.home_held = pressed,
            KeyCode::End => self.end_held = pressed,
            _ => {}
        }
    }

    /// Releases everything, e.g. when the window loses focus.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl KeySource for KeyboardState {
    fn is_down(&self, key: ViewKey) -> bool {
        match key {
            ViewKey::PanLeft => self.left_held,
            ViewKey::PanRight => self.right_held,
            ViewKey::PanUp => self.up_held,
            ViewKey::PanDown => self.down_held,
            ViewKey::ZoomIn => self.page_up_held,
            ViewKey::ZoomOut => self.page_down_held,
            ViewKey::IterationsUp => self.home_held,
            ViewKey::IterationsDown => self.end_held,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::KeyboardState;
    use crate::controllers::mosaic::ports::key_source::KeySource;
    use crate::core::view::ViewKey;
    use winit::{event::ElementState, keyboard::KeyCode};

    #[test]
    fn press_and_release_updates_held_keys() {
        let mut keyboard = KeyboardState::default();

        keyboard.handle_key_event(KeyCode::ArrowLeft, ElementState::Pressed);
        keyboard.handle_key_event(KeyCode::PageUp, ElementState::Pressed);
        keyboard.handle_key_event(KeyCode::Home, ElementState::Pressed);

        assert!(keyboard.is_down(ViewKey::PanLeft));
        assert!(keyboard.is_down(ViewKey::ZoomIn));
        assert!(keyboard.is_down(ViewKey::IterationsUp));
        assert!(!keyboard.is_down(ViewKey::PanRight));

        keyboard.handle_key_event(KeyCode::ArrowLeft, ElementState::Released);

        assert!(!keyboard.is_down(ViewKey::PanLeft));
        assert!(keyboard.is_down(ViewKey::ZoomIn));
    }

    #[test]
    fn every_view_key_has_a_binding() {
        let mut keyboard = KeyboardState::default();

        for key_code in [
            KeyCode::ArrowLeft,
            KeyCode::ArrowRight,
            KeyCode::ArrowUp,
            KeyCode::ArrowDown,
            KeyCode::PageUp,
            KeyCode::PageDown,
            KeyCode::Home,
            KeyCode::End,
        ] {
            keyboard.handle_key_event(key_code, ElementState::Pressed);
        }

        assert!(ViewKey::ALL.iter().all(|&key| keyboard.is_down(key)));
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let mut keyboard = KeyboardState::default();

        keyboard.handle_key_event(KeyCode::KeyW, ElementState::Pressed);

        assert_eq!(keyboard, KeyboardState::default());
    }

    #[test]
    fn reset_releases_everything() {
        let mut keyboard = KeyboardState::default();
        keyboard.handle_key_event(KeyCode::End, ElementState::Pressed);

        keyboard.reset();

        assert!(keyboard.snapshot().is_idle());
    }
}
