use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState, PointerButtonEvent, PointerMoveEvent};

/// Current input state for the window.
///
/// Holds the set of held keys and the last known pointer position. Apps poll
/// it every frame through `FrameCtx::input`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Pointer position in logical pixels; `None` until the pointer moves
    /// inside the window and again after it leaves.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Folds an input event into the current state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::Focused(false) => {
                // Releases are not delivered while unfocused.
                self.keys_down.clear();
            }
            InputEvent::Focused(true) => {}

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    self.keys_down.insert(*key);
                }
                KeyState::Released => {
                    self.keys_down.remove(key);
                }
            },

            InputEvent::PointerButton(PointerButtonEvent { position, .. }) => {
                if let Some(pos) = position {
                    self.pointer_pos = Some(*pos);
                }
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{MouseButton, MouseButtonState};

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key, state, repeat: false }
    }

    fn button(state: MouseButtonState, position: Option<(f32, f32)>) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button: MouseButton::Left, state, position })
    }

    #[test]
    fn key_press_and_release_are_tracked() {
        let mut state = InputState::default();

        state.apply_event(&key(Key::C, KeyState::Pressed));
        assert!(state.key_down(Key::C));

        // Auto-repeat keeps the key held.
        state.apply_event(&key(Key::C, KeyState::Pressed));
        assert!(state.key_down(Key::C));

        state.apply_event(&key(Key::C, KeyState::Released));
        assert!(!state.key_down(Key::C));
    }

    #[test]
    fn button_event_updates_pointer_position() {
        let mut state = InputState::default();

        state.apply_event(&button(MouseButtonState::Pressed, Some((12.0, 34.0))));
        assert_eq!(state.pointer_pos, Some((12.0, 34.0)));
    }

    #[test]
    fn button_without_position_keeps_it_unknown() {
        let mut state = InputState::default();

        state.apply_event(&button(MouseButtonState::Pressed, None));
        assert_eq!(state.pointer_pos, None);
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut state = InputState::default();

        state.apply_event(&key(Key::Digit2, KeyState::Pressed));
        state.apply_event(&InputEvent::Focused(false));

        assert!(state.keys_down.is_empty());
    }

    #[test]
    fn pointer_left_forgets_position() {
        let mut state = InputState::default();

        state.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 1.0, y: 2.0 }));
        assert_eq!(state.pointer_pos, Some((1.0, 2.0)));
        state.apply_event(&InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
    }
}
