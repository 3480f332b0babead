//! Input handling
//!
//! Raw events from whatever window layer is in use are folded into one
//! `TickInput` per tick. Arrow keys act on release; buttons act on press.

use glam::Vec2;

use crate::sim::{Command, Steer, TickInput};
use crate::ui::{Button, hit_test};

/// Keyboard keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Other,
}

/// A raw event from the window layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    MouseMoved(Vec2),
    MouseDown(Vec2),
}

impl Key {
    fn steer(self) -> Option<Steer> {
        match self {
            Key::Left => Some(Steer::Left),
            Key::Right => Some(Steer::Right),
            Key::Up => Some(Steer::OrbitOut),
            Key::Down => Some(Steer::OrbitIn),
            Key::Other => None,
        }
    }
}

/// Input state that persists between ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Last known pointer position
    pub pointer: Option<Vec2>,
    pub idle_mode: bool,
}

impl InputState {
    pub fn new(idle_mode: bool) -> Self {
        Self {
            pointer: None,
            idle_mode,
        }
    }

    /// Fold this tick's events into a `TickInput`
    pub fn collect(&mut self, events: &[InputEvent], buttons: &[Button]) -> TickInput {
        let mut input = TickInput {
            idle_mode: self.idle_mode,
            ..Default::default()
        };

        for event in events {
            match *event {
                InputEvent::Quit => input.quit = true,
                InputEvent::KeyUp(key) => {
                    if let Some(steer) = key.steer() {
                        input.steer.push(steer);
                    }
                }
                InputEvent::KeyDown(_) => {}
                InputEvent::MouseMoved(pos) => self.pointer = Some(pos),
                InputEvent::MouseDown(pos) => {
                    self.pointer = Some(pos);
                    if input.command.is_none() {
                        input.command = hit_test(buttons, pos).map(|b| b.action);
                    }
                }
            }
        }

        if let Some(command) = input.command {
            log::debug!("Button pressed: {:?}", command);
        }
        input
    }

    /// Button currently under the pointer, for hover highlighting
    pub fn hovered(&self, buttons: &[Button]) -> Option<Command> {
        self.pointer
            .and_then(|p| hit_test(buttons, p))
            .map(|b| b.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::button_layout;

    #[test]
    fn test_keys_act_on_release() {
        let mut state = InputState::default();
        let events = [
            InputEvent::KeyDown(Key::Left),
            InputEvent::KeyUp(Key::Left),
            InputEvent::KeyDown(Key::Up),
            InputEvent::KeyUp(Key::Up),
            InputEvent::KeyUp(Key::Other),
            InputEvent::KeyUp(Key::Down),
        ];
        let input = state.collect(&events, &[]);
        assert_eq!(input.steer, vec![Steer::Left, Steer::OrbitOut, Steer::OrbitIn]);
        assert!(!input.quit);
        assert_eq!(input.command, None);
    }

    #[test]
    fn test_quit_event() {
        let mut state = InputState::default();
        let input = state.collect(&[InputEvent::Quit], &[]);
        assert!(input.quit);
    }

    #[test]
    fn test_click_on_button() {
        let buttons = button_layout(800);
        let mut state = InputState::default();
        let input = state.collect(&[InputEvent::MouseDown(Vec2::new(700.0, 60.0))], &buttons);
        assert_eq!(input.command, Some(Command::NextLevel));

        let input = state.collect(&[InputEvent::MouseDown(Vec2::new(10.0, 10.0))], &buttons);
        assert_eq!(input.command, None);
    }

    #[test]
    fn test_first_click_wins() {
        let buttons = button_layout(800);
        let mut state = InputState::default();
        let events = [
            InputEvent::MouseDown(Vec2::new(700.0, 20.0)),
            InputEvent::MouseDown(Vec2::new(700.0, 100.0)),
        ];
        assert_eq!(state.collect(&events, &buttons).command, Some(Command::NewGame));
    }

    #[test]
    fn test_hover_tracks_pointer() {
        let buttons = button_layout(800);
        let mut state = InputState::new(true);
        assert_eq!(state.hovered(&buttons), None);

        let input = state.collect(&[InputEvent::MouseMoved(Vec2::new(700.0, 100.0))], &buttons);
        assert!(input.idle_mode);
        assert_eq!(input.command, None);
        assert_eq!(state.hovered(&buttons), Some(Command::Quit));
    }
}
