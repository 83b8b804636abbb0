use std::collections::VecDeque;

use bitflags::bitflags;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use crate::world::BlockType;

bitflags! {
    /// Movement keys currently held down.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct MoveKeys: u8 {
        const FORWARD = 1 << 0;
        const BACK = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const JUMP = 1 << 4;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClickButton {
    /// Primary button.
    Break,
    /// Secondary button.
    Place,
}

/// Discrete input, handled once each in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Click(ClickButton),
    /// Zero-based hotbar slot.
    SelectSlot(usize),
}

/// Input sampled by the frame loop: held keys plus queued discrete events.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    pub keys: MoveKeys,
    events: VecDeque<InputEvent>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        let flag = match key {
            KeyCode::KeyW | KeyCode::ArrowUp => MoveKeys::FORWARD,
            KeyCode::KeyS | KeyCode::ArrowDown => MoveKeys::BACK,
            KeyCode::KeyA | KeyCode::ArrowLeft => MoveKeys::LEFT,
            KeyCode::KeyD | KeyCode::ArrowRight => MoveKeys::RIGHT,
            KeyCode::Space => MoveKeys::JUMP,
            _ => {
                if pressed {
                    if let Some(slot) = Self::slot_for(key) {
                        self.push_event(InputEvent::SelectSlot(slot));
                    }
                }
                return;
            }
        };
        self.keys.set(flag, pressed);
    }

    pub fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if !pressed {
            return;
        }
        match button {
            MouseButton::Left => self.push_event(InputEvent::Click(ClickButton::Break)),
            MouseButton::Right => self.push_event(InputEvent::Click(ClickButton::Place)),
            _ => {}
        }
    }

    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Removes and returns every queued event, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    pub fn is_held(&self, keys: MoveKeys) -> bool {
        self.keys.contains(keys)
    }

    pub fn jump(&self) -> bool {
        self.keys.contains(MoveKeys::JUMP)
    }

    /// Raw (right, forward) axes in `{-1, 0, 1}`, not normalized.
    pub fn move_axes(&self) -> Vec2 {
        let axis = |pos: MoveKeys, neg: MoveKeys| {
            self.keys.contains(pos) as i8 as f32 - self.keys.contains(neg) as i8 as f32
        };
        Vec2::new(
            axis(MoveKeys::RIGHT, MoveKeys::LEFT),
            axis(MoveKeys::FORWARD, MoveKeys::BACK),
        )
    }

    fn slot_for(key: KeyCode) -> Option<usize> {
        let slot = match key {
            KeyCode::Digit1 => 0,
            KeyCode::Digit2 => 1,
            KeyCode::Digit3 => 2,
            KeyCode::Digit4 => 3,
            KeyCode::Digit5 => 4,
            _ => return None,
        };
        (slot < BlockType::ALL.len()).then_some(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_state_tracking() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::KeyW, true);
        input.handle_key(KeyCode::Space, true);
        assert!(input.is_held(MoveKeys::FORWARD | MoveKeys::JUMP));

        input.handle_key(KeyCode::Space, false);
        assert!(!input.jump());
        assert!(input.is_held(MoveKeys::FORWARD));
    }

    #[test]
    fn test_move_axes() {
        let mut input = InputState::new();
        assert_eq!(input.move_axes(), Vec2::ZERO);

        input.handle_key(KeyCode::KeyW, true);
        input.handle_key(KeyCode::KeyD, true);
        assert_eq!(input.move_axes(), Vec2::new(1.0, 1.0));

        // Opposing keys cancel
        input.handle_key(KeyCode::KeyS, true);
        assert_eq!(input.move_axes(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_events_drain_in_order() {
        let mut input = InputState::new();
        input.handle_mouse_button(MouseButton::Left, true);
        input.handle_mouse_button(MouseButton::Left, false);
        input.handle_key(KeyCode::Digit3, true);
        input.handle_mouse_button(MouseButton::Right, true);

        let events: Vec<_> = input.drain_events().collect();
        assert_eq!(
            events,
            vec![
                InputEvent::Click(ClickButton::Break),
                InputEvent::SelectSlot(2),
                InputEvent::Click(ClickButton::Place),
            ]
        );
        assert_eq!(input.pending_events(), 0);
    }

    #[test]
    fn test_slot_keys() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::Digit5, true);
        input.handle_key(KeyCode::Digit5, false);
        input.handle_key(KeyCode::Digit6, true);

        let events: Vec<_> = input.drain_events().collect();
        assert_eq!(events, vec![InputEvent::SelectSlot(4)]);
    }
}
