use crate::player::MoveIntent;
use macroquad::prelude::*;
use serde::Deserialize;

/// Two alternative keys bound to one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct KeyPair(pub KeyName, pub KeyName);

/// Keys that can appear in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum KeyName {
    W,
    A,
    S,
    D,
    P,
    Escape,
    Space,
    Up,
    Down,
    Left,
    Right,
}

impl From<KeyName> for KeyCode {
    fn from(key: KeyName) -> Self {
        match key {
            KeyName::W => KeyCode::W,
            KeyName::A => KeyCode::A,
            KeyName::S => KeyCode::S,
            KeyName::D => KeyCode::D,
            KeyName::P => KeyCode::P,
            KeyName::Escape => KeyCode::Escape,
            KeyName::Space => KeyCode::Space,
            KeyName::Up => KeyCode::Up,
            KeyName::Down => KeyCode::Down,
            KeyName::Left => KeyCode::Left,
            KeyName::Right => KeyCode::Right,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub down: KeyPair,
    pub up: KeyPair,
    pub left: KeyPair,
    pub right: KeyPair,
    pub pause: KeyName,
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            down: KeyPair(KeyName::S, KeyName::Down),
            up: KeyPair(KeyName::W, KeyName::Up),
            left: KeyPair(KeyName::A, KeyName::Left),
            right: KeyPair(KeyName::D, KeyName::Right),
            pause: KeyName::P,
        }
    }
}

/// Key state sampled once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub down: bool,
    pub up: bool,
    pub left: bool,
    pub right: bool,
    /// Pause key went down this tick.
    pub pause_pressed: bool,
}

impl InputSnapshot {
    /// Poll macroquad's key state. Needs a live window.
    pub fn sample(bindings: &KeyBindings) -> Self {
        let held = |pair: KeyPair| is_key_down(pair.0.into()) || is_key_down(pair.1.into());
        InputSnapshot {
            down: held(bindings.down),
            up: held(bindings.up),
            left: held(bindings.left),
            right: held(bindings.right),
            pause_pressed: is_key_pressed(bindings.pause.into()),
        }
    }

    pub fn move_intent(&self) -> MoveIntent {
        MoveIntent::from_held(self.down, self.up, self.left, self.right)
    }
}
