//! The single walking character: movement accumulation and sprite selection.

mod animation;

pub use animation::{
    AnimationState, Direction, IDLE_CADENCE, LAST_IDLE_FRAME, LAST_MOVING_FRAME, MOVING_CADENCE,
};

use crate::command::DrawCommand;
use crate::tileset::SheetId;
use macroquad::prelude::*;

/// Movement requested by one tick of held direction keys.
///
/// Every held direction contributes its own delta; only the last held one in
/// [`Direction::ORDER`] sets the facing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveIntent {
    /// Unit steps summed over held directions, y down.
    pub delta: Vec2,
    /// `None` when no direction is held.
    pub facing: Option<Direction>,
}

impl MoveIntent {
    /// Build from held flags for Down, Up, Left, Right.
    pub fn from_held(down: bool, up: bool, left: bool, right: bool) -> Self {
        let held = [down, up, left, right];
        let mut intent = MoveIntent::default();
        for (dir, _) in Direction::ORDER.iter().zip(held).filter(|(_, h)| *h) {
            intent.delta += match dir {
                Direction::Down => vec2(0.0, 1.0),
                Direction::Up => vec2(0.0, -1.0),
                Direction::Left => vec2(-1.0, 0.0),
                Direction::Right => vec2(1.0, 0.0),
            };
            intent.facing = Some(*dir);
        }
        intent
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.facing.is_some()
    }
}

pub struct Player {
    pub anim: AnimationState,
    /// Sprite-sheet cell currently shown.
    pub src: Rect,
    /// World-space placement; drives both drawing and the camera.
    pub dest: Rect,
    /// Pixels per tick per held direction.
    pub speed: f32,
}

impl Player {
    pub fn new(spawn: Vec2, frame_size: Vec2, speed: f32) -> Self {
        Player {
            anim: AnimationState::default(),
            src: Rect::new(0.0, 0.0, frame_size.x, frame_size.y),
            dest: Rect::new(spawn.x, spawn.y, frame_size.x, frame_size.y),
            speed,
        }
    }

    fn sync_src(&mut self) {
        let (col, row) = self.anim.sheet_cell();
        self.src.x = self.src.w * col as f32;
        self.src.y = self.src.h * row as f32;
    }

    /// Run one unpaused tick.
    pub fn update(&mut self, intent: &MoveIntent) {
        self.sync_src();

        if let Some(facing) = intent.facing {
            self.anim.moving = true;
            self.anim.direction = facing;
            self.dest.x += intent.delta.x * self.speed;
            self.dest.y += intent.delta.y * self.speed;
        }

        self.anim.advance();
        self.sync_src();

        // Movement is sampled per tick, never latched.
        self.anim.moving = false;
    }

    /// World-space center, the camera target.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.dest.center()
    }

    pub fn draw_command(&self) -> DrawCommand {
        DrawCommand {
            sheet: SheetId::Player,
            src: self.src,
            dest: self.dest,
        }
    }
}
