//! Facing direction and sprite-sheet frame cycling for the player.

/// Facing direction. The discriminant is the sprite-sheet row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Down = 0,
    Up = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// Evaluation order for held keys; the last held one sets the facing.
    pub const ORDER: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Left,
        Direction::Right,
    ];

    #[inline]
    pub fn row(self) -> u32 {
        self as u32
    }
}

/// Ticks between frame advances while walking.
pub const MOVING_CADENCE: u64 = 8;
/// Ticks between frame advances while standing.
pub const IDLE_CADENCE: u64 = 45;
/// Highest walking frame.
pub const LAST_MOVING_FRAME: u32 = 3;
/// Highest idle frame.
pub const LAST_IDLE_FRAME: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationState {
    pub direction: Direction,
    /// Set by this tick's input, cleared once the tick is over.
    pub moving: bool,
    pub frame: u32,
    /// Ticks advanced so far.
    pub frame_counter: u64,
}

impl AnimationState {
    /// Advance one tick: step the frame on the cadence for the current
    /// moving flag, then wrap it into the walking or idle range.
    pub fn advance(&mut self) {
        let cadence = if self.moving {
            MOVING_CADENCE
        } else {
            IDLE_CADENCE
        };
        if self.frame_counter % cadence == 1 {
            self.frame += 1;
        }
        self.frame_counter += 1;

        if self.frame > LAST_MOVING_FRAME {
            self.frame = 0;
        }
        if !self.moving && self.frame > LAST_IDLE_FRAME {
            self.frame = 0;
        }
    }

    /// Sprite-sheet column and row for the current frame.
    #[inline]
    pub fn sheet_cell(&self) -> (u32, u32) {
        (self.frame, self.direction.row())
    }
}
