use macroquad::prelude::*;

/// Camera that keeps the player at a fixed screen offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowCamera {
    /// Screen position (pixels) where `target` appears.
    pub offset: Vec2,
    /// World position being looked at.
    pub target: Vec2,
    pub zoom: f32,
}

impl FollowCamera {
    /// Camera centred on a window of `window` pixels.
    pub fn centered(window: Vec2, zoom: f32) -> Self {
        FollowCamera {
            offset: window / 2.0,
            target: Vec2::ZERO,
            zoom,
        }
    }

    /// Re-target on the center of `dest`.
    #[inline]
    pub fn follow(&mut self, dest: Rect) {
        self.target = dest.center();
    }

    /// Macroquad camera for a screen of `screen` pixels.
    ///
    /// Macroquad works in normalized device coordinates, so the pixel offset and
    /// zoom are rescaled by the current screen size.
    pub fn to_camera2d(&self, screen: Vec2) -> Camera2D {
        Camera2D {
            target: self.target,
            zoom: vec2(self.zoom * 2.0 / screen.x, self.zoom * 2.0 / screen.y),
            offset: vec2(
                self.offset.x / screen.x * 2.0 - 1.0,
                1.0 - self.offset.y / screen.y * 2.0,
            ),
            ..Default::default()
        }
    }
}
