use glam::Vec2;

use crate::Side;

/// Read-only copy of everything a renderer needs for one frame
///
/// Positions are centers in field pixels; sizes are full extents. Taking a
/// snapshot never borrows into the simulation, so hosts can keep two of them
/// around for interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    pub ball_radius: f32,
    pub paddle_left_y: f32,
    pub paddle_right_y: f32,
    pub paddle_size: Vec2,
    pub score_left: u8,
    pub score_right: u8,
    pub winner: Option<Side>,
}

impl Snapshot {
    pub fn score(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.score_left,
            Side::Right => self.score_right,
        }
    }

    pub fn paddle_y(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_left_y,
            Side::Right => self.paddle_right_y,
        }
    }
}
