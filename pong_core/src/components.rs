use glam::Vec2;

use crate::GameRng;

/// Which half of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Ball component - position and velocity in pixels / pixels-per-second
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Place the ball at `center` and launch it at `speed` in a uniformly
    /// random direction in [0, 2π).
    pub fn serve(&mut self, center: Vec2, speed: f32, rng: &mut GameRng) {
        use rand::Rng;
        let angle: f32 = rng.0.gen_range(0.0..std::f32::consts::TAU);
        self.pos = center;
        self.vel = Vec2::new(angle.cos(), angle.sin()) * speed;
    }
}

/// Paddle component
///
/// `vel` is the effective vertical velocity measured over the most recent
/// step, after clamping. It feeds the spin transfer on contact, so a paddle
/// pinned against a wall adds no spin even while a key is held.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
    pub vel: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y, vel: 0.0 }
    }
}

/// Movement intent for a paddle: -1 = up, 0 = stop, 1 = down
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
