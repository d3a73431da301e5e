use glam::Vec2;

use crate::{Config, Side};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Playing field dimensions, supplied by the host every tick
///
/// The host owns the window; the simulation never assumes a fixed size and
/// re-derives paddle and goal geometry from whatever dimensions arrive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// False until the host window has a real size
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Paddle center x for a side
    pub fn paddle_x(&self, side: Side, config: &Config) -> f32 {
        match side {
            Side::Left => config.paddle_margin + config.paddle_width / 2.0,
            Side::Right => self.width - config.paddle_margin - config.paddle_width / 2.0,
        }
    }

    /// The inner paddle face the ball bounces off
    pub fn paddle_face_x(&self, side: Side, config: &Config) -> f32 {
        match side {
            Side::Left => config.paddle_margin + config.paddle_width,
            Side::Right => self.width - config.paddle_margin - config.paddle_width,
        }
    }

    pub fn paddle_aabb(&self, side: Side, y: f32, config: &Config) -> Aabb {
        Aabb::from_center_size(
            Vec2::new(self.paddle_x(side, config), y),
            Vec2::new(config.paddle_width, config.paddle_height),
        )
    }

    /// Clamp a paddle center y into the field. min/max chain instead of
    /// `clamp` so a field shorter than the paddle cannot panic.
    pub fn clamp_paddle_y(&self, y: f32, config: &Config) -> f32 {
        let half = config.paddle_height / 2.0;
        y.min(self.height - half).max(half)
    }
}
