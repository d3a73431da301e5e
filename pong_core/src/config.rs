use crate::Params;

/// What happens to the ball after a goal is counted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ServePolicy {
    /// Keep the ball in flight: it bounces off the outer side wall and
    /// returns into play on its own. One crossing scores exactly once
    /// (the scoring latch holds until the ball is back inside the field).
    CarryOn,
    /// Re-serve from the field center after `delay` seconds.
    Respawn { delay: f32 },
}

/// Runtime simulation configuration
///
/// Defaults come from [`Params`]; hosts override individual fields before
/// constructing the simulation.
#[derive(Debug, Clone)]
pub struct Config {
    pub ball_radius: f32,
    pub serve_speed: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub restitution: f32,
    pub spin_factor: f32,
    pub goal_margin: f32,
    pub goal_depth: f32,
    pub win_score: u8,
    pub serve_policy: ServePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ball_radius: Params::BALL_RADIUS,
            serve_speed: Params::SERVE_SPEED,
            min_speed: Params::MIN_SPEED,
            max_speed: Params::MAX_SPEED,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            restitution: Params::RESTITUTION,
            spin_factor: Params::SPIN_FACTOR,
            goal_margin: Params::GOAL_MARGIN,
            goal_depth: Params::GOAL_DEPTH,
            win_score: Params::WIN_SCORE,
            serve_policy: ServePolicy::CarryOn,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }
}
