/// Simulation tuning constants (pixels and seconds)
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const SERVE_SPEED: f32 = 300.0;
    pub const MIN_SPEED: f32 = 220.0;
    pub const MAX_SPEED: f32 = 900.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 30.0;
    pub const PADDLE_SPEED: f32 = 320.0;

    // Bounce
    pub const RESTITUTION: f32 = 1.0; // perfectly elastic
    pub const SPIN_FACTOR: f32 = 0.25;

    // Goals
    pub const GOAL_MARGIN: f32 = 12.0; // ball must be fully this far past the line
    pub const GOAL_DEPTH: f32 = 48.0; // outer side wall distance past the line
    pub const WIN_SCORE: u8 = 5; // 0 = endless match
    pub const SERVE_DELAY: f32 = 0.75;

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0; // micro-step length
    pub const MAX_DT: f32 = 0.1; // clamp to prevent large jumps
    pub const FALLBACK_DT: f32 = 1.0 / 60.0; // used when the host hands us dt <= 0
    pub const SPEED_EPSILON: f32 = 1e-4;
}
