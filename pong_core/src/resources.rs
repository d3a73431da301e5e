use crate::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 0.016, now: 0.0 }
    }
}

/// Match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// First side to reach `win_score` points. 0 disables the limit.
    pub fn winner(&self, win_score: u8) -> Option<Side> {
        if win_score == 0 {
            None
        } else if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// One-tick event flags for the renderer/VFX layer
///
/// Cleared at the start of every `step`; systems only ever set flags, so the
/// flags accumulate across the micro-steps within a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub paddle_hit_left: bool,
    pub paddle_hit_right: bool,
    pub scored_left: bool,
    pub scored_right: bool,
    pub served: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn paddle_hit(&mut self, side: Side) {
        match side {
            Side::Left => self.paddle_hit_left = true,
            Side::Right => self.paddle_hit_right = true,
        }
    }

    pub fn scored(&mut self, side: Side) {
        match side {
            Side::Left => self.scored_left = true,
            Side::Right => self.scored_right = true,
        }
    }
}

/// Deterministic random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Directional intents sampled from the host once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputIntents {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

impl InputIntents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse the up/down pair for a side into -1/0/1.
    /// Both keys held cancel out.
    pub fn dir(&self, side: Side) -> i8 {
        let (up, down) = match side {
            Side::Left => (self.left_up, self.left_down),
            Side::Right => (self.right_up, self.right_down),
        };
        match (up, down) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }
}

/// Scoring latch and re-serve timer
///
/// The latch is set when a goal is counted and holds while the ball remains
/// beyond the line, so a crossing scores exactly once no matter how many
/// ticks the ball spends outside.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServeState {
    pub latched: bool,
    pub timer: f32,
}

impl ServeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latch(&mut self, delay: f32) {
        self.latched = true;
        self.timer = delay.max(0.0);
    }

    pub fn tick(&mut self, dt: f32) {
        if self.timer > 0.0 {
            self.timer = (self.timer - dt).max(0.0);
        }
    }

    pub fn ready_to_serve(&self) -> bool {
        self.latched && self.timer <= 0.0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Match lifecycle: once a winner is set the simulation freezes until
/// the host calls `reset_match`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchState {
    pub winner: Option<Side>,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }
}
