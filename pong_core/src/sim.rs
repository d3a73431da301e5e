use glam::Vec2;
use hecs::World;

use crate::{
    spawn_ball, spawn_paddle, step, Ball, Config, Events, Field, GameRng, InputIntents, MatchState,
    Paddle, ServeState, Score, Side, Snapshot, Time,
};

/// Owned, host-facing simulation
///
/// Wraps the ECS world and all resources behind a small API: feed it a dt,
/// the current field size, and the player intents every tick, read back a
/// [`Snapshot`] and the tick's [`Events`].
///
/// Construction is lazy. Entities are spawned on the first `step` that
/// arrives with a valid field size, so hosts whose windows open at 0x0 can
/// start ticking immediately.
pub struct Simulation {
    world: World,
    time: Time,
    field: Field,
    config: Config,
    score: Score,
    events: Events,
    serve: ServeState,
    match_state: MatchState,
    rng: GameRng,
    initialized: bool,
}

impl Simulation {
    pub fn new(config: Config, seed: u64) -> Self {
        Self {
            world: World::new(),
            time: Time::new(0.016, 0.0),
            field: Field::new(0.0, 0.0),
            config,
            score: Score::new(),
            events: Events::new(),
            serve: ServeState::new(),
            match_state: MatchState::new(),
            rng: GameRng::new(seed),
            initialized: false,
        }
    }

    /// Spawn paddles and ball for a field of the given size
    ///
    /// Paddles start centered vertically; the ball serves from the field
    /// center in a random direction. Also called lazily by `step`, so most
    /// hosts never need to call this themselves.
    pub fn initialize(&mut self, field_width: f32, field_height: f32) {
        let field = Field::new(field_width, field_height);
        if !field.is_valid() {
            return;
        }
        self.field = field;
        self.world.clear();

        let center = field.center();
        spawn_paddle(&mut self.world, Side::Left, center.y);
        spawn_paddle(&mut self.world, Side::Right, center.y);

        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.serve(center, self.config.serve_speed, &mut self.rng);
        spawn_ball(&mut self.world, ball.pos, ball.vel);

        self.score = Score::new();
        self.serve.clear();
        self.match_state = MatchState::new();
        self.events.clear();
        self.events.served = true;
        self.initialized = true;
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// No-ops while the field size is invalid, and freezes once the match
    /// has a winner until the host calls [`reset_match`](Self::reset_match).
    pub fn step(&mut self, dt: f32, field_width: f32, field_height: f32, intents: &InputIntents) {
        let field = Field::new(field_width, field_height);
        if !field.is_valid() {
            return;
        }

        let first_tick = !self.initialized;
        if first_tick {
            self.initialize(field_width, field_height);
        } else if field != self.field {
            self.resize(field);
        }

        if self.match_state.is_over() {
            self.events.clear();
            return;
        }

        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.field,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.serve,
            &mut self.match_state,
            intents,
            &mut self.rng,
        );

        if first_tick {
            self.events.served = true;
        }
    }

    /// Adopt a new field size, pulling entities back inside it
    fn resize(&mut self, field: Field) {
        self.field = field;
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = field.clamp_paddle_y(paddle.y, &self.config);
        }
        let r = self.config.ball_radius;
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            // min/max chain, a field smaller than the ball must not panic
            ball.pos.y = ball.pos.y.min(field.height - r).max(r);
        }
    }

    /// Zero the score, clear the winner, and serve a fresh ball
    pub fn reset_match(&mut self) {
        if !self.initialized {
            return;
        }
        self.score = Score::new();
        self.match_state = MatchState::new();
        self.serve.clear();

        let center = self.field.center();
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = center.y;
            paddle.vel = 0.0;
        }
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.serve(center, self.config.serve_speed, &mut self.rng);
        }
        self.events.clear();
        self.events.served = true;
    }

    /// Copy out everything a renderer needs for this frame
    pub fn snapshot(&self) -> Snapshot {
        let center = self.field.center();
        let mut snapshot = Snapshot {
            ball_pos: center,
            ball_vel: Vec2::ZERO,
            ball_radius: self.config.ball_radius,
            paddle_left_y: center.y,
            paddle_right_y: center.y,
            paddle_size: Vec2::new(self.config.paddle_width, self.config.paddle_height),
            score_left: self.score.left,
            score_right: self.score.right,
            winner: self.match_state.winner,
        };
        for (_entity, ball) in self.world.query::<&Ball>().iter() {
            snapshot.ball_pos = ball.pos;
            snapshot.ball_vel = ball.vel;
        }
        for (_entity, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => snapshot.paddle_left_y = paddle.y,
                Side::Right => snapshot.paddle_right_y = paddle.y,
            }
        }
        snapshot
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn winner(&self) -> Option<Side> {
        self.match_state.winner
    }
}
