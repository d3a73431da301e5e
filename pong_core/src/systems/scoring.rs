use hecs::World;

use crate::{
    Ball, Config, Events, Field, GameRng, MatchState, Score, ServePolicy, ServeState, Side, Time,
};

/// Detect goals, keep score, and hand the ball back per the serve policy
///
/// A goal counts when the ball is fully past a goal line by `goal_margin`.
/// The latch then holds until the ball's box is back inside the field, so a
/// single crossing increments exactly once however many ticks it spends out.
pub fn check_goals(
    world: &mut World,
    time: &Time,
    field: &Field,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    serve: &mut ServeState,
    match_state: &mut MatchState,
    rng: &mut GameRng,
) {
    serve.tick(time.dt);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let r = config.ball_radius;
        let past_left = ball.pos.x + r < -config.goal_margin;
        let past_right = ball.pos.x - r > field.width + config.goal_margin;
        let inside = ball.pos.x - r >= 0.0 && ball.pos.x + r <= field.width;

        if !serve.latched {
            let scorer = if past_left {
                Some(Side::Right)
            } else if past_right {
                Some(Side::Left)
            } else {
                None
            };
            if let Some(side) = scorer {
                score.increment(side);
                events.scored(side);
                serve.latch(match config.serve_policy {
                    ServePolicy::CarryOn => 0.0,
                    ServePolicy::Respawn { delay } => delay,
                });
                match_state.winner = score.winner(config.win_score);
            }
        } else {
            match config.serve_policy {
                ServePolicy::CarryOn => {
                    if inside {
                        serve.clear();
                    }
                }
                ServePolicy::Respawn { .. } => {
                    if inside {
                        // An outer-wall bounce brought it back early
                        serve.clear();
                    } else if serve.ready_to_serve() && !match_state.is_over() {
                        ball.serve(field.center(), config.serve_speed, rng);
                        serve.clear();
                        events.served = true;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{spawn_ball, Ball};
    use glam::Vec2;

    struct Fixture {
        world: World,
        config: Config,
        field: Field,
        score: Score,
        events: Events,
        serve: ServeState,
        match_state: MatchState,
        rng: GameRng,
    }

    impl Fixture {
        fn new(config: Config) -> Self {
            Self {
                world: World::new(),
                config,
                field: Field::new(800.0, 600.0),
                score: Score::new(),
                events: Events::new(),
                serve: ServeState::new(),
                match_state: MatchState::new(),
                rng: GameRng::new(12345),
            }
        }

        fn check(&mut self, dt: f32) {
            check_goals(
                &mut self.world,
                &Time::new(dt, 0.0),
                &self.field,
                &self.config,
                &mut self.score,
                &mut self.events,
                &mut self.serve,
                &mut self.match_state,
                &mut self.rng,
            );
        }
    }

    #[test]
    fn test_right_scores_when_ball_exits_left() {
        let mut fx = Fixture::new(Config::new());
        let past = -(fx.config.goal_margin + fx.config.ball_radius + 1.0);
        spawn_ball(&mut fx.world, Vec2::new(past, 300.0), Vec2::new(-240.0, 0.0));

        fx.check(0.016);

        assert_eq!(fx.score.right, 1, "Right player scores");
        assert_eq!(fx.score.left, 0);
        assert!(fx.events.scored_right);
        assert!(fx.serve.latched);
    }

    #[test]
    fn test_left_scores_when_ball_exits_right() {
        let mut fx = Fixture::new(Config::new());
        let past = fx.field.width + fx.config.goal_margin + fx.config.ball_radius + 1.0;
        spawn_ball(&mut fx.world, Vec2::new(past, 300.0), Vec2::new(240.0, 0.0));

        fx.check(0.016);

        assert_eq!(fx.score.left, 1, "Left player scores");
        assert!(fx.events.scored_left);
    }

    #[test]
    fn test_crossing_scores_exactly_once() {
        let mut fx = Fixture::new(Config::new());
        let past = -(fx.config.goal_margin + fx.config.ball_radius + 1.0);
        spawn_ball(&mut fx.world, Vec2::new(past, 300.0), Vec2::new(0.0, 0.0));

        for _ in 0..120 {
            fx.check(0.016);
        }

        assert_eq!(fx.score.right, 1, "Latch blocks repeat increments");
    }

    #[test]
    fn test_no_score_before_the_margin() {
        let mut fx = Fixture::new(Config::new());
        // Fully past the line but not past the margin yet
        spawn_ball(
            &mut fx.world,
            Vec2::new(-fx.config.ball_radius - 1.0, 300.0),
            Vec2::new(-240.0, 0.0),
        );

        fx.check(0.016);

        assert_eq!(fx.score.right, 0);
        assert_eq!(fx.score.left, 0);
    }

    #[test]
    fn test_no_score_in_bounds() {
        let mut fx = Fixture::new(Config::new());
        spawn_ball(&mut fx.world, Vec2::new(400.0, 300.0), Vec2::new(240.0, 80.0));

        fx.check(0.016);

        assert_eq!(fx.score, Score::new());
        assert!(!fx.events.scored_left && !fx.events.scored_right);
    }

    #[test]
    fn test_carry_on_latch_clears_on_reentry() {
        let mut fx = Fixture::new(Config::new());
        let past = -(fx.config.goal_margin + fx.config.ball_radius + 1.0);
        let entity = spawn_ball(&mut fx.world, Vec2::new(past, 300.0), Vec2::ZERO);

        fx.check(0.016);
        assert!(fx.serve.latched);

        // Ball returns into the field (outer wall bounced it back)
        fx.world.get::<&mut Ball>(entity).unwrap().pos.x = 400.0;
        fx.check(0.016);
        assert!(!fx.serve.latched, "Latch clears once the ball is back inside");

        // A second, separate crossing scores again
        fx.world.get::<&mut Ball>(entity).unwrap().pos.x = past;
        fx.check(0.016);
        assert_eq!(fx.score.right, 2);
    }

    #[test]
    fn test_respawn_reserves_after_delay() {
        let mut config = Config::new();
        config.serve_policy = ServePolicy::Respawn { delay: 0.1 };
        let mut fx = Fixture::new(config);
        let past = -(fx.config.goal_margin + fx.config.ball_radius + 1.0);
        let entity = spawn_ball(&mut fx.world, Vec2::new(past, 300.0), Vec2::ZERO);

        fx.check(0.016);
        assert_eq!(fx.score.right, 1);
        let mid_delay = fx.world.get::<&Ball>(entity).unwrap().pos;
        assert_eq!(mid_delay.x, past, "Ball stays put during the delay");

        for _ in 0..8 {
            fx.check(0.016);
        }

        let ball = *fx.world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.pos, fx.field.center(), "Re-served from center");
        assert!(ball.vel.length() > 0.0, "Serve gives it a direction");
        assert!(fx.events.served);
        assert!(!fx.serve.latched);
    }

    #[test]
    fn test_win_sets_match_state() {
        let mut config = Config::new();
        config.win_score = 1;
        let mut fx = Fixture::new(config);
        let past = fx.field.width + fx.config.goal_margin + fx.config.ball_radius + 1.0;
        spawn_ball(&mut fx.world, Vec2::new(past, 300.0), Vec2::ZERO);

        fx.check(0.016);

        assert_eq!(fx.match_state.winner, Some(Side::Left));
        assert!(fx.match_state.is_over());
    }

    #[test]
    fn test_no_reserve_after_match_is_over() {
        let mut config = Config::new();
        config.win_score = 1;
        config.serve_policy = ServePolicy::Respawn { delay: 0.0 };
        let mut fx = Fixture::new(config);
        let past = -(fx.config.goal_margin + fx.config.ball_radius + 1.0);
        let entity = spawn_ball(&mut fx.world, Vec2::new(past, 300.0), Vec2::ZERO);

        fx.check(0.016);
        assert!(fx.match_state.is_over());

        fx.check(0.016);
        let ball = *fx.world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.pos.x, past, "No re-serve once the match has a winner");
    }
}
