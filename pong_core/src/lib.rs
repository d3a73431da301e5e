pub mod components;
pub mod config;
pub mod field;
pub mod params;
pub mod resources;
pub mod sim;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use field::*;
pub use params::*;
pub use resources::*;
pub use sim::*;
pub use snapshot::*;

use hecs::World;
use systems::*;

/// Run one tick of the deterministic Pong simulation
///
/// `time.dt` is sanitized (fallback when non-positive, clamped against
/// runaway jumps) and then consumed in fixed micro-steps for stable physics.
/// Events are cleared once per tick, not per micro-step, so a hit and a goal
/// inside the same tick both surface to the host.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    field: &Field,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    serve: &mut ServeState,
    match_state: &mut MatchState,
    intents: &InputIntents,
    rng: &mut GameRng,
) {
    let dt = if time.dt > 0.0 { time.dt } else { Params::FALLBACK_DT };
    let clamped_dt = dt.min(Params::MAX_DT);

    events.clear();

    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Apply host intents to paddle intents
        apply_intents(world, intents);

        // 2. Move paddles, recording effective velocity for spin
        move_paddles(world, &step_time, field, config);

        // 3. Move ball
        move_ball(world, &step_time);

        // 4. Walls: top/bottom and the outer side walls
        collide_walls(world, field, config, events);

        // 5. Paddles: reflect, spin, speed clamp
        collide_paddles(world, field, config, events);

        // 6. Goals: latched scoring and re-serve
        check_goals(
            world,
            &step_time,
            field,
            config,
            score,
            events,
            serve,
            match_state,
            rng,
        );
    }

    time.now += clamped_dt;
}

/// Helper to create a paddle entity
pub fn spawn_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn spawn_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
