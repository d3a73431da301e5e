use hecs::World;

use crate::{Ball, Config, Field, Paddle, PaddleIntent, Time};

/// Apply paddle movement based on intents
///
/// Records the effective velocity `(new_y - old_y) / dt` on each paddle for
/// the spin transfer. Measuring after the clamp means a paddle held against
/// a wall reports zero velocity.
pub fn move_paddles(world: &mut World, time: &Time, field: &Field, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        let old_y = paddle.y;
        if intent.dir != 0 {
            paddle.y += intent.dir as f32 * config.paddle_speed * time.dt;
            paddle.y = field.clamp_paddle_y(paddle.y, config);
        }
        paddle.vel = (paddle.y - old_y) / time.dt;
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * time.dt;
    }
}
