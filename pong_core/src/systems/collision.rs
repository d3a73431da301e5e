use glam::Vec2;
use hecs::World;

use crate::{Aabb, Ball, Config, Events, Field, Paddle, Params, Side};

/// Reflect the ball off the top/bottom walls and the outer side walls
///
/// Reflection forces the velocity sign away from the wall instead of negating
/// it, so a ball that already points away (after a deep overlap or a resize)
/// is never re-reflected back in.
pub fn collide_walls(world: &mut World, field: &Field, config: &Config, events: &mut Events) {
    let r = config.ball_radius;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y - r < 0.0 {
            ball.pos.y = r;
            ball.vel.y = ball.vel.y.abs();
            events.ball_hit_wall = true;
        } else if ball.pos.y + r > field.height {
            ball.pos.y = field.height - r;
            ball.vel.y = -ball.vel.y.abs();
            events.ball_hit_wall = true;
        }

        // Outer side walls sit goal_depth past each goal line. They keep a
        // scored ball in the world so it can fly back into play (CarryOn) or
        // wait out the serve timer without escaping (Respawn).
        let outer_left = -config.goal_depth;
        let outer_right = field.width + config.goal_depth;
        if ball.pos.x - r < outer_left {
            ball.pos.x = outer_left + r;
            ball.vel.x = ball.vel.x.abs();
            events.ball_hit_wall = true;
        } else if ball.pos.x + r > outer_right {
            ball.pos.x = outer_right - r;
            ball.vel.x = -ball.vel.x.abs();
            events.ball_hit_wall = true;
        }
    }
}

/// Bounce the ball off a paddle it is moving toward
///
/// On contact: ball x clamps to the paddle face, vx reflects scaled by
/// restitution, the paddle's effective velocity feeds vy (spin transfer),
/// and the resulting speed is rescaled into [min_speed, max_speed].
pub fn collide_paddles(world: &mut World, field: &Field, config: &Config, events: &mut Events) {
    let paddles: Vec<(Side, f32, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y, p.vel))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for &(side, paddle_y, paddle_vel) in &paddles {
            let toward = match side {
                Side::Left => ball.vel.x < 0.0,
                Side::Right => ball.vel.x > 0.0,
            };
            if !toward {
                continue;
            }

            let paddle_box = field.paddle_aabb(side, paddle_y, config);
            let ball_box =
                Aabb::from_center_size(ball.pos, Vec2::splat(config.ball_radius * 2.0));
            if !ball_box.overlaps(&paddle_box) {
                continue;
            }

            // Clamp outside the paddle so the same overlap cannot re-trigger
            let face_x = field.paddle_face_x(side, config);
            ball.pos.x = match side {
                Side::Left => face_x + config.ball_radius,
                Side::Right => face_x - config.ball_radius,
            };
            ball.vel.x = -ball.vel.x * config.restitution;
            ball.vel.y += paddle_vel * config.spin_factor;
            clamp_speed(&mut ball.vel, config.min_speed, config.max_speed);

            events.paddle_hit(side);
            break;
        }
    }
}

/// Rescale the velocity uniformly into [min, max], preserving direction.
/// A near-zero velocity is left alone rather than divided by.
fn clamp_speed(vel: &mut Vec2, min: f32, max: f32) {
    let speed = vel.length();
    if speed <= Params::SPEED_EPSILON {
        return;
    }
    let target = speed.clamp(min, max);
    if target != speed {
        *vel *= target / speed;
    }
}
