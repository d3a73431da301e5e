use pong_core::{Config, Field, InputIntents, Side, Snapshot};

/// Pixels of slack around the target before the bot bothers moving
const DEADZONE: f32 = 6.0;

/// Decide both paddles' intents for the next tick
pub fn plan(snapshot: &Snapshot, field: Field, config: &Config) -> InputIntents {
    let left = dir_for(Side::Left, snapshot, field, config);
    let right = dir_for(Side::Right, snapshot, field, config);
    InputIntents {
        left_up: left < 0,
        left_down: left > 0,
        right_up: right < 0,
        right_down: right > 0,
    }
}

/// Track the predicted intercept while the ball approaches; re-center while
/// it retreats to cover the most field.
fn dir_for(side: Side, snapshot: &Snapshot, field: Field, config: &Config) -> i8 {
    let approaching = match side {
        Side::Left => snapshot.ball_vel.x < 0.0,
        Side::Right => snapshot.ball_vel.x > 0.0,
    };
    let target = if approaching {
        predict_intercept_y(side, snapshot, field, config)
    } else {
        field.center().y
    };

    let diff = target - snapshot.paddle_y(side);
    if diff > DEADZONE {
        1
    } else if diff < -DEADZONE {
        -1
    } else {
        0
    }
}

/// Fly the ball linearly to the paddle face, folding the path off the top
/// and bottom walls
fn predict_intercept_y(side: Side, snapshot: &Snapshot, field: Field, config: &Config) -> f32 {
    let vx = snapshot.ball_vel.x;
    if vx.abs() < 1e-3 {
        return snapshot.ball_pos.y;
    }
    let face_x = field.paddle_face_x(side, config);
    let t = (face_x - snapshot.ball_pos.x) / vx;
    if t <= 0.0 {
        return snapshot.ball_pos.y;
    }
    let raw = snapshot.ball_pos.y + snapshot.ball_vel.y * t;
    mirror(raw, snapshot.ball_radius, field.height - snapshot.ball_radius)
}

/// Fold an unbounded coordinate into [min, max] as if reflected at both ends
fn mirror(y: f32, min: f32, max: f32) -> f32 {
    let span = max - min;
    if span <= 0.0 {
        return min;
    }
    let mut t = (y - min) % (2.0 * span);
    if t < 0.0 {
        t += 2.0 * span;
    }
    min + if t > span { 2.0 * span - t } else { t }
}
