//! Ball-paddle collision detection and response
//!
//! Arcade model, not rigid-body physics: the bounce angle depends only on
//! where the ball meets the paddle, and every hit makes the ball faster.

use super::state::{Ball, Paddle};
use crate::launch_velocity;

/// Result of a paddle hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleHit {
    /// Outgoing angle (radians off the horizontal)
    pub angle: f32,
    /// Speed before the hit
    pub speed_before: f32,
    /// Speed after the hit
    pub speed_after: f32,
}

/// Axis-aligned overlap between ball and paddle, counted only while the
/// ball's horizontal velocity has the sign `expected_direction`.
///
/// The direction gate keeps a ball that was already sent back from being
/// handled a second time while it is still inside the paddle.
pub fn paddle_overlap(ball: &Ball, paddle: &Paddle, expected_direction: f32) -> bool {
    let paddle_left = paddle.pos.x;
    let paddle_right = paddle.pos.x + paddle.width;
    let paddle_top = paddle.pos.y;
    let paddle_bottom = paddle.pos.y + paddle.height;

    let horizontal = ball.right() >= paddle_left && ball.left() <= paddle_right;
    let vertical = ball.bottom() >= paddle_top && ball.top() <= paddle_bottom;
    let heading = (expected_direction < 0.0 && ball.vel.x < 0.0)
        || (expected_direction > 0.0 && ball.vel.x > 0.0);

    horizontal && vertical && heading
}

/// Map the vertical hit offset linearly onto `[-range, range]`.
///
/// A ball centered on the paddle leaves flat; hitting near an edge deflects
/// up to `range` radians.
pub fn bounce_angle(ball: &Ball, paddle: &Paddle, range: f32) -> f32 {
    let half_height = paddle.height / 2.0;
    if half_height <= 0.0 {
        return 0.0;
    }
    let offset = ball.center_y() - paddle.center_y();
    (offset / half_height) * range
}

/// Send the ball back off `paddle`, travelling along `direction` (+1 right,
/// -1 left).
///
/// The new speed is the ball's current speed plus `speed_increment`, so hits
/// compound over a rally. The ball is moved flush against the paddle face
/// plus `offset` so it cannot stick.
pub fn resolve_paddle_hit(
    ball: &mut Ball,
    paddle: &Paddle,
    direction: f32,
    bounce_range: f32,
    speed_increment: f32,
    offset: f32,
) -> PaddleHit {
    let angle = bounce_angle(ball, paddle, bounce_range);
    let speed_before = ball.speed();
    let speed_after = speed_before + speed_increment;

    ball.vel = launch_velocity(angle, direction, speed_after);
    push_clear(ball, paddle, direction, offset);

    PaddleHit {
        angle,
        speed_before,
        speed_after,
    }
}

/// Place the ball just outside the paddle face it is leaving through
fn push_clear(ball: &mut Ball, paddle: &Paddle, direction: f32, offset: f32) {
    if direction > 0.0 {
        ball.pos.x = paddle.pos.x + paddle.width + offset;
    } else {
        ball.pos.x = paddle.pos.x - ball.size - offset;
    }
}
