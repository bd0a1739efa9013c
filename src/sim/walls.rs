//! Top/bottom wall reflection

use super::state::Ball;

/// Which horizontal wall the ball touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
}

/// Primary contact test: the ball is inside a wall band of `thickness` and
/// still heading into it.
pub fn wall_contact(ball: &Ball, screen_height: f32, thickness: f32) -> Option<Wall> {
    if ball.top() <= thickness && ball.vel.y < 0.0 {
        Some(Wall::Top)
    } else if ball.bottom() >= screen_height - thickness && ball.vel.y > 0.0 {
        Some(Wall::Bottom)
    } else {
        None
    }
}

/// Send the ball downward and keep it below y = 0
pub fn resolve_top_wall(ball: &mut Ball) {
    ball.vel.y = ball.vel.y.abs();
    if ball.pos.y < 0.0 {
        ball.pos.y = 0.0;
    }
}

/// Send the ball upward and keep its bottom edge inside the field
pub fn resolve_bottom_wall(ball: &mut Ball, screen_height: f32) {
    ball.vel.y = -ball.vel.y.abs();
    if ball.bottom() > screen_height {
        ball.pos.y = screen_height - ball.size;
    }
}

/// Backstop run every frame: reapply both clamps for a ball that tunnelled
/// past a wall between frames. Returns true if anything was corrected.
pub fn clamp_to_field(ball: &mut Ball, screen_height: f32) -> bool {
    if ball.pos.y < 0.0 {
        resolve_top_wall(ball);
        true
    } else if ball.bottom() > screen_height {
        resolve_bottom_wall(ball, screen_height);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn ball(y: f32, vy: f32) -> Ball {
        Ball {
            pos: Vec2::new(400.0, y),
            vel: Vec2::new(200.0, vy),
            size: 20.0,
            serve: None,
        }
    }

    #[test]
    fn test_top_wall_reflects_and_clamps() {
        let mut b = ball(-7.0, -150.0);
        resolve_top_wall(&mut b);
        assert_eq!(b.vel.y, 150.0);
        assert_eq!(b.pos.y, 0.0);
        assert_eq!(b.vel.x, 200.0);
    }

    #[test]
    fn test_bottom_wall_reflects_and_clamps() {
        let mut b = ball(590.0, 150.0);
        resolve_bottom_wall(&mut b, 600.0);
        assert_eq!(b.vel.y, -150.0);
        assert_eq!(b.pos.y, 580.0);
    }

    #[test]
    fn test_resolves_are_idempotent() {
        let mut b = ball(-3.0, -80.0);
        resolve_top_wall(&mut b);
        let once = b.clone();
        resolve_top_wall(&mut b);
        assert_eq!(b, once);

        let mut b = ball(612.0, 80.0);
        resolve_bottom_wall(&mut b, 600.0);
        let once = b.clone();
        resolve_bottom_wall(&mut b, 600.0);
        assert_eq!(b, once);
    }

    #[test]
    fn test_contact_needs_inbound_velocity() {
        assert_eq!(wall_contact(&ball(0.5, -10.0), 600.0, 1.0), Some(Wall::Top));
        assert_eq!(wall_contact(&ball(0.5, 10.0), 600.0, 1.0), None);
        assert_eq!(wall_contact(&ball(579.5, 10.0), 600.0, 1.0), Some(Wall::Bottom));
        assert_eq!(wall_contact(&ball(300.0, 10.0), 600.0, 1.0), None);
    }

    #[test]
    fn test_clamp_catches_tunnelling() {
        let mut b = ball(-240.0, -9000.0);
        assert!(clamp_to_field(&mut b, 600.0));
        assert_eq!(b.pos.y, 0.0);
        assert!(b.vel.y > 0.0);

        let mut b = ball(300.0, 10.0);
        assert!(!clamp_to_field(&mut b, 600.0));
    }

    proptest! {
        #[test]
        fn prop_top_wall_postconditions(y in -500.0f32..700.0, vy in -1000.0f32..1000.0) {
            let mut b = ball(y, vy);
            resolve_top_wall(&mut b);
            prop_assert!(b.vel.y >= 0.0);
            prop_assert!(b.pos.y >= 0.0);
        }

        #[test]
        fn prop_bottom_wall_postconditions(y in -500.0f32..1200.0, vy in -1000.0f32..1000.0) {
            let mut b = ball(y, vy);
            resolve_bottom_wall(&mut b, 600.0);
            prop_assert!(b.vel.y <= 0.0);
            prop_assert!(b.pos.y + b.size <= 600.0);
        }
    }
}
