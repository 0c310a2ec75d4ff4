//! Collision detection for the ball
//!
//! All checks run on the post-integration position (no swept test), so a
//! fast enough ball can tunnel through thin geometry. Each check only answers
//! "did it hit"; `tick` decides which velocity axis to flip.

use glam::Vec2;

use super::rect::Aabb;
use crate::config::GameConfig;

/// Which walls the ball touched at `pos`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub floor: bool,
}

impl WallContact {
    /// Flip velocity for each wall the ball is moving into
    ///
    /// A ball already heading away from a wall keeps its velocity, so one
    /// crossing flips an axis exactly once even if the ball is still
    /// outside on the next tick.
    pub fn reflect(&self, vel: Vec2) -> Vec2 {
        let mut out = vel;
        if (self.left && vel.x < 0.0) || (self.right && vel.x > 0.0) {
            out.x = -vel.x;
        }
        if (self.top && vel.y < 0.0) || (self.floor && vel.y > 0.0) {
            out.y = -vel.y;
        }
        out
    }

    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.floor
    }
}

/// Check the ball's top-left corner against the field edges
pub fn wall_contact(pos: Vec2, config: &GameConfig) -> WallContact {
    let max = config.ball_max();
    WallContact {
        left: pos.x <= 0.0,
        right: pos.x >= max.x,
        top: pos.y <= config.top_boundary(),
        floor: pos.y >= max.y,
    }
}

/// Ball reached the bottom edge (life loss)
#[inline]
pub fn ball_reached_floor(pos: Vec2, config: &GameConfig) -> bool {
    pos.y >= config.ball_max().y
}

/// Ball vs paddle
///
/// The ball's bottom edge must sit inside the paddle's vertical band and the
/// horizontal spans must overlap.
pub fn ball_paddle_collision(ball: &Aabb, paddle: &Aabb) -> bool {
    let bottom = ball.bottom();
    bottom >= paddle.top() && bottom <= paddle.bottom() && ball.overlaps_x(paddle)
}

/// Ball vs block: plain inclusive AABB overlap
#[inline]
pub fn ball_block_collision(ball: &Aabb, block: &Aabb) -> bool {
    ball.overlaps(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig::with_field(390.0, 844.0)
    }

    #[test]
    fn test_wall_contact_edges() {
        let config = config();

        assert!(wall_contact(Vec2::new(0.0, 300.0), &config).left);
        assert!(wall_contact(Vec2::new(-2.0, 300.0), &config).left);
        assert!(wall_contact(Vec2::new(370.0, 300.0), &config).right);
        assert!(wall_contact(Vec2::new(100.0, 10.0), &config).top);
        assert!(wall_contact(Vec2::new(100.0, 824.0), &config).floor);

        let inside = wall_contact(Vec2::new(100.0, 300.0), &config);
        assert!(!inside.any());
    }

    #[test]
    fn test_reflect_only_when_moving_into_wall() {
        let left = WallContact {
            left: true,
            ..Default::default()
        };
        assert_eq!(left.reflect(Vec2::new(-3.0, 3.0)), Vec2::new(3.0, 3.0));
        // Already heading back into the field
        assert_eq!(left.reflect(Vec2::new(3.0, 3.0)), Vec2::new(3.0, 3.0));

        let corner = WallContact {
            right: true,
            top: true,
            ..Default::default()
        };
        assert_eq!(corner.reflect(Vec2::new(3.0, -3.0)), Vec2::new(-3.0, 3.0));
    }

    #[test]
    fn test_paddle_hit_from_above() {
        let paddle = Aabb::new(Vec2::new(100.0, 500.0), Vec2::new(100.0, 20.0));

        // Bottom edge just inside the band
        let ball = Aabb::square(Vec2::new(140.0, 482.0), 20.0);
        assert!(ball_paddle_collision(&ball, &paddle));

        // Bottom edge above the band
        let above = Aabb::square(Vec2::new(140.0, 470.0), 20.0);
        assert!(!ball_paddle_collision(&above, &paddle));

        // Right height but beside the paddle
        let beside = Aabb::square(Vec2::new(250.0, 482.0), 20.0);
        assert!(!ball_paddle_collision(&beside, &paddle));
    }

    #[test]
    fn test_paddle_edge_overlap_counts() {
        let paddle = Aabb::new(Vec2::new(100.0, 500.0), Vec2::new(100.0, 20.0));
        // Ball's right edge exactly on the paddle's left edge
        let ball = Aabb::square(Vec2::new(80.0, 490.0), 20.0);
        assert!(ball_paddle_collision(&ball, &paddle));
    }

    #[test]
    fn test_block_collision() {
        let block = Aabb::new(Vec2::new(50.0, 10.0), Vec2::new(50.0, 20.0));
        assert!(ball_block_collision(&Aabb::square(Vec2::new(60.0, 25.0), 20.0), &block));
        assert!(!ball_block_collision(&Aabb::square(Vec2::new(60.0, 31.0), 20.0), &block));
    }

    #[test]
    fn test_floor() {
        let config = config();
        assert!(!ball_reached_floor(Vec2::new(0.0, 823.9), &config));
        assert!(ball_reached_floor(Vec2::new(0.0, 824.0), &config));
    }
}
