//! Contact and goal detection
//!
//! Players and the ball collide as axis-aligned squares (side = 2 × radius),
//! which is cheap and matches what the kick range expects. Goals are plain
//! rectangles tested against the ball centre.

use glam::Vec2;

use super::state::{Ball, Goal, Player};

/// Axis-aligned box, top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    /// Square box around a circle
    pub fn around(center: Vec2, radius: f32) -> Self {
        Self {
            min: center - Vec2::splat(radius),
            size: Vec2::splat(radius * 2.0),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// True when the boxes share interior area; touching edges do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

impl Player {
    pub fn bounds(&self) -> Aabb {
        Aabb::around(self.pos, self.radius)
    }
}

impl Ball {
    pub fn bounds(&self) -> Aabb {
        Aabb::around(self.pos, self.radius)
    }
}

/// Whether a player's box touches the ball's box
pub fn player_touches_ball(player: &Player, ball: &Ball) -> bool {
    player.bounds().overlaps(&ball.bounds())
}

impl Goal {
    /// Strict containment of a point; the goal outline itself is not inside
    pub fn contains(&self, point: Vec2) -> bool {
        self.x < point.x
            && point.x < self.x + self.width
            && self.y < point.y
            && point.y < self.y + self.height
    }

    /// Whether the ball centre is inside the goal mouth
    pub fn check_goal(&self, ball: &Ball) -> bool {
        self.contains(ball.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Controller, GoalSide, Team};

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::around(Vec2::new(100.0, 100.0), 15.0);
        let b = Aabb::around(Vec2::new(120.0, 110.0), 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_aabb_touching_edges_do_not_overlap() {
        let a = Aabb::around(Vec2::new(100.0, 100.0), 15.0);
        // Ball box starts exactly where the player box ends
        let b = Aabb::around(Vec2::new(125.0, 100.0), 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_player_touches_ball() {
        let mut player = Player::new(Team::Home, Controller::Human);
        let mut ball = Ball::default();
        assert!(!player_touches_ball(&player, &ball));

        player.pos = ball.pos - Vec2::new(20.0, 0.0);
        assert!(player_touches_ball(&player, &ball));

        // Box test: diagonal distance beyond the circles still overlaps
        ball.pos = player.pos + Vec2::new(22.0, 22.0);
        assert!(player_touches_ball(&player, &ball));
    }

    #[test]
    fn test_goal_center_counts() {
        let goal = Goal::new(GoalSide::Left);
        assert!(goal.contains(Vec2::new(10.0, 300.0)));
    }

    #[test]
    fn test_goal_edges_do_not_count() {
        let goal = Goal::new(GoalSide::Left);
        assert!(!goal.contains(Vec2::new(0.0, 300.0)));
        assert!(!goal.contains(Vec2::new(20.0, 300.0)));
        assert!(!goal.contains(Vec2::new(10.0, 250.0)));
        assert!(!goal.contains(Vec2::new(10.0, 350.0)));
    }

    #[test]
    fn test_right_goal() {
        let goal = Goal::new(GoalSide::Right);
        let mut ball = Ball::default();
        assert!(!goal.check_goal(&ball));
        ball.pos = Vec2::new(790.0, 320.0);
        assert!(goal.check_goal(&ball));
    }
}
