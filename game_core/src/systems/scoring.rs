use crate::{Ball, Config, Events, GameRng, Score, Side};
use hecs::World;

/// Side that wins the point when the ball reaches a side edge
pub fn scoring_side(ball: &Ball, config: &Config) -> Option<Side> {
    if ball.rect.left() <= 0.0 {
        Some(Side::Right)
    } else if ball.rect.right() >= config.width {
        Some(Side::Left)
    } else {
        None
    }
}

/// Check if ball left the arena (scoring)
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(side) = scoring_side(ball, config) {
            score.increment(side);
            events.scored = Some(side);
            tracing::debug!(
                scorer = ?side,
                left = score.left,
                right = score.right,
                "point scored"
            );

            // Reset ball
            ball.reset(config, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Rect};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Score, Events, GameRng) {
        let world = World::new();
        let config = Config::new();
        let score = Score::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, score, events, rng)
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Rect::new(-1.0, 300.0, 20.0, 20.0), Vec2::new(-6.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert_eq!(events.scored, Some(Side::Right));
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Rect::new(781.0, 300.0, 20.0, 20.0), Vec2::new(6.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0, "Right player should not score");
        assert_eq!(events.scored, Some(Side::Left));
    }

    #[test]
    fn test_touching_the_edge_scores() {
        let config = Config::new();
        let ball = Ball::new(Rect::new(0.0, 300.0, 20.0, 20.0), Vec2::ZERO);
        assert_eq!(scoring_side(&ball, &config), Some(Side::Right));
        let ball = Ball::new(Rect::new(780.0, 300.0, 20.0, 20.0), Vec2::ZERO);
        assert_eq!(scoring_side(&ball, &config), Some(Side::Left));
        let ball = Ball::new(Rect::new(0.5, 300.0, 20.0, 20.0), Vec2::ZERO);
        assert_eq!(scoring_side(&ball, &config), None);
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Rect::new(-1.0, 300.0, 20.0, 20.0), Vec2::new(-6.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        // Verify ball was reset to center
        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.rect.center(), config.center());
            assert!(
                (ball.vel.length() - config.ball_speed).abs() < 1e-4,
                "Ball should be relaunched at BALL_SPEED"
            );
        }
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, config.ball_spawn(), Vec2::new(6.0, 4.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score, Score::new(), "No score when ball in bounds");
        assert_eq!(events.scored, None, "No scoring events");
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();

        for _ in 0..2 {
            world.clear();
            events.clear();
            create_ball(&mut world, Rect::new(790.0, 300.0, 20.0, 20.0), Vec2::new(6.0, 0.0));
            check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);
        }

        assert_eq!(score.left, 2, "Scores should accumulate");
        assert_eq!(score.right, 0);
    }
}
