use crate::{Ball, Config, Paddle, PaddleIntent, Side};
use hecs::World;

/// Reactive tracking policy for the AI paddle.
///
/// Returns the intent for one tick: step toward the ball's vertical center
/// while the ball approaches the AI side, otherwise stay put. The step is
/// capped at the remaining distance so the paddle settles on the ball's
/// center instead of oscillating around it.
pub fn ai_intent(
    paddle_center_y: f32,
    ball_center_y: f32,
    ball_dx: f32,
    config: &Config,
) -> PaddleIntent {
    if ball_dx <= 0.0 {
        return PaddleIntent::idle();
    }

    let gap = ball_center_y - paddle_center_y;
    if gap == 0.0 {
        return PaddleIntent::idle();
    }

    let dir = if gap > 0.0 { 1 } else { -1 };
    PaddleIntent::toward(dir, config.ai_speed().min(gap.abs()))
}

/// Set the right paddle's intent from the AI policy
pub fn drive_ai_paddle(world: &mut World, config: &Config) {
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .map(|(_e, ball)| (ball.rect.center().y, ball.vel.x))
    };

    let (ball_center_y, ball_dx) = match ball_data {
        Some(data) => data,
        None => return, // No ball in world
    };

    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == Side::Right {
            *intent = ai_intent(paddle.center_y(), ball_center_y, ball_dx, config);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::move_paddles;
    use crate::{create_ball, create_paddle, Rect};
    use glam::Vec2;

    #[test]
    fn test_ai_idle_when_ball_moves_away() {
        let config = Config::new();
        assert_eq!(ai_intent(300.0, 100.0, -6.0, &config), PaddleIntent::idle());
        assert_eq!(ai_intent(300.0, 100.0, 0.0, &config), PaddleIntent::idle());
    }

    #[test]
    fn test_ai_idle_when_aligned() {
        let config = Config::new();
        assert_eq!(ai_intent(300.0, 300.0, 6.0, &config), PaddleIntent::idle());
    }

    #[test]
    fn test_ai_moves_toward_ball_at_reduced_speed() {
        let config = Config::new();
        let down = ai_intent(300.0, 400.0, 6.0, &config);
        assert_eq!(down, PaddleIntent::toward(1, 4.0));

        let up = ai_intent(300.0, 100.0, 6.0, &config);
        assert_eq!(up, PaddleIntent::toward(-1, 4.0));
    }

    #[test]
    fn test_ai_final_step_lands_on_ball_center() {
        let config = Config::new();
        assert_eq!(
            ai_intent(300.0, 301.5, 6.0, &config),
            PaddleIntent::toward(1, 1.5)
        );
    }

    #[test]
    fn test_ai_paddle_converges_monotonically() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Right, &config);

        let ball_rect =
            Rect::from_center_size(Vec2::new(600.0, 137.0), Vec2::splat(config.ball_size));
        create_ball(&mut world, ball_rect, Vec2::new(6.0, 0.0));

        let paddle_y = |world: &World| {
            world
                .query::<&Paddle>()
                .iter()
                .next()
                .map(|(_e, p)| p.center_y())
                .expect("paddle exists")
        };

        let mut last_gap = (paddle_y(&world) - 137.0).abs();
        for _ in 0..100 {
            drive_ai_paddle(&mut world, &config);
            move_paddles(&mut world, &config);
            let gap = (paddle_y(&world) - 137.0).abs();
            assert!(
                gap < last_gap || gap == 0.0,
                "Gap should shrink each tick until aligned: {last_gap} -> {gap}"
            );
            last_gap = gap;
        }
        assert_eq!(last_gap, 0.0, "AI paddle should settle on the ball");
    }

    #[test]
    fn test_ai_ignores_left_paddle() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, &config);
        create_ball(&mut world, config.ball_spawn(), Vec2::new(6.0, 0.0));

        drive_ai_paddle(&mut world, &config);

        for (_e, intent) in world.query::<&PaddleIntent>().iter() {
            assert_eq!(*intent, PaddleIntent::idle());
        }
    }
}
