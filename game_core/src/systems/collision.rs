use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Outcome of a ball bouncing off a paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReflectionResult {
    pub side: Side,
    /// Hit position relative to the paddle center, -1 (top) to 1 (bottom)
    pub offset: f32,
    /// Outgoing vertical launch angle in radians
    pub angle: f32,
}

/// Bounce the ball off the top or bottom wall.
///
/// Flips the vertical velocity and pushes the ball back inside the playfield,
/// so a ball resting on the boundary cannot flip twice. Returns true on a bounce.
pub fn reflect_off_wall(ball: &mut Ball, config: &Config) -> bool {
    if ball.rect.top() <= 0.0 {
        ball.rect.pos.y = 0.0;
        if ball.vel.y < 0.0 {
            ball.vel.y = -ball.vel.y;
            return true;
        }
    } else if ball.rect.bottom() >= config.height {
        ball.rect.pos.y = config.height - ball.rect.size.y;
        if ball.vel.y > 0.0 {
            ball.vel.y = -ball.vel.y;
            return true;
        }
    }
    false
}

/// Reflect the ball off a paddle it overlaps.
///
/// The outgoing angle depends on where the ball struck, up to
/// `max_bounce_angle` at the paddle ends. Horizontal speed keeps its
/// magnitude and reverses; vertical speed is rebuilt from `ball_speed`.
/// A ball already moving away from the paddle is left alone.
pub fn resolve_paddle_collision(
    ball: &mut Ball,
    paddle: &Paddle,
    config: &Config,
) -> Option<ReflectionResult> {
    if !ball.rect.overlaps(&paddle.rect) {
        return None;
    }

    let approaching = match paddle.side {
        Side::Left => ball.vel.x < 0.0,
        Side::Right => ball.vel.x > 0.0,
    };
    if !approaching {
        return None;
    }

    let half_height = paddle.rect.size.y / 2.0;
    let offset = ((ball.rect.center().y - paddle.center_y()) / half_height).clamp(-1.0, 1.0);
    let angle = offset * config.max_bounce_angle;

    ball.vel.x = -ball.vel.x;
    ball.vel.y = config.ball_speed * angle.sin();

    Some(ReflectionResult {
        side: paddle.side,
        offset,
        angle,
    })
}

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddles first so the ball can be borrowed mutably
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| *p)
        .collect();
    paddles.sort_by_key(|p| p.side != Side::Left);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if reflect_off_wall(ball, config) {
            events.ball_hit_wall = true;
        }

        for paddle in &paddles {
            if let Some(hit) = resolve_paddle_collision(ball, paddle, config) {
                tracing::trace!(side = ?hit.side, offset = hit.offset, "ball hit paddle");
                events.ball_hit_paddle = Some(hit.side);
            }
        }
    }
}
