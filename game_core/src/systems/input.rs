use hecs::World;
use proto::{HeldKeys, MatchMode};

use crate::components::*;
use crate::Config;

/// Turn held keys into movement intents for the human-controlled paddles.
///
/// The left paddle always belongs to a human. The right paddle only reads the
/// keyboard in two-player mode; in AI mode its intent is left to the AI system.
pub fn ingest_held_keys(world: &mut World, keys: HeldKeys, mode: MatchMode, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        let dir = match (paddle.side, mode) {
            (Side::Left, _) => keys.left_dir(),
            (Side::Right, MatchMode::TwoPlayer) => keys.right_dir(),
            (Side::Right, MatchMode::Ai) => continue,
        };
        *intent = PaddleIntent::toward(dir, config.paddle_speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;

    fn intent_for(world: &World, side: Side) -> PaddleIntent {
        world
            .query::<(&Paddle, &PaddleIntent)>()
            .iter()
            .find(|(_e, (p, _))| p.side == side)
            .map(|(_e, (_, intent))| *intent)
            .expect("paddle exists")
    }

    #[test]
    fn test_left_paddle_follows_keys_in_both_modes() {
        let config = Config::new();
        for mode in [MatchMode::Ai, MatchMode::TwoPlayer] {
            let mut world = World::new();
            create_paddle(&mut world, Side::Left, &config);
            let keys = HeldKeys {
                left_up: true,
                ..HeldKeys::none()
            };
            ingest_held_keys(&mut world, keys, mode, &config);
            assert_eq!(
                intent_for(&world, Side::Left),
                PaddleIntent::toward(-1, config.paddle_speed)
            );
        }
    }

    #[test]
    fn test_right_keys_ignored_in_ai_mode() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Right, &config);
        let keys = HeldKeys {
            right_down: true,
            ..HeldKeys::none()
        };

        ingest_held_keys(&mut world, keys, MatchMode::Ai, &config);
        assert_eq!(intent_for(&world, Side::Right).dir, 0);

        ingest_held_keys(&mut world, keys, MatchMode::TwoPlayer, &config);
        assert_eq!(intent_for(&world, Side::Right).dir, 1);
    }
}
