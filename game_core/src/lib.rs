pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod geometry;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use proto::{HeldKeys, MatchMode};
use systems::*;

/// Run one deterministic tick of active play
pub fn step(
    world: &mut World,
    config: &Config,
    mode: MatchMode,
    keys: HeldKeys,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // 1. Ingest inputs (apply to paddle intents)
    ingest_held_keys(world, keys, mode, config);
    if mode == MatchMode::Ai {
        drive_ai_paddle(world, config);
    }

    // 2. Move paddles based on intents
    move_paddles(world, config);

    // 3. Move ball
    move_ball(world);

    // 4. Check collisions (ball vs walls, then paddles)
    check_collisions(world, config, events);

    // 5. Check scoring (ball reached a side edge)
    check_scoring(world, config, score, events, rng);
}

/// Helper to create a paddle entity at its spawn position
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(side, config), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, rect: Rect, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(rect, vel),))
}
