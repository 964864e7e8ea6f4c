pub mod arena;
pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod input;
pub mod params;
pub mod resources;
pub mod scheduler;
pub mod sound;
pub mod systems;
pub mod view;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use input::*;
pub use params::*;
pub use resources::*;
pub use scheduler::*;
pub use sound::*;
pub use view::*;

use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation.
///
/// Returns the winning side if this frame produced the winning point.
pub fn step(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    input: &mut InputState,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    // Clear events at start of frame
    events.clear();

    // 1. Move paddles from input and AI
    move_paddles(world, input, arena, config);

    // 2. Move ball
    move_ball(world);

    // 3. Check collisions (walls, then paddles)
    check_collisions(world, arena, config, events);

    // 4. Check scoring (ball exited arena)
    check_scoring(world, arena, score, events, rng, config)
}

/// Helper to create a paddle entity. The left paddle is human-driven.
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    let controller = match side {
        Side::Left => Controller::Human,
        Side::Right => Controller::Ai,
    };
    world.spawn((Paddle::new(side, y), controller))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
