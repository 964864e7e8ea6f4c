use crate::{Arena, Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Whether the ball's leading edge has entered the paddle's band
/// while its centre is level with the paddle
fn touches_paddle(ball: &Ball, paddle: &Paddle, arena: &Arena, config: &Config) -> bool {
    let radius = config.ball_radius;
    let in_band = match paddle.side {
        Side::Left => ball.pos.x - radius < config.paddle_x(Side::Left, arena) + config.paddle_width,
        Side::Right => ball.pos.x + radius > config.paddle_x(Side::Right, arena),
    };
    in_band && paddle.spans(ball.pos.y, arena)
}

/// Check ball collisions with walls and paddles
///
/// Walls reflect the vertical velocity without pushing the ball back inside.
/// Paddles reverse the horizontal velocity and replace the vertical velocity
/// with a deflection proportional to the hit offset from the paddle centre.
/// There is no "already bounced" guard: a ball that lingers inside the
/// paddle band can bounce again on the next frame.
pub fn check_collisions(world: &mut World, arena: &Arena, config: &Config, events: &mut Events) {
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom walls
        let radius = config.ball_radius;
        if ball.pos.y - radius < 0.0 || ball.pos.y + radius > arena.height {
            ball.vel.y = -ball.vel.y;
            events.wall_hit();
        }

        for paddle in &paddles {
            if touches_paddle(ball, paddle, arena, config) {
                ball.vel.x = -ball.vel.x;
                ball.vel.y = (ball.pos.y - paddle.center_y(arena)) * config.ball_deflection_factor;
                events.paddle_hit();
            }
        }
    }
}
