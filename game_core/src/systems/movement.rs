use crate::{Arena, Ball, Config, Controller, Direction, InputState, Paddle};
use hecs::World;

/// Apply held keys and touch drag to a human paddle, then clamp.
///
/// Up and down are applied independently, so holding both cancels out.
pub fn steer_human(
    paddle: &mut Paddle,
    input: &InputState,
    touch_delta: f32,
    arena: &Arena,
    config: &Config,
) {
    if input.is_held(Direction::Up) {
        paddle.y -= config.paddle_speed;
    }
    if input.is_held(Direction::Down) {
        paddle.y += config.paddle_speed;
    }
    paddle.y += touch_delta * config.touch_sensitivity;
    paddle.y = arena.clamp_paddle_y(paddle.y);
}

/// Follow the ball with a dead zone around the paddle centre, then clamp
pub fn steer_ai(paddle: &mut Paddle, ball_y: f32, arena: &Arena, config: &Config) {
    let center = paddle.center_y(arena);
    if center < ball_y - config.ai_dead_zone {
        paddle.y += config.ai_paddle_speed();
    } else if center > ball_y + config.ai_dead_zone {
        paddle.y -= config.ai_paddle_speed();
    }
    paddle.y = arena.clamp_paddle_y(paddle.y);
}

/// Move every paddle according to its controller
pub fn move_paddles(world: &mut World, input: &mut InputState, arena: &Arena, config: &Config) {
    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.y);
    let touch_delta = input.take_touch_delta();

    for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
        match controller {
            Controller::Human => steer_human(paddle, input, touch_delta, arena, config),
            Controller::Ai => match ball_y {
                Some(ball_y) => steer_ai(paddle, ball_y, arena, config),
                None => paddle.y = arena.clamp_paddle_y(paddle.y),
            },
        }
    }
}

/// Move ball one frame along its velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
