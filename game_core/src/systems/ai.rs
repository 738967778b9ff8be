use crate::{AiControlled, Ball, Config, Paddle};
use hecs::World;

/// Track the ball with the computer paddle
///
/// The paddle chases the ball's height at a fixed speed and holds still while
/// the ball is within `ai_deadzone` of its centre, which is what makes it
/// beatable with steep returns.
pub fn move_ai_paddle(world: &mut World, config: &Config) {
    let ball_y = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => ball.pos.y,
        None => return,
    };

    for (_entity, (paddle, _ai)) in world.query_mut::<(&mut Paddle, &AiControlled)>() {
        if ball_y < paddle.y - config.ai_deadzone {
            paddle.y -= config.ai_speed;
        } else if ball_y > paddle.y + config.ai_deadzone {
            paddle.y += config.ai_speed;
        }
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}
