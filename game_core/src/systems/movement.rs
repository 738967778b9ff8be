use crate::{Ball, Config, Paddle, Trail};
use hecs::World;

/// Advance the ball one tick and record where it went
pub fn move_ball(world: &mut World, config: &Config) {
    for (_entity, (ball, trail)) in world.query_mut::<(&mut Ball, &mut Trail)>() {
        ball.pos += ball.vel;
        trail.push(ball.pos, config.trail_length);
    }
}

/// Keep every paddle fully inside the arena
pub fn clamp_paddles(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}
