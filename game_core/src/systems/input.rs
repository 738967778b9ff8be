use hecs::World;

use crate::{Config, InputQueue, Paddle};

/// Apply queued pointer targets to paddles
///
/// Later inputs for the same side win; every target is clamped so the paddle
/// stays fully inside the arena.
pub fn ingest_inputs(world: &mut World, input_queue: &mut InputQueue, config: &Config) {
    for input in input_queue.drain() {
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.side == input.side {
                paddle.y = config.clamp_paddle_y(input.y);
            }
        }
    }
}
