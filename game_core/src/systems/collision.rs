use crate::{Ball, Config, Events, GameRng, Paddle, Side};
use hecs::World;
use rand::Rng;

/// Bounce the ball off the top and bottom walls
pub fn check_wall_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let radius = config.ball_radius;
    let height = config.arena_height;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let hits_top = ball.pos.y - radius <= 0.0;
        let hits_bottom = ball.pos.y + radius >= height;
        if !(hits_top || hits_bottom) {
            continue;
        }

        ball.vel.y = -ball.vel.y;
        // Clamp position to prevent sticking
        if hits_top {
            ball.pos.y = radius;
        }
        if hits_bottom {
            ball.pos.y = height - radius;
        }
        events.ball_hit_wall = true;
    }
}

/// Bounce the ball off either paddle
///
/// The outgoing vertical speed depends on where the ball met the paddle: the
/// centre sends it straight back, the edges at up to `deflection` per tick.
pub fn check_paddle_collisions(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Collect paddles first so the ball can be borrowed mutably; player first
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side == Side::Ai);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if touches_paddle(ball, paddle, config) {
                bounce_off_paddle(ball, paddle, config, rng);
                events.ball_hit_paddle = true;
            }
        }
    }
}

/// Ball reaches the paddle's face and overlaps it vertically
pub fn touches_paddle(ball: &Ball, paddle: &Paddle, config: &Config) -> bool {
    let radius = config.ball_radius;
    let overlaps = ball.pos.y + radius >= paddle.top(config)
        && ball.pos.y - radius <= paddle.bottom(config);
    if !overlaps {
        return false;
    }

    let paddle_x = config.paddle_x(paddle.side);
    match paddle.side {
        Side::Player => ball.pos.x - radius <= paddle_x + config.paddle_width,
        Side::Ai => ball.pos.x + radius >= paddle_x,
    }
}

fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config, rng: &mut GameRng) {
    let radius = config.ball_radius;
    let away = paddle.side.opponent().direction();

    ball.vel.x = away * ball.vel.x.abs() * config.ball_speedup;

    // -1 at the top edge, 1 at the bottom edge
    let hit_relative_y = (ball.pos.y - paddle.y) / (config.paddle_height / 2.0);
    let jitter = rng
        .0
        .gen_range(-config.deflection_jitter..config.deflection_jitter);
    ball.vel.y = hit_relative_y * config.deflection + jitter;

    let paddle_x = config.paddle_x(paddle.side);
    ball.pos.x = match paddle.side {
        Side::Player => paddle_x + config.paddle_width + radius + config.paddle_push_out,
        Side::Ai => paddle_x - radius - config.paddle_push_out,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Ball, Config, Events, GameRng};
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, Events, GameRng) {
        (World::new(), Config::new(), Events::new(), GameRng::new(12345))
    }

    fn ball_of(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap()
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events, _) = setup_world();
        create_ball(&mut world, Vec2::new(350.0, 10.0), Vec2::new(6.0, -3.0));

        check_wall_collisions(&mut world, &config, &mut events);

        let ball = ball_of(&world);
        assert!(ball.vel.y > 0.0, "Ball should bounce down");
        assert_eq!(ball.vel.x, 6.0, "X velocity should be unchanged");
        assert_eq!(ball.pos.y, config.ball_radius, "Ball pushed out of wall");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events, _) = setup_world();
        let y = config.arena_height - 5.0;
        create_ball(&mut world, Vec2::new(350.0, y), Vec2::new(6.0, 3.0));

        check_wall_collisions(&mut world, &config, &mut events);

        let ball = ball_of(&world);
        assert!(ball.vel.y < 0.0, "Ball should bounce up");
        assert_eq!(ball.pos.y, config.arena_height - config.ball_radius);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_wall_hit_mid_arena() {
        let (mut world, config, mut events, _) = setup_world();
        create_ball(&mut world, Vec2::new(350.0, 210.0), Vec2::new(6.0, 3.0));

        check_wall_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_of(&world).vel, Vec2::new(6.0, 3.0));
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_player_paddle() {
        let (mut world, config, mut events, mut rng) = setup_world();
        create_paddle(&mut world, Side::Player, 210.0);
        let face = config.paddle_x(Side::Player) + config.paddle_width;
        create_ball(
            &mut world,
            Vec2::new(face + config.ball_radius - 2.0, 210.0),
            Vec2::new(-7.0, 1.0),
        );

        check_paddle_collisions(&mut world, &config, &mut events, &mut rng);

        let ball = ball_of(&world);
        assert!(events.ball_hit_paddle);
        assert!((ball.vel.x - 7.0 * config.ball_speedup).abs() < 1e-4);
        assert!(
            ball.vel.y.abs() <= config.deflection_jitter,
            "Centre hit sends the ball nearly straight back"
        );
        assert!(
            (ball.pos.x - (face + config.ball_radius + config.paddle_push_out)).abs() < 1e-4,
            "Ball pushed in front of the paddle"
        );
    }

    #[test]
    fn test_ball_bounces_off_ai_paddle() {
        let (mut world, config, mut events, mut rng) = setup_world();
        create_paddle(&mut world, Side::Ai, 210.0);
        let face = config.paddle_x(Side::Ai);
        create_ball(
            &mut world,
            Vec2::new(face - config.ball_radius + 2.0, 210.0),
            Vec2::new(7.0, 0.0),
        );

        check_paddle_collisions(&mut world, &config, &mut events, &mut rng);

        let ball = ball_of(&world);
        assert!(events.ball_hit_paddle);
        assert!(ball.vel.x < 0.0, "Ball heads back toward the player");
        assert!(
            (ball.pos.x - (face - config.ball_radius - config.paddle_push_out)).abs() < 1e-4
        );
    }

    #[test]
    fn test_edge_hit_deflects_steeply() {
        let (mut world, config, mut events, mut rng) = setup_world();
        create_paddle(&mut world, Side::Player, 210.0);
        let face = config.paddle_x(Side::Player) + config.paddle_width;
        // Ball centre level with the bottom edge of the paddle
        create_ball(&mut world, Vec2::new(face + 5.0, 260.0), Vec2::new(-7.0, 0.0));

        check_paddle_collisions(&mut world, &config, &mut events, &mut rng);

        let ball = ball_of(&world);
        assert!(ball.vel.y >= config.deflection - config.deflection_jitter);
        assert!(ball.vel.y <= config.deflection + config.deflection_jitter);
    }

    #[test]
    fn test_miss_when_paddle_out_of_reach() {
        let (mut world, config, mut events, mut rng) = setup_world();
        create_paddle(&mut world, Side::Player, 60.0);
        let face = config.paddle_x(Side::Player) + config.paddle_width;
        create_ball(&mut world, Vec2::new(face, 350.0), Vec2::new(-7.0, 0.0));

        check_paddle_collisions(&mut world, &config, &mut events, &mut rng);

        assert!(!events.ball_hit_paddle);
        assert_eq!(ball_of(&world).vel, Vec2::new(-7.0, 0.0));
    }

    #[test]
    fn test_touches_paddle_vertical_overlap_includes_radius() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Ai, 210.0);
        let x = config.paddle_x(Side::Ai);
        let grazing = Ball::new(
            Vec2::new(x, paddle.bottom(&config) + config.ball_radius),
            Vec2::ZERO,
        );
        let clear = Ball::new(
            Vec2::new(x, paddle.bottom(&config) + config.ball_radius + 1.0),
            Vec2::ZERO,
        );
        assert!(touches_paddle(&grazing, &paddle, &config));
        assert!(!touches_paddle(&clear, &paddle, &config));
    }
}
