use crate::{Ball, Config, Events, GameRng, Score, Side, Trail};
use hecs::World;

/// Check if the ball left the arena and award the point
///
/// The scorer's opponent receives the next serve. When the point decides the
/// match, `events.winner` is set; the phase change is left to the caller.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, (ball, trail)) in world.query_mut::<(&mut Ball, &mut Trail)>() {
        let scorer = if ball.pos.x < 0.0 {
            Side::Ai
        } else if ball.pos.x > config.arena_width {
            Side::Player
        } else {
            continue;
        };

        score.increment(scorer);
        events.scored = Some(scorer);
        log::info!("{:?} scores ({} - {})", scorer, score.player, score.ai);

        if let Some(winner) = score.has_winner(config.max_score) {
            events.winner = Some(winner);
        }

        ball.serve(scorer.opponent(), config, rng);
        trail.clear();
        log::debug!("serve toward {:?}", scorer.opponent());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Ball, Config, Events, GameRng, Score};
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, Score, Events, GameRng) {
        let world = hecs::World::new();
        let config = Config::new();
        let score = Score::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, score, events, rng)
    }

    #[test]
    fn test_ai_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-0.1, 200.0), Vec2::new(-6.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.ai, 1, "AI should score");
        assert_eq!(score.player, 0);
        assert_eq!(events.scored, Some(Side::Ai));
        assert_eq!(events.winner, None);
    }

    #[test]
    fn test_player_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(config.arena_width + 0.1, 200.0),
            Vec2::new(6.0, 0.0),
        );

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.player, 1, "Player should score");
        assert_eq!(score.ai, 0);
        assert_eq!(events.scored, Some(Side::Player));
    }

    #[test]
    fn test_ball_is_served_to_the_conceding_side() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        let entity = create_ball(&mut world, Vec2::new(-0.1, 200.0), Vec2::new(-6.0, 0.0));
        world
            .get::<&mut Trail>(entity)
            .unwrap()
            .push(Vec2::new(1.0, 1.0), config.trail_length);

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        let ball = *world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.pos, config.arena_center(), "Ball back on the centre spot");
        assert!(ball.vel.x < 0.0, "Player conceded, so the serve goes left");
        assert!(world.get::<&Trail>(entity).unwrap().is_empty(), "Trail cleared");
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(350.0, 210.0), Vec2::new(6.0, 3.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score, Score::new());
        assert!(events.is_empty(), "No scoring events");
    }

    #[test]
    fn test_match_point_sets_winner() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        score.player = config.max_score - 1;
        create_ball(
            &mut world,
            Vec2::new(config.arena_width + 1.0, 200.0),
            Vec2::new(6.0, 0.0),
        );

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.player, config.max_score);
        assert_eq!(events.winner, Some(Side::Player));
    }
}
