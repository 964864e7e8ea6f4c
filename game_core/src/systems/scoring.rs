use crate::{Arena, Ball, Config, Events, GameRng, Score, Side};
use hecs::World;
use log::debug;

/// Check if ball left the arena (scoring)
///
/// Returns the winner when this point reaches the winning score. A winning
/// ball is left where it is; any other point re-serves from the centre.
pub fn check_scoring(
    world: &mut World,
    arena: &Arena,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    config: &Config,
) -> Option<Side> {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.x < 0.0 {
            Side::Right
        } else if ball.pos.x > arena.width {
            Side::Left
        } else {
            continue;
        };

        score.increment(scorer);
        events.point(scorer);
        debug!(
            "{:?} scored, score {} - {}",
            scorer, score.left, score.right
        );

        if score.get(scorer) >= config.win_score {
            return Some(scorer);
        }
        ball.serve(arena, config, rng);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Sound};
    use glam::Vec2;
    use proptest::prelude::*;

    fn setup_world() -> (World, Config, Arena, Score, Events, GameRng) {
        let world = World::new();
        let config = Config::new();
        let arena = Arena::new(600.0, 360.0).unwrap();
        let score = Score::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, arena, score, events, rng)
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
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, arena, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-0.1, 120.0), Vec2::new(-5.0, 0.0));

        let winner = check_scoring(&mut world, &arena, &mut score, &mut events, &mut rng, &config);

        assert_eq!(winner, None);
        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert_eq!(events.scored, Some(Side::Right));
        assert_eq!(events.sounds, vec![Sound::Score]);
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, arena, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(arena.width + 0.1, 120.0), Vec2::new(5.0, 0.0));

        check_scoring(&mut world, &arena, &mut score, &mut events, &mut rng, &config);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0, "Right player should not score");
        assert_eq!(events.scored, Some(Side::Left));
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, config, arena, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-0.1, 120.0), Vec2::new(-5.0, 0.0));

        check_scoring(&mut world, &arena, &mut score, &mut events, &mut rng, &config);

        let ball = ball_of(&world);
        assert_eq!(ball.pos, arena.center(), "Ball should reset to center");
        assert_eq!(ball.vel.x.abs(), config.ball_speed_initial);
    }

    #[test]
    fn test_no_scoring_when_ball_on_goal_line() {
        let (mut world, config, arena, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(0.0, 120.0), Vec2::new(-5.0, 0.0));
        create_ball(&mut world, Vec2::new(arena.width, 120.0), Vec2::new(5.0, 0.0));

        check_scoring(&mut world, &arena, &mut score, &mut events, &mut rng, &config);

        assert_eq!(score, Score::new(), "Goal lines themselves are in bounds");
        assert!(events.is_empty(), "No scoring events");
    }

    #[test]
    fn test_winning_point_ends_without_reset() {
        let (mut world, config, arena, mut score, mut events, mut rng) = setup_world();
        score.left = 4;
        let exit = Vec2::new(arena.width + 3.0, 40.0);
        create_ball(&mut world, exit, Vec2::new(5.0, 1.0));

        let winner = check_scoring(&mut world, &arena, &mut score, &mut events, &mut rng, &config);

        assert_eq!(winner, Some(Side::Left));
        assert_eq!(score.left, 5);
        assert_eq!(ball_of(&world).pos, exit, "Winning ball is not re-served");
    }

    #[test]
    fn test_fourth_point_does_not_win() {
        let (mut world, config, arena, mut score, mut events, mut rng) = setup_world();
        score.right = 3;
        create_ball(&mut world, Vec2::new(-1.0, 40.0), Vec2::new(-5.0, 0.0));

        let winner = check_scoring(&mut world, &arena, &mut score, &mut events, &mut rng, &config);

        assert_eq!(winner, None);
        assert_eq!(score.right, 4);
    }

    proptest! {
        #[test]
        fn prop_scores_only_grow_one_side_at_a_time(xs in prop::collection::vec(-50.0f32..650.0, 1..40)) {
            let (mut world, config, arena, mut score, mut events, mut rng) = setup_world();
            let ball = create_ball(&mut world, arena.center(), Vec2::ZERO);

            for x in xs {
                world.get::<&mut Ball>(ball).unwrap().pos.x = x;
                let before = score;
                events.clear();

                check_scoring(&mut world, &arena, &mut score, &mut events, &mut rng, &config);

                prop_assert!(score.left >= before.left && score.right >= before.right);
                let gained = (score.left - before.left) + (score.right - before.right);
                prop_assert!(gained <= 1);
                prop_assert_eq!(gained == 1, events.scored.is_some());
            }
        }
    }
}
