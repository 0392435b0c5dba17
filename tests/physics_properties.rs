//! Property tests for hit detection, the arena and AI prediction

use std::cell::RefCell;

use glam::IVec2;
use proptest::prelude::*;

use rally_core::sim::{
    Arena, ArtificialIntelligence, Ball, Collision, HitDetector, Rect, Side, SweptAabb,
};
use rally_core::Tuning;

/// Records the candidate sets the arena offers and reports no contact
#[derive(Default)]
struct SpyDetector {
    calls: RefCell<Vec<Vec<Rect>>>,
}

impl HitDetector for SpyDetector {
    fn check_obstructions(
        &self,
        candidates: &[Rect],
        _mover: Rect,
        _final_position: IVec2,
    ) -> Option<Collision> {
        self.calls.borrow_mut().push(candidates.to_vec());
        None
    }
}

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (-200..200i32, -200..200i32, 1..60i32, 1..60i32)
        .prop_map(|(x, y, width, height)| Rect::new(x, y, width, height))
}

fn speed_strategy() -> impl Strategy<Value = f64> {
    (1.0f64..8.0, any::<bool>()).prop_map(|(speed, left)| if left { -speed } else { speed })
}

proptest! {
    #[test]
    fn detection_is_pure(
        candidates in prop::collection::vec(rect_strategy(), 0..8),
        mover in rect_strategy(),
        to in (-300..300i32, -300..300i32),
    ) {
        let target = IVec2::new(to.0, to.1);
        let first = SweptAabb.check_obstructions(&candidates, mover, target);
        let second = SweptAabb.check_obstructions(&candidates, mover, target);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn earliest_candidate_is_reported(
        candidates in prop::collection::vec(rect_strategy(), 1..8),
        mover in rect_strategy(),
        to in (-300..300i32, -300..300i32),
    ) {
        let target = IVec2::new(to.0, to.1);
        let start = mover.position();

        let Some(best) = SweptAabb.check_obstructions(&candidates, mover, target) else {
            // Nothing in the set may be struck on its own either
            for candidate in &candidates {
                prop_assert!(SweptAabb.check_obstructions(&[*candidate], mover, target).is_none());
            }
            return Ok(());
        };

        prop_assert!(candidates.contains(&best.obstruction));
        let best_offset = (best.point - start).abs();
        for candidate in &candidates {
            if let Some(hit) = SweptAabb.check_obstructions(&[*candidate], mover, target) {
                let offset = (hit.point - start).abs();
                prop_assert!(best_offset.x <= offset.x && best_offset.y <= offset.y);
            }
        }
    }

    #[test]
    fn contact_point_does_not_overlap_obstruction(
        obstacle in rect_strategy(),
        mover in rect_strategy(),
        to in (-300..300i32, -300..300i32),
    ) {
        // Only meaningful when the mover starts clear of the obstacle
        prop_assume!(!mover.intersects(&obstacle));
        let target = IVec2::new(to.0, to.1);

        if let Some(hit) = SweptAabb.check_obstructions(&[obstacle], mover, target) {
            prop_assert!(!mover.translated_to(hit.point).intersects(&obstacle));
        }
    }

    #[test]
    fn left_wall_is_never_a_candidate_when_moving_right(
        start in (60..400i32, 60..400i32),
        dx in 1..10i32,
        dy in -5..5i32,
    ) {
        let arena = Arena::with_detector(Tuning::default(), SpyDetector::default());
        let ball = Ball::new(IVec2::new(start.0, start.1), arena.tuning(), 1);
        let [_, left_wall, _, _] = arena.walls();

        arena.ball_collision(&ball, IVec2::new(start.0 + dx, start.1 + dy));

        let calls = arena.detector().calls.borrow();
        prop_assert_eq!(calls.len(), 1);
        prop_assert!(!calls[0].contains(&left_wall));
    }

    #[test]
    fn prediction_never_touches_the_live_ball(
        start in (60..460i32, 60..480i32),
        x_speed in speed_strategy(),
        y_speed in -4..5i32,
        seed in any::<u64>(),
    ) {
        let tuning = Tuning::default();
        let arena = Arena::new(tuning.clone());
        let mut ai = ArtificialIntelligence::new(1, &tuning);
        let mut ball = Ball::new(IVec2::new(start.0, start.1), &tuning, seed);
        ball.set_x_speed(x_speed);
        ball.set_y_speed(y_speed);
        let before = ball.clone();

        ai.predict_next_y(&ball, &arena);

        prop_assert_eq!(ball, before);
    }

    #[test]
    fn prediction_terminates_within_diagonal(
        start in (40..490i32, 40..510i32),
        x_speed in speed_strategy(),
        y_speed in -4..5i32,
        seed in any::<u64>(),
    ) {
        let tuning = Tuning::default();
        let arena = Arena::new(tuning.clone());
        let mut ai = ArtificialIntelligence::new(1, &tuning);
        let mut ball = Ball::new(IVec2::new(start.0, start.1), &tuning, seed);
        ball.set_x_speed(x_speed);
        ball.set_y_speed(y_speed);

        let prediction = ai.predict_next_y(&ball, &arena);

        prop_assert!(prediction.is_some());
        let prediction = prediction.unwrap();
        prop_assert!(prediction.steps <= tuning.arena_diagonal());
        prop_assert_eq!(ai.next_y(), prediction.y);
    }

    #[test]
    fn paddle_face_rebound_reverses_and_accelerates(
        row in 0..70i32,
        speed in 1.0f64..8.0,
        seed in any::<u64>(),
    ) {
        let tuning = Tuning::default();
        let arena = Arena::new(tuning.clone());
        let paddle = arena.paddle(Side::Right).rect();
        // Touching the paddle's face, moving into it
        let mut ball = Ball::new(
            IVec2::new(paddle.x - tuning.ball_dimension, paddle.y + row),
            &tuning,
            seed,
        );
        ball.set_x_speed(speed);
        ball.set_y_speed(0);

        let hit = ball.advance(&arena);

        prop_assert!(hit.is_some());
        let hit = hit.unwrap();
        prop_assert_eq!(hit.obstruction, paddle);
        prop_assert!(!hit.game_ending);
        prop_assert!(ball.x_speed() < 0.0);
        prop_assert!(ball.x_speed().abs() > speed);
        prop_assert!(ball.y_speed().abs() < tuning.max_vertical_speed);
    }

    #[test]
    fn wall_rebound_only_flips_vertical_speed(
        x in 80..440i32,
        x_speed in speed_strategy(),
        y_speed in 1..5i32,
        seed in any::<u64>(),
    ) {
        let tuning = Tuning::default();
        let arena = Arena::new(tuning.clone());
        let top = arena.walls()[0];
        // Touching the underside of the top wall, moving up into it
        let mut ball = Ball::new(IVec2::new(x, top.bottom()), &tuning, seed);
        ball.set_x_speed(x_speed);
        ball.set_y_speed(-y_speed);

        let hit = ball.advance(&arena);

        prop_assert!(hit.is_some());
        prop_assert_eq!(hit.unwrap().obstruction, top);
        prop_assert_eq!(ball.x_speed(), x_speed);
        prop_assert_eq!(ball.y_speed(), y_speed);
    }
}
