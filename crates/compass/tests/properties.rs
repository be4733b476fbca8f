//! Algebraic invariants of the direction operations.

use approx::assert_relative_eq;
use compass::{Direction, GridVec2, Vec2};
use proptest::prelude::*;
use proptest::sample::select;

fn any_real_direction() -> impl Strategy<Value = Direction> {
    select(Direction::ALL.to_vec())
}

proptest! {
    #[test]
    fn reverse_is_an_involution(d in any_real_direction()) {
        prop_assert_eq!(d.reverse().reverse(), d);
    }

    #[test]
    fn reverse_negates_the_grid_step(d in any_real_direction()) {
        prop_assert_eq!(d.reverse().grid_vector(), -d.grid_vector());
    }

    #[test]
    fn clockwise_cycle_length_is_exactly_eight(d in any_real_direction()) {
        let mut current = d;
        for step in 1..8 {
            current = current.clockwise();
            prop_assert_ne!(current, d, "returned to start after {} steps", step);
        }
        prop_assert_eq!(current.clockwise(), d);
    }

    #[test]
    fn rotations_are_inverses(d in any_real_direction()) {
        prop_assert_eq!(d.clockwise().counter_clockwise(), d);
        prop_assert_eq!(d.counter_clockwise().clockwise(), d);
    }

    #[test]
    fn four_clockwise_steps_reverse(d in any_real_direction()) {
        let mut current = d;
        for _ in 0..4 {
            current = current.clockwise();
        }
        prop_assert_eq!(current, d.reverse());
    }

    #[test]
    fn unit_vectors_have_unit_length(d in any_real_direction()) {
        assert_relative_eq!(d.unit_vector().length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn unit_vector_is_its_own_nearest_direction(d in any_real_direction()) {
        prop_assert_eq!(Direction::nearest(Vec2::ZERO, d.unit_vector()), d);
    }

    #[test]
    fn between_agrees_with_best_match_on_single_steps(d in any_real_direction()) {
        let to = d.grid_vector();
        prop_assert_eq!(Direction::between(GridVec2::ZERO, to), d);
        prop_assert_eq!(Direction::nearest_grid(GridVec2::ZERO, to), d);
    }

    #[test]
    fn between_ignores_step_magnitude(d in any_real_direction(), scale in 1..64i32) {
        let to = d.grid_vector() * scale;
        prop_assert_eq!(Direction::between(GridVec2::ZERO, to), d);
    }

    #[test]
    fn between_is_translation_invariant(
        d in any_real_direction(),
        x in -100..100i32,
        y in -100..100i32,
    ) {
        let from = GridVec2::new(x, y);
        prop_assert_eq!(Direction::between(from, from + d.grid_vector()), d);
    }

    #[test]
    fn grid_steps_round_trip_through_try_from(d in any_real_direction()) {
        prop_assert_eq!(Direction::try_from(d.grid_vector()), Ok(d));
    }
}

#[test]
fn none_has_a_zero_vector_and_fixed_rotations() {
    assert_eq!(Direction::None.unit_vector().length(), 0.0);
    assert_eq!(Direction::None.grid_vector(), GridVec2::ZERO);
    assert_eq!(Direction::None.reverse(), Direction::None);
    assert_eq!(Direction::None.clockwise(), Direction::None);
    assert_eq!(Direction::None.counter_clockwise(), Direction::None);
}
