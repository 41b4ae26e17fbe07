//! Tests for per-frame parameter evolution

#[cfg(test)]
mod tests {
    use fukudatile::animation::{AnimationState, SweepToggles};
    use fukudatile::tiling::LayoutParams;

    fn all_toggles() -> SweepToggles {
        SweepToggles {
            pulse: true,
            evolve: true,
            breathe: true,
            unfurl: true,
        }
    }

    // Tests a state without sweeps keeps its parameters
    // Verified by advancing disabled sweeps
    #[test]
    fn test_no_toggles_is_static() {
        let params = LayoutParams::default();
        let state = AnimationState::new(params, SweepToggles::default()).expect("valid");

        assert!(!state.sweeps().any());
        let state = state.advance().advance();
        assert_eq!(*state.params(), params);
        assert_eq!(state.frame(), 2);
    }

    // Tests breathing clamps the default maximum and then falls
    // Verified by starting the sweep above its upper limit
    #[test]
    fn test_breathe_clamps_then_falls() {
        let toggles = SweepToggles {
            breathe: true,
            ..SweepToggles::default()
        };
        let state = AnimationState::new(LayoutParams::default(), toggles).expect("valid");
        assert_eq!(state.params().pct_max, 90);

        let state = state.advance();
        assert_eq!(state.params().pct_max, 85);
        assert_eq!(state.params().pct_min, 10);
    }

    // Tests each sweep moves its own parameter by one step
    // Verified by wiring evolve to the strip width
    #[test]
    fn test_each_sweep_moves_its_parameter() {
        let state = AnimationState::new(LayoutParams::default(), all_toggles()).expect("valid");
        let next = state.advance();

        assert_eq!(next.params().num_strips, 49);
        assert_eq!(next.params().angle_end, 85);
        assert_eq!(next.params().strip_width, 11);
        assert_eq!(next.params().pct_max, 85);
        assert_eq!(next.params().angle_start, -90);
        assert!((next.params().step_size - 1.0).abs() < f64::EPSILON);
    }

    // Tests breathing is refused when no room is left above the minimum
    // Verified by building the sweep with collapsed limits
    #[test]
    fn test_breathe_without_room_fails() {
        let params = LayoutParams {
            pct_min: 88,
            ..LayoutParams::default()
        };
        let toggles = SweepToggles {
            breathe: true,
            ..SweepToggles::default()
        };

        assert!(AnimationState::new(params, toggles).is_err());
    }

    // Tests invalid starting parameters are rejected
    // Verified by validating only after clamping
    #[test]
    fn test_invalid_start_rejected() {
        let params = LayoutParams {
            strip_width: 0,
            ..LayoutParams::default()
        };
        assert!(AnimationState::new(params, SweepToggles::default()).is_err());
    }

    // Tests every frame of a long animation keeps valid parameters
    // Verified by letting the end angle reach the start angle
    #[test]
    fn test_long_animation_stays_valid() {
        let mut state = AnimationState::new(LayoutParams::default(), all_toggles()).expect("valid");
        for _ in 0..500 {
            state = state.advance();
            assert!(state.params().validate().is_ok(), "{:?}", state.params());
        }
        assert_eq!(state.frame(), 500);
    }
}
