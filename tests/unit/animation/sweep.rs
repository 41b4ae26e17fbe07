//! Tests for triangle-wave parameter sweeps

#[cfg(test)]
mod tests {
    use fukudatile::TilingError;
    use fukudatile::animation::sweep::{Direction, TriangleSweep};

    // Tests the sweep turns at its upper limit instead of overshooting
    // Verified by reversing after the step instead of before it
    #[test]
    fn test_turns_at_upper_limit() {
        let sweep = TriangleSweep::new(48_u32, 1, 5, 50).expect("valid sweep");

        let sweep = sweep.advance();
        assert_eq!(sweep.value(), 49);
        let sweep = sweep.advance();
        assert_eq!(sweep.value(), 50);
        assert_eq!(sweep.direction(), Direction::Rising);
        let sweep = sweep.advance();
        assert_eq!(sweep.value(), 49);
        assert_eq!(sweep.direction(), Direction::Falling);
    }

    // Tests the sweep turns back up at its lower limit
    // Verified by letting the value fall below the lower limit
    #[test]
    fn test_turns_at_lower_limit() {
        let mut sweep = TriangleSweep::new(50_u32, 5, 15, 90).expect("valid sweep");
        let mut values = Vec::new();
        for _ in 0..40 {
            sweep = sweep.advance();
            values.push(sweep.value());
        }

        let low = values.iter().copied().min().unwrap_or_default();
        assert_eq!(low, 15);
        let bottom = values.iter().position(|&v| v == 15).unwrap_or_default();
        assert_eq!(values.get(bottom + 1), Some(&20));
    }

    // Tests a long run never leaves the configured limits
    // Verified by clamping only on construction
    #[test]
    fn test_stays_within_limits() {
        let mut sweep = TriangleSweep::new(-90_i32, 5, -80, 90).expect("valid sweep");
        assert_eq!(sweep.value(), -80);

        for _ in 0..1000 {
            sweep = sweep.advance();
            let (low, high) = sweep.bounds();
            assert!((low..=high).contains(&sweep.value()));
        }
    }

    // Tests the end angle starting at its upper limit first falls
    // Verified by stepping past the limit on the first tick
    #[test]
    fn test_starting_at_limit_falls() {
        let sweep = TriangleSweep::new(90_i32, 5, -80, 90).expect("valid sweep");
        let sweep = sweep.advance();

        assert_eq!(sweep.value(), 85);
        assert_eq!(sweep.direction(), Direction::Falling);
    }

    // Tests a range narrower than one step cannot underflow unsigned values
    // Verified by subtracting the step unconditionally
    #[test]
    fn test_narrow_unsigned_range() {
        let mut sweep = TriangleSweep::new(1_u32, 5, 0, 3).expect("valid sweep");
        for _ in 0..10 {
            sweep = sweep.advance();
            assert!(sweep.value() <= 3);
        }
    }

    // Tests construction rejects collapsed limits and non-positive steps
    // Verified by accepting equal limits
    #[test]
    fn test_rejects_invalid_sweeps() {
        assert!(matches!(
            TriangleSweep::new(10_u32, 1, 20, 20),
            Err(TilingError::InvalidParameter {
                parameter: "sweep bounds",
                ..
            })
        ));
        assert!(matches!(
            TriangleSweep::new(10_u32, 0, 5, 20),
            Err(TilingError::InvalidParameter {
                parameter: "sweep step",
                ..
            })
        ));
        assert!(TriangleSweep::new(0_i32, -5, -10, 10).is_err());
    }

    // Tests the initial value is clamped into the limits
    // Verified by storing the raw initial value
    #[test]
    fn test_initial_value_clamped() {
        let sweep = TriangleSweep::new(100_u32, 5, 15, 90).expect("valid sweep");
        assert_eq!(sweep.value(), 90);
        assert_eq!(sweep.bounds(), (15, 90));
        assert_eq!(sweep.direction(), Direction::Rising);
    }
}
