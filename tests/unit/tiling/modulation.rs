//! Tests for intensity to width modulation and the fan's moving average

#[cfg(test)]
mod tests {
    use fukudatile::tiling::modulation::{
        SMOOTHING_WINDOW_LEN, SmoothingWindow, clamp_to_range, modulate,
    };
    use fukudatile::tiling::params::LayoutParams;

    // Tests black maps to the minimum fraction
    // Verified by omitting the min offset
    #[test]
    fn test_modulate_black_is_minimum() {
        let params = LayoutParams::default();
        assert!((modulate(0.0, &params) - 0.1).abs() < 1e-12);
    }

    // Tests white saturates at the maximum fraction for any pct_max
    // Verified by removing the clamp
    #[test]
    fn test_modulate_white_is_maximum() {
        for pct_max in [100, 80, 35] {
            let params = LayoutParams {
                pct_max,
                ..LayoutParams::default()
            };
            let expected = f64::from(pct_max) / 100.0;
            assert!((modulate(1.0, &params) - expected).abs() < 1e-12);
        }
    }

    // Tests mid-range intensities follow i / (max - min) + min
    // Verified by using i * (max - min) + min
    #[test]
    fn test_modulate_formula() {
        let params = LayoutParams::default();
        let expected = 0.3 / 0.9 + 0.1;
        assert!((modulate(0.3, &params) - expected).abs() < 1e-12);
    }

    // Tests modulation never decreases as intensity grows
    // Verified by inverting the intensity term
    #[test]
    fn test_modulate_monotonic() {
        for (pct_min, pct_max) in [(10, 100), (0, 50), (45, 55)] {
            let params = LayoutParams {
                pct_min,
                pct_max,
                ..LayoutParams::default()
            };
            let mut previous = f64::NEG_INFINITY;
            for step in 0..=200 {
                let value = modulate(f64::from(step) / 200.0, &params);
                assert!(value >= previous, "decrease at step {step}");
                assert!(value >= params.min_fraction() && value <= params.max_fraction());
                previous = value;
            }
        }
    }

    // Tests clamping with upper bound precedence
    // Verified by swapping min and max
    #[test]
    fn test_clamp_to_range() {
        assert!((clamp_to_range(-1.0, 0.2, 0.6) - 0.2).abs() < f64::EPSILON);
        assert!((clamp_to_range(0.4, 0.2, 0.6) - 0.4).abs() < f64::EPSILON);
        assert!((clamp_to_range(3.0, 0.2, 0.6) - 0.6).abs() < f64::EPSILON);
    }

    // Tests the zero-filled window fades in over the first samples
    // Verified by pre-filling the window with the first sample
    #[test]
    fn test_window_warm_up() {
        let params = LayoutParams::default();
        let mut window = SmoothingWindow::new();

        for count in 1..=SMOOTHING_WINDOW_LEN {
            let average = window.push(1.0, &params);
            let expected = count as f64 / SMOOTHING_WINDOW_LEN as f64;
            assert!(
                (average - expected).abs() < 1e-12,
                "sample {count}: got {average}, expected {expected}"
            );
        }
    }

    // Tests a sustained constant input converges to that constant
    // Verified by averaging over six slots
    #[test]
    fn test_window_converges_to_constant() {
        let params = LayoutParams::default();
        let mut window = SmoothingWindow::default();

        for _ in 0..3 {
            window.push(0.9, &params);
        }
        for _ in 0..SMOOTHING_WINDOW_LEN {
            window.push(0.42, &params);
        }
        assert!((window.average() - 0.42).abs() < 1e-12);
    }

    // Tests samples are clamped before they enter the window
    // Verified by clamping the average instead of the sample
    #[test]
    fn test_window_clamps_samples() {
        let params = LayoutParams {
            pct_min: 20,
            pct_max: 60,
            ..LayoutParams::default()
        };
        let mut window = SmoothingWindow::new();

        let first = window.push(0.0, &params);
        assert!((first - 0.2 / 5.0).abs() < 1e-12);

        let second = window.push(1.0, &params);
        assert!((second - (0.2 + 0.6) / 5.0).abs() < 1e-12);
    }

    // Tests the oldest sample leaves the window after five newer ones
    // Verified by never overwriting the first slot
    #[test]
    fn test_window_drops_oldest() {
        let params = LayoutParams::default();
        let mut window = SmoothingWindow::new();

        window.push(1.0, &params);
        for _ in 0..4 {
            window.push(0.5, &params);
        }
        assert!((window.average() - 0.6).abs() < 1e-12);

        let after = window.push(0.5, &params);
        assert!((after - 0.5).abs() < 1e-12);
    }
}
