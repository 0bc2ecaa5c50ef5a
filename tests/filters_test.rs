#![cfg(any(feature = "filter-ema", feature = "filter-kalman"))]

#[cfg(feature = "filter-ema")]
mod ema_tests {
    use tmp37_filter::filters::{EmaFilter, EmaState};

    #[test]
    fn ema_initialization() {
        let mut filter = EmaFilter::new(0.01);
        assert_eq!(filter.state(), &EmaState::Uninitialized);

        // First value initializes the filter, no lag
        let out = filter.apply(37.25);
        assert_eq!(out, 37.25);
        assert_eq!(filter.value(), Some(37.25));
    }

    #[test]
    fn ema_step_response() {
        let mut filter = EmaFilter::new(0.5);
        filter.apply(0.0);

        // Step from 0.0 to 10.0
        let out1 = filter.apply(10.0);
        assert!((out1 - 5.0).abs() < 1e-6, "Expected 5.0, got {}", out1);

        let out2 = filter.apply(10.0);
        assert!((out2 - 7.5).abs() < 1e-6, "Expected 7.5, got {}", out2);
    }

    #[test]
    fn ema_converges_monotonically() {
        let target = 25.0;
        let mut filter = EmaFilter::new(0.01);
        filter.apply(0.0);

        let mut previous_error = target;
        for n in 0..1000 {
            let output = filter.apply(target);
            let error = (output - target).abs();
            assert!(
                error <= previous_error + 1e-6,
                "Error grew at step {}: {} > {}",
                n,
                error,
                previous_error
            );
            previous_error = error;
        }

        // 25 * 0.99^1000 ~= 0.001
        assert!(previous_error < 0.01, "Did not converge: error {}", previous_error);
    }

    #[test]
    fn ema_alpha_1_no_filtering() {
        let mut filter = EmaFilter::new(1.0);
        filter.apply(0.0);

        // Alpha = 1.0 means no filtering (immediate response)
        assert_eq!(filter.apply(21.5), 21.5);
        assert_eq!(filter.apply(22.0), 22.0);
    }

    #[test]
    fn ema_repeated_input_advances_state() {
        let mut filter = EmaFilter::new(0.1);
        filter.apply(20.0);

        let out1 = filter.apply(30.0);
        let out2 = filter.apply(30.0);
        assert_ne!(out1, out2);
        assert!(out2 > out1);
    }

    #[test]
    fn ema_filters_noise() {
        let mut filter = EmaFilter::new(0.2);

        // Noisy signal around 25 °C
        let noisy_samples = [25.0, 26.0, 24.0, 25.5, 24.5, 25.2];
        let mut outputs = Vec::new();

        for &sample in &noisy_samples {
            outputs.push(filter.apply(sample));
        }

        let input_variance = super::variance(&noisy_samples);
        let output_variance = super::variance(&outputs);

        assert!(output_variance < input_variance);
    }
}

#[cfg(feature = "filter-kalman")]
mod kalman_tests {
    use tmp37_filter::filters::{KalmanFilter, KalmanState};

    #[test]
    fn kalman_initialization() {
        let mut filter = KalmanFilter::new(0.001, 5.0);
        assert_eq!(filter.state(), &KalmanState::Uninitialized);
        assert_eq!(filter.estimate(), None);

        // First measurement is returned unchanged with covariance 1.0
        let out = filter.apply(42.5);
        assert_eq!(out, 42.5);
        assert_eq!(filter.covariance(), Some(1.0));
    }

    #[test]
    fn kalman_covariance_non_increasing_for_constant_input() {
        let mut filter = KalmanFilter::new(0.001, 5.0);
        filter.apply(25.0);

        let mut previous = filter.covariance().unwrap();
        for n in 0..2000 {
            filter.apply(25.0);
            let covariance = filter.covariance().unwrap();
            assert!(covariance >= 0.0);
            assert!(
                covariance <= previous + 1e-7,
                "Covariance grew at step {}: {} > {}",
                n,
                covariance,
                previous
            );
            previous = covariance;
        }
    }

    #[test]
    fn kalman_gain_settles_inside_unit_interval() {
        let mut filter = KalmanFilter::new(0.001, 5.0);
        filter.apply(25.0);

        let mut gains = Vec::new();
        for _ in 0..5000 {
            filter.apply(25.0);
            gains.push(filter.last_gain().unwrap());
        }

        assert!(gains.iter().all(|&k| k > 0.0 && k < 1.0));

        let last = gains[gains.len() - 1];
        let before = gains[gains.len() - 2];
        assert!((last - before).abs() < 1e-6, "Gain still moving: {} vs {}", before, last);
    }

    #[test]
    fn kalman_zero_process_noise_matches_closed_form() {
        // With Q = 0: 1/P_n = 1/P_0 + n/R
        let mut filter = KalmanFilter::new(0.0, 5.0);
        filter.apply(30.0);

        for _ in 0..100 {
            filter.apply(30.0);
        }

        let expected = 1.0 / (1.0 + 100.0 / 5.0);
        let covariance = filter.covariance().unwrap();
        assert!(
            (covariance - expected).abs() < 1e-4,
            "Expected {}, got {}",
            expected,
            covariance
        );
    }

    #[test]
    fn kalman_tracks_step_change() {
        let mut filter = KalmanFilter::new(0.001, 5.0);
        filter.apply(20.0);

        let mut output = 0.0;
        for _ in 0..5000 {
            output = filter.apply(30.0);
        }

        assert!((output - 30.0).abs() < 0.01, "Expected ~30.0, got {}", output);
    }

    #[test]
    fn kalman_repeated_input_advances_state() {
        let mut filter = KalmanFilter::default();
        filter.apply(20.0);

        let out1 = filter.apply(30.0);
        let out2 = filter.apply(30.0);
        assert_ne!(out1, out2);
        assert!(out2 > out1);
    }

    #[test]
    fn kalman_filters_noise() {
        let mut filter = KalmanFilter::new(0.01, 2.0);

        let noisy_samples = [25.0, 26.0, 24.0, 25.5, 24.5, 25.2];
        let outputs: Vec<f32> = noisy_samples.iter().map(|&x| filter.apply(x)).collect();

        assert!(super::variance(&outputs) < super::variance(&noisy_samples));
    }
}

#[cfg(all(feature = "filter-ema", feature = "filter-kalman"))]
mod comparison_tests {
    use tmp37_filter::filters::{EmaFilter, KalmanFilter};

    #[test]
    fn both_bootstrap_identically() {
        let mut ema = EmaFilter::default();
        let mut kalman = KalmanFilter::default();

        assert_eq!(ema.apply(18.75), kalman.apply(18.75));
    }

    #[test]
    fn instances_are_independent() {
        let mut a = KalmanFilter::default();
        let mut b = KalmanFilter::default();

        a.apply(20.0);
        a.apply(40.0);

        // b has not seen anything yet
        assert_eq!(b.apply(80.0), 80.0);
        assert!(a.estimate().unwrap() < 40.0);
    }
}

#[allow(dead_code)]
fn variance(data: &[f32]) -> f32 {
    let mean: f32 = data.iter().sum::<f32>() / data.len() as f32;
    data.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / data.len() as f32
}
