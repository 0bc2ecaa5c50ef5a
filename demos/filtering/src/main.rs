//! Demonstrates EMA and Kalman smoothing of a noisy TMP37 on a 12-bit ADC
//!
//! Simulated codes hover around 620 (~25 °C) and step to 745 (~30 °C).

use tmp37_filter::{Config, NoiseFilter, RangePolicy, SensorConfig, Thermometer};

fn run(label: &str, filter: NoiseFilter, codes: &[u32]) {
    println!("{}", label);

    let config = Config {
        sensor: SensorConfig::tmp37(3.3),
        filter,
        range: RangePolicy::Clamp,
    };

    let mut thermo = Thermometer::new(config).expect("Valid config");

    // The closure stands in for a blocking ADC conversion
    let mut samples = codes.iter().copied();
    let mut adc = move || samples.next().unwrap_or(0);

    println!("   Code → °C (filtered)");
    for &code in codes {
        let celsius = thermo.read(&mut adc).expect("Closure source never fails");
        println!("   {:4} → {:6.2}", code, celsius);
    }

    if let Some(kalman) = thermo.kalman() {
        let ss = kalman.steady_state();
        println!(
            "   covariance {:.4} (steady state {:.4}, gain {:.4})",
            kalman.covariance().unwrap_or(0.0),
            ss.covariance,
            ss.gain
        );
    }
    println!();
}

fn main() {
    println!("=== tmp37-filter Filtering Examples ===\n");

    let mut codes = vec![620, 640, 600, 630, 610, 622, 598, 641, 615, 625];
    codes.extend([745, 760, 730, 750, 741, 735, 755, 748, 742, 739]);

    // Example 1: No Filter (for comparison)
    run("1. No Filter (raw conversion)", NoiseFilter::None, &codes);

    // Example 2: EMA, responsive
    run(
        "2. EMA Filter (alpha=0.3)",
        NoiseFilter::ExponentialMovingAverage { alpha: 0.3 },
        &codes,
    );

    // Example 3: EMA, reference smoothing
    run("3. EMA Filter (alpha=0.01)", NoiseFilter::ema(), &codes);

    // Example 4: Kalman, reference tuning
    run("4. Kalman Filter (Q=0.001, R=5.0)", NoiseFilter::kalman(), &codes);
}
