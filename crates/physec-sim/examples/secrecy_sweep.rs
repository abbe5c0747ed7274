//! Run a reduced secrecy-rate comparison and print the per-strategy table.
//!
//! ```text
//! cargo run --release --example secrecy_sweep
//! ```

use physec_core::Strategy;
use physec_sim::config::{evenly_spaced, SweepConfig};
use physec_sim::sweep::run_sweep;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Reduced trial counts so the example finishes in seconds; bump
    // bob_trials/eve_trials toward the 1000×1000 reference set for
    // publication-quality curves.
    let config = SweepConfig {
        bob_trials: 200,
        eve_trials: 100,
        snr_db_range: evenly_spaced(-5.0, 20.0, 5.0),
        ..Default::default()
    };

    let report = run_sweep(&Strategy::ALL, &config).expect("default-based config is valid");

    println!(
        "\nN={}  alpha={}  sigma^2={}  R_th={}  trials={}x{}\n",
        config.n_antennas,
        config.alpha,
        config.noise_variance,
        config.rate_threshold,
        config.bob_trials,
        config.eve_trials,
    );
    print!("{:>8}", "SNR dB");
    for curve in &report.curves {
        print!("  {:>21}", curve.strategy.label());
    }
    println!();

    for (i, &snr_db) in config.snr_db_range.iter().enumerate() {
        print!("{snr_db:>8.1}");
        for curve in &report.curves {
            let p = &curve.points[i];
            print!("  {:>10.3} / {:>6.3}", p.avg_secrecy_rate, p.outage_prob);
        }
        println!();
    }
    println!("\n(columns are: average secrecy rate bits/s/Hz / P(Rs > R_th))");
}
