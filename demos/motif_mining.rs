//! Frequent motif mining across a small collection of time series.
//!
//! Every series is a noisy sine with the same "double bump" shape planted at
//! a different offset. The miner discretizes each series with SAX, finds the
//! symbol patterns shared by most series and maps them back onto the raw
//! values.
//!
//! Run with: cargo run --release --example motif_mining
//! Pass a JSON config path to override the defaults, e.g.
//! `{"minsup": 0.8, "seglen": 4, "alphabet": 5, "k": 3}`.
//! Set `RUST_LOG=frm_rs=debug` to see per-level mining progress.

use frm_rs::{Miner, MinerConfig, Pattern};
use tracing_subscriber::EnvFilter;

fn double_bump(t: f64) -> f64 {
    3.0 * (-(t - 8.0).powi(2) / 6.0).exp() - 2.0 * (-(t - 20.0).powi(2) / 6.0).exp()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let offsets = [40, 120, 75, 10, 150, 95];
    let n = 200;
    let series: Vec<Vec<f64>> = offsets
        .iter()
        .enumerate()
        .map(|(s, &offset)| {
            (0..n)
                .map(|i| {
                    let t = i as f64;
                    let noise = 0.15 * ((t * 12.9898 + s as f64 * 78.233).sin() * 43758.5453).fract();
                    let shape = if (offset..offset + 28).contains(&i) {
                        double_bump((i - offset) as f64)
                    } else {
                        0.0
                    };
                    0.4 * (t * std::f64::consts::TAU / 60.0).sin() + shape + noise
                })
                .collect()
        })
        .collect();

    let config = match std::env::args().nth(1) {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => MinerConfig::new(0.8, 4, 5).with_k(5),
    };
    let miner = Miner::new(config)?;

    println!("Frequent Motif Mining");
    println!("=====================");
    println!(
        "{} series of length {n}, shape planted at offsets {:?}",
        series.len(),
        offsets
    );
    let cfg = miner.config();
    println!(
        "minsup = {}, seglen = {}, alphabet = {}, min_len = {}\n",
        cfg.minsup, cfg.seglen, cfg.alphabet, cfg.min_len
    );

    for (i, word) in miner.discretize(&series)?.into_iter().enumerate() {
        println!("series {i}: {}", Pattern::new(word));
    }
    println!();

    let motifs = miner.mine(&series)?;
    if motifs.is_empty() {
        println!("No frequent motifs found.");
        return Ok(());
    }

    println!(
        "{:>4}  {:<12}  {:>7}  {:>8}  {:>10}",
        "Rank", "Pattern", "Support", "Length", "NAED"
    );
    println!("{:-<49}", "");
    for (rank, motif) in motifs.iter().enumerate() {
        println!(
            "{:>4}  {:<12}  {:>7}  {:>8}  {:>10.4}",
            rank + 1,
            motif.pattern().to_string(),
            motif.support(),
            motif.length(),
            motif.naed()
        );
    }

    let top = &motifs[0];
    println!("\nBest matches for '{}':", top.pattern());
    for (series_id, offset) in top.best_matches() {
        println!(
            "  series {series_id}: offset {offset} (planted at {})",
            offsets[*series_id]
        );
    }

    Ok(())
}
