//! End-to-end mining scenarios on small hand-checked collections.

use frm_rs::{mine_motifs, Miner, MinerConfig, MiningError, Pattern};

fn ramp() -> Vec<f64> {
    (0..10).map(|i| i as f64).collect()
}

/// Raw series that discretize to "abc" / "cba" at seglen 1, alphabet 3.
fn rising() -> Vec<f64> {
    vec![-1.0, 0.0, 1.0]
}

fn falling() -> Vec<f64> {
    vec![1.0, 0.0, -1.0]
}

fn five_series() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 1.0, 2.0, 2.0, 1.0, 0.0],
        vec![0.0, 0.0, 1.0, 1.0, 0.0, 0.0],
        vec![2.0, 1.0, 1.0, 0.0, 0.0, 0.0],
        vec![2.0, 1.0, 0.0, 0.0, 1.0, 2.0],
        vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0],
    ]
}

#[test]
fn test_identical_ramps() {
    let series = vec![ramp(), ramp()];
    let miner = Miner::new(MinerConfig::new(1.0, 2, 3).with_min_len(2)).unwrap();

    let sequences = miner.discretize(&series).unwrap();
    assert_eq!(sequences[0], sequences[1]);

    let motifs = miner.mine(&series).unwrap();
    let top = &motifs[0];
    assert_eq!(top.best_matches().get(&0), Some(&0));
    assert_eq!(top.best_matches().get(&1), Some(&0));
    assert!(top.naed().abs() < 1e-12, "naed = {}", top.naed());
    assert_eq!(top.length(), top.pattern().len() * 2);
}

#[test]
fn test_minsup_boundary() {
    let series = vec![rising(), rising(), falling(), falling()];
    let abc: Pattern = "abc".parse().unwrap();

    // support 2 >= 0.5 * 4
    let config = MinerConfig::new(0.5, 1, 3).with_max_overlap(1.0);
    let motifs = mine_motifs(&series, &config).unwrap();
    let found = motifs.iter().find(|m| m.pattern() == &abc).unwrap();
    assert_eq!(found.support(), 2);
    assert_eq!(found.occurrences().positions(0), Some(&[0][..]));
    assert_eq!(found.occurrences().positions(1), Some(&[0][..]));

    // support 2 < 0.75 * 4
    let config = MinerConfig::new(0.75, 1, 3).with_max_overlap(1.0);
    let motifs = mine_motifs(&series, &config).unwrap();
    assert!(motifs.iter().all(|m| m.pattern() != &abc));
}

#[test]
fn test_top_k_keeps_lowest_naed() {
    let series = five_series();
    let config = MinerConfig::new(0.5, 1, 3)
        .with_min_len(1)
        .with_max_overlap(1.0);

    let all = mine_motifs(&series, &config).unwrap();
    assert_eq!(all.len(), 5);
    for w in all.windows(2) {
        assert!(
            w[0].naed() <= w[1].naed(),
            "Motifs should be sorted by naed: {} > {}",
            w[0].naed(),
            w[1].naed()
        );
    }

    let top = mine_motifs(&series, &config.clone().with_k(1)).unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].pattern(), all[0].pattern());
    assert!(all.iter().all(|m| top[0].naed() <= m.naed()));

    // k larger than the number of motifs returns everything
    let more = mine_motifs(&series, &config.with_k(50)).unwrap();
    assert_eq!(more.len(), 5);
}

#[test]
fn test_max_len_limits_pattern_length() {
    let series = five_series();
    let config = MinerConfig::new(0.5, 1, 3)
        .with_min_len(1)
        .with_max_len(1)
        .with_max_overlap(1.0);
    let patterns: Vec<String> = mine_motifs(&series, &config)
        .unwrap()
        .iter()
        .map(|m| m.pattern().to_string())
        .collect();
    let mut sorted = patterns.clone();
    sorted.sort();
    assert_eq!(sorted, vec!["a", "c"]);
}

#[test]
fn test_varying_lengths_and_short_tail() {
    // Lengths 7 and 9 with seglen 2 leave a one-point trailing segment
    let a: Vec<f64> = (0..7).map(|i| (i as f64 * 0.9).sin()).collect();
    let b: Vec<f64> = (0..9).map(|i| (i as f64 * 0.9).sin()).collect();
    let series = vec![a, b];

    let config = MinerConfig::new(1.0, 2, 4).with_min_len(1);
    let miner = Miner::new(config).unwrap();
    let sequences = miner.discretize(&series).unwrap();
    assert_eq!(sequences[0].len(), 4);
    assert_eq!(sequences[1].len(), 5);

    for motif in miner.mine(&series).unwrap() {
        assert_eq!(motif.representative().len(), motif.pattern().len() * 2);
        assert!(motif.naed() >= 0.0);
        assert!(motif.naed().is_finite());
        for (series_id, &offset) in motif.best_matches() {
            assert_eq!(offset % 2, 0);
            assert!(offset < series[*series_id].len());
        }
    }
}

#[test]
fn test_errors_before_computation() {
    let series = vec![ramp(), ramp()];
    let err = mine_motifs(&series, &MinerConfig::new(0.5, 2, 1)).unwrap_err();
    assert_eq!(err, MiningError::UnsupportedAlphabet(1));

    let err = mine_motifs(&series, &MinerConfig::new(0.5, 0, 4)).unwrap_err();
    assert!(matches!(err, MiningError::InvalidParameter(_)));

    let series = vec![ramp(), vec![3.0; 10]];
    let err = mine_motifs(&series, &MinerConfig::new(0.5, 2, 4)).unwrap_err();
    assert_eq!(err, MiningError::ConstantSeries { index: 1 });
}

#[test]
fn test_config_from_json() {
    let config: MinerConfig = serde_json::from_str(
        r#"{"minsup": 1.0, "seglen": 2, "alphabet": 3, "min_len": 2, "k": 1,
            "standardization": "local", "constant_series": "zero"}"#,
    )
    .unwrap();
    assert_eq!(config.max_len, 0);
    assert!((config.max_overlap - 0.9).abs() < 1e-12);

    let motifs = mine_motifs(&[ramp(), ramp()], &config).unwrap();
    assert_eq!(motifs.len(), 1);
    assert_eq!(motifs[0].pattern().to_string(), "aabcc");
}

#[test]
fn test_motif_serializes() {
    let motifs = mine_motifs(&[ramp(), ramp()], &MinerConfig::new(1.0, 2, 3)).unwrap();
    let json = serde_json::to_value(&motifs[0]).unwrap();
    assert_eq!(json["pattern"], serde_json::json!([0, 0, 1, 2, 2]));
    assert_eq!(json["representative"].as_array().unwrap().len(), 10);
    assert_eq!(json["best_matches"]["0"], serde_json::json!(0));
}
