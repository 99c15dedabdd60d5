//! Config files: save, load, and rejection of broken wheels.

use spinwheel::{load_config, save_config, ConfigError, SelectionEngine, WheelConfig};
use std::fs;

#[test]
fn test_save_then_load_default_config() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("nested").join("wheel.json");

    save_config(&path, &WheelConfig::default()).expect("save should succeed");
    let loaded = load_config(&path).expect("load should succeed");
    assert_eq!(loaded, WheelConfig::default());
}

#[test]
fn test_load_missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.json");
    match load_config(&path) {
        Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_load_rejects_table_that_does_not_sum_to_100() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("skewed.json");
    let mut config = WheelConfig::default();
    config.base_probabilities[7] = 90.0;
    fs::write(&path, serde_json::to_string(&config).expect("serialize")).expect("write");

    assert!(matches!(
        load_config(&path),
        Err(ConfigError::ProbabilitySum { .. })
    ));
}

#[test]
fn test_custom_two_prize_wheel_runs() {
    let json = r##"{
        "prizes": [
            {"id": 0, "name": "Jackpot", "cost": 20.0, "icon": "💰", "color": "#FFD700"},
            {"id": 1, "name": "Try again", "cost": 0.0, "icon": "", "color": "#808080"}
        ],
        "base_probabilities": [5.0, 95.0],
        "pity": {
            "enabled": true,
            "rare_indices": [0],
            "threshold_spins": 4,
            "multiplier": 4.0,
            "reset_on_win": true
        },
        "history_capacity": 3,
        "spin_price": 1.5
    }"##;
    let config = WheelConfig::from_json_str(json).expect("valid config");
    let mut engine = SelectionEngine::with_source(config, spinwheel::FixedRolls::constant(50.0))
        .expect("valid config");

    // 5 + 95 table: 50 lands on "Try again" until the boost, 20 / 115 * 100 = 17.4 after
    for _ in 0..4 {
        assert_eq!(engine.select_prize().prize_index, 1);
    }
    assert!(engine.is_pity_active());
    let boosted = engine.effective_probabilities();
    assert!((boosted[0] - 20.0 / 115.0 * 100.0).abs() < 1e-9);
    assert!((engine.expected_cost() - 20.0 / 115.0 * 20.0).abs() < 1e-9);
    assert_eq!(engine.history().len(), 3);
    assert!((engine.statistics().revenue - 6.0).abs() < 1e-9);
}
