use battleship_arena::{ConfigError, GameConfig, SHIPS};

#[test]
fn test_default_config() {
    let config = GameConfig::default();
    assert_eq!((config.width, config.height), (10, 10));
    assert_eq!(config.fleet, SHIPS.to_vec());
    assert_eq!(config.fleet_tiles(), 17);
    assert!(config.auto_restart);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_rejected_configs() {
    let base = GameConfig::default();

    let config = GameConfig { width: 0, ..base.clone() };
    assert_eq!(
        config.validate(),
        Err(ConfigError::EmptyBoard { width: 0, height: 10 })
    );

    let config = GameConfig { fleet: vec![], ..base.clone() };
    assert_eq!(config.validate(), Err(ConfigError::EmptyFleet));

    let config = GameConfig { fleet: vec![3, 11], ..base.clone() };
    assert_eq!(config.validate(), Err(ConfigError::ShipDoesNotFit { length: 11 }));

    let config = GameConfig { fleet: vec![2, 0], ..base.clone() };
    assert_eq!(config.validate(), Err(ConfigError::ShipDoesNotFit { length: 0 }));

    let config = GameConfig {
        width: 3,
        height: 2,
        fleet: vec![3, 3, 1],
        ..base.clone()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::FleetTooLarge { tiles: 7, capacity: 6 })
    );

    let config = GameConfig { fps: 0, ..base };
    assert_eq!(config.validate(), Err(ConfigError::ZeroFps));
}

#[test]
fn test_non_square_board_uses_longest_side() {
    let config = GameConfig {
        width: 12,
        height: 4,
        fleet: vec![12, 4],
        ..GameConfig::default()
    };
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_json_fills_defaults() {
    let config: GameConfig = serde_json::from_str(r#"{"width": 8, "height": 6}"#).unwrap();
    assert_eq!((config.width, config.height), (8, 6));
    assert_eq!(config.fleet, SHIPS.to_vec());
    assert_eq!(config.fps, GameConfig::default().fps);

    let err = serde_json::from_str::<GameConfig>(r#"{"widht": 8}"#);
    assert!(err.is_err());
}

#[test]
fn test_load_from_file() {
    let dir = std::env::temp_dir();
    let good = dir.join(format!("arena-config-{}.json", std::process::id()));
    std::fs::write(&good, r#"{"fleet": [3, 2], "fps": 30, "auto_restart": false}"#).unwrap();
    let config = GameConfig::load(&good).unwrap();
    assert_eq!(config.fleet, vec![3, 2]);
    assert_eq!(config.fps, 30);
    assert!(!config.auto_restart);

    let bad = dir.join(format!("arena-config-bad-{}.json", std::process::id()));
    std::fs::write(&bad, r#"{"width": 0}"#).unwrap();
    let err = GameConfig::load(&bad).unwrap_err();
    assert!(err.to_string().contains("non-zero"));

    let missing = dir.join("arena-config-does-not-exist.json");
    assert!(GameConfig::load(&missing).is_err());

    let _ = std::fs::remove_file(good);
    let _ = std::fs::remove_file(bad);
}
