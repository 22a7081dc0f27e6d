use std::fs;

use pathmap_core::{
    ChaChaSource, ConfigError, MapConfig, MapError, MapGenerator, NodeType, generate_map,
};
use tempfile::tempdir;

#[test]
fn default_map_has_a_boss_and_connected_first_floor() {
    let config = MapConfig::default();
    let model = generate_map(&config, &mut ChaChaSource::new(77_777)).expect("valid config");

    let boss = model.node(14, 3).expect("boss coordinates are in range");
    assert_eq!(boss.node_type(), NodeType::Boss);
    assert!(model.row(0).iter().any(|node| node.has_next()));
    let boss_index = model.boss_index().expect("populated model");
    for node in model.row(13).iter().filter(|node| node.has_next()) {
        assert_eq!(node.next(), &[boss_index]);
        assert_eq!(node.node_type(), NodeType::Shelter);
    }
}

#[test]
fn out_of_range_lookup_is_an_error() {
    let model =
        generate_map(&MapConfig::default(), &mut ChaChaSource::new(1)).expect("valid config");
    assert_eq!(model.node(15, 0).err(), Some(MapError::IndexOutOfRange { row: 15, column: 0 }));
    assert_eq!(model.node(0, 7).err(), Some(MapError::IndexOutOfRange { row: 0, column: 7 }));
}

#[test]
fn config_file_drives_generation() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("map.toml");
    fs::write(
        &path,
        r#"
        height = 10
        width = 5
        paths = 3

        [weights]
        enemy = 1.0
        wenny = 1.0
        shelter = 1.0
        "#,
    )
    .expect("write config");

    let config = MapConfig::load(&path).expect("config should load");
    let mut generator = MapGenerator::new(config).expect("valid config");
    let model = generator.generate(&mut ChaChaSource::new(5));

    assert_eq!(model.nodes().len(), 50);
    assert_eq!(model.boss_index(), Some(47));
}

#[test]
fn missing_config_file_reports_io_error() {
    let dir = tempdir().expect("create temp dir");
    let err = MapConfig::load(&dir.path().join("absent.toml")).expect_err("file does not exist");
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn single_column_config_is_rejected_not_hung() {
    let err = MapGenerator::new(MapConfig { width: 1, ..MapConfig::default() })
        .err()
        .expect("width 1 cannot produce two distinct starting columns");
    assert!(matches!(err, ConfigError::TooNarrow { width: 1 }));
}
