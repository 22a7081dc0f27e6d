use pathmap_core::{
    ChaChaSource, MapConfig, MapGenerator, NodeType, TypeWeights, check_invariants,
};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};

fn run_invariant_sweep(config: &MapConfig, cases: u32) {
    let mut runner = TestRunner::new(ProptestConfig { cases, ..ProptestConfig::default() });
    let result = runner.run(&any::<u64>(), |seed| {
        let mut generator = MapGenerator::new(config.clone()).expect("valid config");
        let model = generator.generate(&mut ChaChaSource::new(seed));
        check_invariants(model, config)
            .map_err(|violation| TestCaseError::fail(format!("seed {seed}: {violation}")))
    });

    if let Err(e) = result {
        panic!("map invariant sweep failed: {e}");
    }
}

#[test]
fn default_maps_hold_every_invariant() {
    run_invariant_sweep(&MapConfig::default(), 512);
}

#[test]
fn narrow_maps_hold_every_invariant() {
    let config = MapConfig { width: 2, paths: 3, height: 6, ..MapConfig::default() };
    run_invariant_sweep(&config, 256);
}

#[test]
fn wide_tall_maps_hold_every_invariant() {
    let config = MapConfig { width: 9, height: 20, paths: 8, ..MapConfig::default() };
    run_invariant_sweep(&config, 128);
}

#[test]
fn shelter_heavy_weights_still_respect_adjacency() {
    let config = MapConfig {
        weights: TypeWeights { enemy: 0.5, wenny: 20.0, shelter: 40.0 },
        ..MapConfig::default()
    };
    run_invariant_sweep(&config, 256);
}

#[test]
fn every_random_type_shows_up_across_seeds() {
    let config = MapConfig::default();
    let mut seen = Vec::new();
    for seed in 0..20 {
        let mut generator = MapGenerator::new(config.clone()).expect("valid config");
        let model = generator.generate(&mut ChaChaSource::new(seed));
        for node in model.nodes() {
            if !seen.contains(&node.node_type()) {
                seen.push(node.node_type());
            }
        }
    }
    for expected in [NodeType::Enemy, NodeType::Wenny, NodeType::Shelter, NodeType::Boss] {
        assert!(seen.contains(&expected), "expected {expected} across seeds, saw {seen:?}");
    }
    assert!(!seen.contains(&NodeType::Loot), "loot rooms are never rolled");
}
