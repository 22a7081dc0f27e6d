pub mod config;
pub mod mapgen;
pub mod random;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{ConfigError, MapConfig, TypeWeights};
pub use mapgen::{
    InvariantViolation, MapExport, MapGenerator, MapModel, MapNode, check_invariants, generate_map,
};
pub use random::{ChaChaSource, RandomSource};
pub use types::*;
