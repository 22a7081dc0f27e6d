//! Layered path-map generation split into coherent submodules.

pub mod export;
pub mod invariants;
pub mod model;

mod boss;
mod generator;
mod grid;
mod paths;
mod typing;

pub use export::MapExport;
pub use generator::MapGenerator;
pub use invariants::{InvariantViolation, check_invariants};
pub use model::{MapModel, MapNode};

use crate::config::{ConfigError, MapConfig};
use crate::random::RandomSource;

/// One-shot generation for callers that do not keep a generator around.
pub fn generate_map<R: RandomSource + ?Sized>(
    config: &MapConfig,
    rng: &mut R,
) -> Result<MapModel, ConfigError> {
    let mut generator = MapGenerator::new(config.clone())?;
    generator.generate(rng);
    Ok(generator.model().clone())
}
