//! High-level map generation entry point that owns the config and the current map.

mod pipeline;

use log::Level;

use crate::config::{ConfigError, MapConfig};
use crate::random::RandomSource;

use super::export::MapExport;
use super::model::MapModel;

pub struct MapGenerator {
    config: MapConfig,
    model: MapModel,
}

impl MapGenerator {
    /// Validates the config up front so generation itself cannot fail.
    pub fn new(config: MapConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let model = MapModel::empty(config.width, config.height);
        Ok(Self { config, model })
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn model(&self) -> &MapModel {
        &self.model
    }

    /// Mutable access for advisory state such as node selection.
    pub fn model_mut(&mut self) -> &mut MapModel {
        &mut self.model
    }

    /// Builds a fresh map from the current state of `rng`, replacing any previous map.
    pub fn generate<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> &MapModel {
        self.model = pipeline::build_map(&self.config, rng);
        if log::log_enabled!(Level::Info) {
            let export = MapExport::from_model(&self.model);
            log::info!(
                "generated {}x{} map: {} active nodes, {} edges, fingerprint {:016x}",
                self.config.width,
                self.config.height,
                self.model.active_count(),
                export.edges.len(),
                export.fingerprint()
            );
        }
        &self.model
    }

    /// Discards the current map, then generates again. The source is not reseeded,
    /// so reseed it first to reproduce an earlier map.
    pub fn regenerate<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> &MapModel {
        self.model.clear();
        self.generate(rng)
    }

    /// Reseeds `rng` from runtime entropy and regenerates.
    pub fn reroll<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> &MapModel {
        rng.randomize();
        self.regenerate(rng)
    }

    pub fn export(&self) -> MapExport {
        MapExport::from_model(&self.model)
    }
}
