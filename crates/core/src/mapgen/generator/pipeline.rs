//! Generation pipeline: grid, paths, boss convergence, then room types.

use crate::config::MapConfig;
use crate::random::RandomSource;

use super::super::boss::converge;
use super::super::grid::generate_grid;
use super::super::model::MapModel;
use super::super::paths::PathConnector;
use super::super::typing::assign_types;

pub(super) fn build_map<R: RandomSource + ?Sized>(config: &MapConfig, rng: &mut R) -> MapModel {
    let nodes = generate_grid(config, rng);
    let mut model = MapModel::from_nodes(config.width, config.height, nodes);

    let mut connector = PathConnector { config, model: &mut model, rng: &mut *rng };
    let starting_columns = connector.pick_starting_columns();
    log::debug!("starting columns: {starting_columns:?}");
    connector.connect_paths(&starting_columns);

    converge(&mut model, config.max_connections);
    assign_types(config, &mut model, rng);

    for line in model.floor_summary() {
        log::debug!("{line}");
    }
    model
}
