//! Grid layout: one node per (row, column) with jittered screen positions.

use crate::config::MapConfig;
use crate::random::RandomSource;
use crate::types::Position;

use super::model::MapNode;

/// Builds all `height * width` nodes in index order, drawing two jitter floats per node.
pub(super) fn generate_grid<R: RandomSource + ?Sized>(
    config: &MapConfig,
    rng: &mut R,
) -> Vec<MapNode> {
    let mut nodes = Vec::with_capacity(config.node_count());
    for row in 0..config.height {
        for column in 0..config.width {
            let position = base_position(config, row, column) + random_offset(config, rng);
            nodes.push(MapNode::new(row, column, position, config.max_connections));
        }
    }
    nodes
}

pub(super) fn base_position(config: &MapConfig, row: usize, column: usize) -> Position {
    // The boss row sits one extra step away from the last content floor.
    let floor = if row == config.boss_row() { row + 1 } else { row };
    Position::new(column as f32 * config.x_dist, floor as f32 * -config.y_dist)
}

fn random_offset<R: RandomSource + ?Sized>(config: &MapConfig, rng: &mut R) -> Position {
    let offset_x = rng.uniform_float(-1.0, 1.0);
    let offset_y = rng.uniform_float(-1.0, 1.0);
    Position::new(offset_x, offset_y) * config.placement_randomness
}
