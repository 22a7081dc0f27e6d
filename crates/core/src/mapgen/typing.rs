//! Room-type assignment: fixed floor rules, then weighted roulette over the
//! types the node's predecessors still allow.

use crate::config::{MapConfig, TypeWeights};
use crate::random::RandomSource;
use crate::types::NodeType;

use super::model::MapModel;

/// Roulette order; ties on a boundary resolve toward the earlier entry.
const ROULETTE_ORDER: [NodeType; 3] = [NodeType::Enemy, NodeType::Wenny, NodeType::Shelter];

pub(super) fn assign_types<R: RandomSource + ?Sized>(
    config: &MapConfig,
    model: &mut MapModel,
    rng: &mut R,
) {
    for row in 0..config.boss_row() {
        for column in 0..config.width {
            let index = model.idx(row, column);
            if !model.nodes()[index].has_next() {
                continue;
            }

            let node_type = if row == 0 {
                NodeType::Enemy
            } else if config.is_fixed_shelter_row(row) {
                NodeType::Shelter
            } else {
                let valid = valid_types(config, model, index);
                pick_type(&config.weights, &valid, rng)
            };
            model.node_mut(index).set_type(node_type);

            let targets = model.nodes()[index].next().to_vec();
            for target in targets {
                model.node_mut(target).record_parent_type(node_type);
            }
        }
    }
}

/// Types allowed for the node at `index`, in roulette order.
pub(super) fn valid_types(config: &MapConfig, model: &MapModel, index: usize) -> Vec<NodeType> {
    let node = &model.nodes()[index];
    let row = node.row();
    let mut blocked = vec![node.parent_type()];
    blocked.extend(
        model.predecessors(index).into_iter().map(|source| model.nodes()[source].node_type()),
    );

    ROULETTE_ORDER
        .into_iter()
        .filter(|&candidate| match candidate {
            NodeType::Enemy => true,
            NodeType::Wenny => !blocked.contains(&NodeType::Wenny),
            NodeType::Shelter => {
                row >= config.shelter_min_row
                    && !blocked.contains(&NodeType::Shelter)
                    && !config.is_fixed_shelter_row(row + 1)
            }
            _ => false,
        })
        .collect()
}

pub(super) fn pick_type<R: RandomSource + ?Sized>(
    weights: &TypeWeights,
    valid: &[NodeType],
    rng: &mut R,
) -> NodeType {
    match valid {
        [] => NodeType::Enemy,
        [only] => *only,
        _ => {
            let total_weight: f32 =
                valid.iter().map(|&node_type| weights.weight_of(node_type)).sum();
            roulette(weights, valid, rng.uniform_float(0.0, total_weight))
        }
    }
}

fn roulette(weights: &TypeWeights, valid: &[NodeType], random_value: f32) -> NodeType {
    let mut accumulated = 0.0_f32;
    for &node_type in valid {
        accumulated += weights.weight_of(node_type);
        if random_value <= accumulated {
            return node_type;
        }
    }
    valid.last().copied().unwrap_or(NodeType::Enemy)
}
