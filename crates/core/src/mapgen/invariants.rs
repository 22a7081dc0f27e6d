//! Structural checks over a finished map, shared by tests and the fuzz harness.

use std::error::Error;
use std::fmt;

use crate::config::MapConfig;
use crate::types::NodeType;

use super::model::MapModel;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    WrongNodeCount { expected: usize, actual: usize },
    BossCount { count: usize },
    MisplacedBoss { index: usize },
    BossHasEdges,
    EdgeSkipsRow { source: usize, target: usize },
    EdgeTooWide { source: usize, target: usize },
    CrossingEdges { row: usize, left_column: usize },
    TooManyConnections { index: usize, count: usize },
    InactiveNodeTyped { index: usize },
    ActiveNodeUntyped { index: usize },
    FixedRowType { index: usize, expected: NodeType, actual: NodeType },
    RepeatedType { source: usize, target: usize, node_type: NodeType },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongNodeCount { expected, actual } => {
                write!(f, "expected {expected} nodes, found {actual}")
            }
            Self::BossCount { count } => write!(f, "expected exactly one boss, found {count}"),
            Self::MisplacedBoss { index } => write!(f, "boss sits at node {index}"),
            Self::BossHasEdges => write!(f, "boss node has outgoing edges"),
            Self::EdgeSkipsRow { source, target } => {
                write!(f, "edge {source} -> {target} does not advance exactly one row")
            }
            Self::EdgeTooWide { source, target } => {
                write!(f, "edge {source} -> {target} moves more than one column")
            }
            Self::CrossingEdges { row, left_column } => {
                let right_column = left_column + 1;
                write!(f, "edges from row {row} columns {left_column} and {right_column} cross")
            }
            Self::TooManyConnections { index, count } => {
                write!(f, "node {index} has {count} outgoing edges")
            }
            Self::InactiveNodeTyped { index } => write!(f, "inactive node {index} has a type"),
            Self::ActiveNodeUntyped { index } => write!(f, "active node {index} has no type"),
            Self::FixedRowType { index, expected, actual } => {
                write!(f, "node {index} should be {expected}, found {actual}")
            }
            Self::RepeatedType { source, target, node_type } => {
                write!(f, "{node_type} follows {node_type} on edge {source} -> {target}")
            }
        }
    }
}

impl Error for InvariantViolation {}

/// Checks every structural and typing rule a generated map must satisfy.
pub fn check_invariants(model: &MapModel, config: &MapConfig) -> Result<(), InvariantViolation> {
    let nodes = model.nodes();
    if nodes.len() != config.node_count() {
        return Err(InvariantViolation::WrongNodeCount {
            expected: config.node_count(),
            actual: nodes.len(),
        });
    }

    let boss = model.boss_index().ok_or(InvariantViolation::BossCount { count: 0 })?;
    if model.index_of(config.boss_row(), config.boss_column()) != Ok(boss) {
        return Err(InvariantViolation::MisplacedBoss { index: boss });
    }
    let bosses: Vec<usize> =
        (0..nodes.len()).filter(|&index| nodes[index].node_type() == NodeType::Boss).collect();
    match bosses.as_slice() {
        [only] if *only == boss => {}
        [only] => return Err(InvariantViolation::MisplacedBoss { index: *only }),
        _ => return Err(InvariantViolation::BossCount { count: bosses.len() }),
    }
    if nodes[boss].has_next() {
        return Err(InvariantViolation::BossHasEdges);
    }

    for (index, node) in nodes.iter().enumerate() {
        if node.next().len() > config.max_connections {
            return Err(InvariantViolation::TooManyConnections { index, count: node.next().len() });
        }
    }

    for (source, target) in model.edges() {
        let from = &nodes[source];
        let to = &nodes[target];
        if to.row() != from.row() + 1 {
            return Err(InvariantViolation::EdgeSkipsRow { source, target });
        }
        if target != boss && from.column().abs_diff(to.column()) > 1 {
            return Err(InvariantViolation::EdgeTooWide { source, target });
        }
        for node_type in [NodeType::Shelter, NodeType::Wenny] {
            if from.node_type() == node_type && to.node_type() == node_type {
                return Err(InvariantViolation::RepeatedType { source, target, node_type });
            }
        }
    }

    check_crossings(model)?;
    check_types(model, config)
}

fn check_crossings(model: &MapModel) -> Result<(), InvariantViolation> {
    let width = model.width();
    for row in 0..model.height().saturating_sub(1) {
        let nodes = model.row(row);
        for left_column in 0..width - 1 {
            let left_max = nodes[left_column].next().iter().map(|&target| target % width).max();
            let right_min =
                nodes[left_column + 1].next().iter().map(|&target| target % width).min();
            if let (Some(left_max), Some(right_min)) = (left_max, right_min)
                && left_max > right_min
            {
                return Err(InvariantViolation::CrossingEdges { row, left_column });
            }
        }
    }
    Ok(())
}

fn check_types(model: &MapModel, config: &MapConfig) -> Result<(), InvariantViolation> {
    for (index, node) in model.nodes().iter().enumerate() {
        let active = model.is_active(index);
        let node_type = node.node_type();
        if !active && node_type != NodeType::Unassigned {
            return Err(InvariantViolation::InactiveNodeTyped { index });
        }
        if active && node_type == NodeType::Unassigned {
            return Err(InvariantViolation::ActiveNodeUntyped { index });
        }
        if !active || node.row() == config.boss_row() {
            continue;
        }

        let expected = if node.row() == 0 {
            Some(NodeType::Enemy)
        } else if config.is_fixed_shelter_row(node.row()) {
            Some(NodeType::Shelter)
        } else {
            None
        };
        if let Some(expected) = expected
            && expected != node_type
        {
            return Err(InvariantViolation::FixedRowType { index, expected, actual: node_type });
        }
    }
    Ok(())
}
