//! Flat export view handed to host applications.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::types::{NodeType, Position};

use super::model::MapModel;

/// Parallel per-node arrays plus a flattened edge list in node-index order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapExport {
    pub width: usize,
    pub height: usize,
    pub types: Vec<NodeType>,
    pub rows: Vec<usize>,
    pub columns: Vec<usize>,
    pub positions: Vec<Position>,
    pub connection_counts: Vec<usize>,
    pub edges: Vec<(usize, usize)>,
}

impl MapExport {
    pub fn from_model(model: &MapModel) -> Self {
        let nodes = model.nodes();
        Self {
            width: model.width(),
            height: model.height(),
            types: nodes.iter().map(|node| node.node_type()).collect(),
            rows: nodes.iter().map(|node| node.row()).collect(),
            columns: nodes.iter().map(|node| node.column()).collect(),
            positions: nodes.iter().map(|node| node.position()).collect(),
            connection_counts: nodes.iter().map(|node| node.next().len()).collect(),
            edges: model.edges(),
        }
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for index in 0..self.types.len() {
            bytes.push(self.types[index].code());
            bytes.extend((self.rows[index] as u32).to_le_bytes());
            bytes.extend((self.columns[index] as u32).to_le_bytes());
            bytes.extend(self.positions[index].x.to_le_bytes());
            bytes.extend(self.positions[index].y.to_le_bytes());
            bytes.extend((self.connection_counts[index] as u32).to_le_bytes());
        }

        bytes.extend((self.edges.len() as u32).to_le_bytes());
        for &(source, target) in &self.edges {
            bytes.extend((source as u32).to_le_bytes());
            bytes.extend((target as u32).to_le_bytes());
        }

        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
