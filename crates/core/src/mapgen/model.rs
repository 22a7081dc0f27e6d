//! Flat node arena for a generated map plus the lookups consumers need.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{MapError, NodeType, Position};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapNode {
    node_type: NodeType,
    row: usize,
    column: usize,
    position: Position,
    next: Vec<usize>,
    parent_type: NodeType,
    selected: bool,
}

impl MapNode {
    pub(crate) fn new(row: usize, column: usize, position: Position, capacity: usize) -> Self {
        Self {
            node_type: NodeType::Unassigned,
            row,
            column,
            position,
            next: Vec::with_capacity(capacity),
            parent_type: NodeType::Unassigned,
            selected: false,
        }
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Outgoing edges as indices into the owning map's node array.
    pub fn next(&self) -> &[usize] {
        &self.next
    }

    pub fn has_next(&self) -> bool {
        !self.next.is_empty()
    }

    pub fn parent_type(&self) -> NodeType {
        self.parent_type
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_type(&mut self, node_type: NodeType) {
        self.node_type = node_type;
    }

    /// First writer wins; an unassigned writer leaves the sentinel in place.
    pub(crate) fn record_parent_type(&mut self, parent_type: NodeType) {
        if self.parent_type == NodeType::Unassigned {
            self.parent_type = parent_type;
        }
    }

    /// Appends an edge, keeping at most `capacity` entries.
    ///
    /// Duplicates are kept while there is room. At capacity a repeated target is
    /// dropped and a new target takes the slot of the latest duplicate, so no
    /// distinct target is ever lost while `capacity >= 3`.
    pub(crate) fn push_edge(&mut self, target: usize, capacity: usize) {
        if self.next.len() < capacity {
            self.next.push(target);
            return;
        }
        if self.next.contains(&target) {
            return;
        }
        let duplicate_slot = (1..self.next.len())
            .rev()
            .find(|&slot| self.next[..slot].contains(&self.next[slot]));
        if let Some(slot) = duplicate_slot {
            self.next.remove(slot);
            self.next.push(target);
        }
    }

    pub(crate) fn clear_next(&mut self) {
        self.next.clear();
    }
}

impl fmt::Display for MapNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.selected { "*" } else { "" };
        write!(f, "{} ({}){marker}", self.column, self.node_type.as_char())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapModel {
    width: usize,
    height: usize,
    nodes: Vec<MapNode>,
}

impl MapModel {
    /// An empty model sized for `width x height`; nodes are filled in by the grid layout.
    pub fn empty(width: usize, height: usize) -> Self {
        Self { width, height, nodes: Vec::with_capacity(width * height) }
    }

    pub(crate) fn from_nodes(width: usize, height: usize, nodes: Vec<MapNode>) -> Self {
        debug_assert_eq!(nodes.len(), width * height);
        Self { width, height, nodes }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[MapNode] {
        &self.nodes
    }

    pub fn index_of(&self, row: usize, column: usize) -> Result<usize, MapError> {
        if row >= self.height || column >= self.width {
            return Err(MapError::IndexOutOfRange { row, column });
        }
        Ok(self.idx(row, column))
    }

    pub fn node(&self, row: usize, column: usize) -> Result<&MapNode, MapError> {
        let index = self.index_of(row, column)?;
        self.nodes.get(index).ok_or(MapError::IndexOutOfRange { row, column })
    }

    pub fn node_at(&self, index: usize) -> Result<&MapNode, MapError> {
        self.nodes.get(index).ok_or(MapError::IndexOutOfBounds { index })
    }

    pub fn row(&self, row: usize) -> &[MapNode] {
        if row >= self.height || self.nodes.is_empty() {
            return &[];
        }
        &self.nodes[row * self.width..(row + 1) * self.width]
    }

    /// Index of the boss slot, or `None` while the model holds no nodes.
    pub fn boss_index(&self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        Some(self.idx(self.height - 1, self.width / 2))
    }

    /// A node is active when it lies on a path or is the boss.
    pub fn is_active(&self, index: usize) -> bool {
        self.nodes.get(index).is_some_and(MapNode::has_next) || Some(index) == self.boss_index()
    }

    pub fn active_count(&self) -> usize {
        (0..self.nodes.len()).filter(|&index| self.is_active(index)).count()
    }

    /// Indices of nodes in the previous row with an edge into `index`.
    pub fn predecessors(&self, index: usize) -> Vec<usize> {
        let Some(node) = self.nodes.get(index) else {
            return Vec::new();
        };
        if node.row == 0 {
            return Vec::new();
        }
        let start = (node.row - 1) * self.width;
        (start..start + self.width)
            .filter(|&source| self.nodes[source].next.contains(&index))
            .collect()
    }

    /// Every edge as `(source, target)`, in node-index order.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.nodes
            .iter()
            .enumerate()
            .flat_map(|(source, node)| node.next.iter().map(move |&target| (source, target)))
            .collect()
    }

    pub fn set_selected(
        &mut self,
        row: usize,
        column: usize,
        selected: bool,
    ) -> Result<(), MapError> {
        let index = self.index_of(row, column)?;
        self.nodes[index].selected = selected;
        Ok(())
    }

    /// One line per floor listing the columns that lie on a path.
    pub fn floor_summary(&self) -> Vec<String> {
        (0..self.height)
            .map(|row| {
                let active: Vec<String> = self
                    .row(row)
                    .iter()
                    .filter(|node| self.is_active(self.idx(node.row, node.column)))
                    .map(ToString::to_string)
                    .collect();
                format!("floor {row}: {}", active.join(", "))
            })
            .collect()
    }

    pub(crate) fn idx(&self, row: usize, column: usize) -> usize {
        row * self.width + column
    }

    pub(crate) fn node_mut(&mut self, index: usize) -> &mut MapNode {
        &mut self.nodes[index]
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }
}
