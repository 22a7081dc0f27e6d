//! Path construction: starting columns and row-by-row non-crossing connections.

use std::collections::BTreeSet;

use crate::config::MapConfig;
use crate::random::RandomSource;

use super::model::MapModel;

pub(super) struct PathConnector<'a, R: RandomSource + ?Sized> {
    pub config: &'a MapConfig,
    pub model: &'a mut MapModel,
    pub rng: &'a mut R,
}

impl<R: RandomSource + ?Sized> PathConnector<'_, R> {
    /// Draws one starting column per path, redrawing the whole set until at
    /// least two distinct columns appear.
    pub fn pick_starting_columns(&mut self) -> Vec<usize> {
        let max_column = (self.config.width - 1) as i32;
        loop {
            let columns: Vec<usize> = (0..self.config.paths)
                .map(|_| self.rng.uniform_int(0, max_column).clamp(0, max_column) as usize)
                .collect();
            let distinct: BTreeSet<usize> = columns.iter().copied().collect();
            if distinct.len() >= 2 {
                return columns;
            }
        }
    }

    /// Walks every path from row 0 down to the row before the boss.
    pub fn connect_paths(&mut self, starting_columns: &[usize]) {
        let last_row = self.config.height - 2;
        for &start in starting_columns {
            let mut column = start;
            for row in 0..=last_row {
                column = self.connect_one_step(row, column);
            }
        }
    }

    /// Adds one edge from `(row, column)` into the next row and returns the chosen column.
    pub fn connect_one_step(&mut self, row: usize, column: usize) -> usize {
        let max_column = (self.config.width - 1) as i64;
        let target_column = loop {
            let offset = i64::from(self.rng.uniform_int(-1, 1));
            let candidate = (column as i64 + offset).clamp(0, max_column) as usize;
            if !would_cross(self.model, row, column, candidate) {
                break candidate;
            }
            log::trace!("rejected crossing edge ({row}, {column}) -> ({}, {candidate})", row + 1);
        };

        let source = self.model.idx(row, column);
        let target = self.model.idx(row + 1, target_column);
        let source_type = self.model.node_mut(source).node_type();
        self.model.node_mut(source).push_edge(target, self.config.max_connections);
        self.model.node_mut(target).record_parent_type(source_type);
        target_column
    }
}

/// True when an edge `(row, column) -> (row + 1, candidate)` would form an X with
/// an edge already committed by the adjacent column on the side we move toward.
pub(super) fn would_cross(model: &MapModel, row: usize, column: usize, candidate: usize) -> bool {
    if candidate > column && column + 1 < model.width() {
        let neighbor = &model.nodes()[model.idx(row, column + 1)];
        return neighbor.next().iter().any(|&target| target_column(model, target) < candidate);
    }
    if candidate < column && column > 0 {
        let neighbor = &model.nodes()[model.idx(row, column - 1)];
        return neighbor.next().iter().any(|&target| target_column(model, target) > candidate);
    }
    false
}

fn target_column(model: &MapModel, target: usize) -> usize {
    target % model.width()
}
