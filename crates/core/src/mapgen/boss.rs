use crate::types::NodeType;

use super::model::MapModel;

/// Marks the boss node and redirects every active node on the row before it into the boss.
pub(super) fn converge(model: &mut MapModel, max_connections: usize) {
    let Some(boss) = model.boss_index() else {
        return;
    };
    let penultimate_row = model.height() - 2;

    for column in 0..model.width() {
        let index = model.idx(penultimate_row, column);
        let node = model.node_mut(index);
        if node.has_next() {
            node.clear_next();
            node.push_edge(boss, max_connections);
        }
    }
    model.node_mut(boss).set_type(NodeType::Boss);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapgen::grid::generate_grid;
    use crate::test_support::{ScriptedSource, small_config};

    #[test]
    fn active_penultimate_nodes_collapse_into_a_single_boss_edge() {
        let config = small_config();
        let nodes = generate_grid(&config, &mut ScriptedSource::new());
        let mut model = MapModel::from_nodes(config.width, config.height, nodes);
        let left = model.idx(3, 0);
        let right = model.idx(3, 2);
        let below_left = model.idx(4, 0);
        let below_right = model.idx(4, 2);
        model.node_mut(left).push_edge(below_left, 3);
        model.node_mut(left).push_edge(below_left, 3);
        model.node_mut(right).push_edge(below_right, 3);

        converge(&mut model, config.max_connections);

        let boss = model.boss_index().expect("populated model");
        assert_eq!(boss, model.idx(4, 1));
        assert_eq!(model.node(3, 0).expect("in range").next(), &[boss]);
        assert_eq!(model.node(3, 2).expect("in range").next(), &[boss]);
        assert!(!model.node(3, 1).expect("in range").has_next());
        assert!(!model.node_at(boss).expect("boss").has_next());

        let bosses: Vec<usize> = (0..model.nodes().len())
            .filter(|&index| model.nodes()[index].node_type() == NodeType::Boss)
            .collect();
        assert_eq!(bosses, vec![boss]);
    }
}
