//! Write detection results back onto the graph and prune cross-community
//! edges, leaving the disjoint union of community subgraphs.

use petgraph::graph::{NodeIndex, UnGraph};

use crate::membership::Membership;
use crate::node::CommunityNode;

/// Write community attributes onto every node, then drop edges whose
/// endpoints sit in different communities.
///
/// Each node receives its community id and that community's member count,
/// as recorded in `membership`. Nodes the membership does not cover are
/// marked unassigned (`None`, size 0) and form one implicit bucket of their
/// own: an edge between two unassigned nodes survives, an edge between an
/// unassigned and an assigned node does not.
///
/// Sizes come from the membership itself, so keys without a node in this
/// graph still count toward their community's size. Node indices are
/// untouched; only edges are removed. Applying the same membership a second
/// time changes nothing.
pub fn annotate_and_prune<N, E>(graph: &mut UnGraph<N, E>, membership: &Membership<N::Key>)
where
    N: CommunityNode,
{
    let sizes = membership.sizes();

    // Assignment per node index, reused by the edge pass below. Unassigned
    // nodes share one implicit bucket: None compares equal to None.
    let mut assigned: Vec<Option<usize>> = vec![None; graph.node_count()];
    for i in 0..graph.node_count() {
        let idx = NodeIndex::new(i);
        if let Some(node) = graph.node_weight_mut(idx) {
            let community = membership.get(node.key());
            node.set_community(community);
            node.set_community_size(community.map_or(0, |c| sizes.get(&c).copied().unwrap_or(0)));
            assigned[i] = community;
        }
    }

    let before = graph.edge_count();
    graph.retain_edges(|g, e| match g.edge_endpoints(e) {
        Some((a, b)) => assigned[a.index()] == assigned[b.index()],
        None => false,
    });

    tracing::debug!(
        nodes = graph.node_count(),
        kept = graph.edge_count(),
        removed = before - graph.edge_count(),
        "annotated nodes and pruned cross-community edges"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    fn graph_of(
        ids: &[&'static str],
        edges: &[(usize, usize)],
    ) -> UnGraph<Node<&'static str>, ()> {
        let mut graph = UnGraph::new_undirected();
        let idx: Vec<_> = ids.iter().map(|&id| graph.add_node(Node::new(id))).collect();
        for &(u, v) in edges {
            let _ = graph.add_edge(idx[u], idx[v], ());
        }
        graph
    }

    fn node<'a>(graph: &'a UnGraph<Node<&'static str>, ()>, i: usize) -> &'a Node<&'static str> {
        graph.node_weight(NodeIndex::new(i)).unwrap()
    }

    #[test]
    fn test_attributes_written() {
        let mut graph = graph_of(
            &["a", "b", "c", "d", "e"],
            &[(0, 1), (1, 2), (0, 2), (3, 4)],
        );
        let membership: Membership<&str> =
            [("a", 0), ("b", 0), ("c", 0), ("d", 1), ("e", 1)].into_iter().collect();

        annotate_and_prune(&mut graph, &membership);

        for i in 0..3 {
            assert_eq!(node(&graph, i).community, Some(0));
            assert_eq!(node(&graph, i).community_size, 3);
        }
        for i in 3..5 {
            assert_eq!(node(&graph, i).community, Some(1));
            assert_eq!(node(&graph, i).community_size, 2);
        }
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_cross_community_edges_removed() {
        let mut graph = graph_of(&["a", "b", "c"], &[(0, 1), (1, 2)]);
        let membership: Membership<&str> = [("a", 0), ("b", 0), ("c", 1)].into_iter().collect();

        annotate_and_prune(&mut graph, &membership);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_edge(NodeIndex::new(0), NodeIndex::new(1)));
        assert!(!graph.contains_edge(NodeIndex::new(1), NodeIndex::new(2)));
    }

    #[test]
    fn test_unassigned_nodes_share_one_bucket() {
        let mut graph = graph_of(&["a", "x", "y"], &[(0, 1), (1, 2)]);
        let membership: Membership<&str> = [("a", 0)].into_iter().collect();

        annotate_and_prune(&mut graph, &membership);

        assert_eq!(node(&graph, 1).community, None);
        assert_eq!(node(&graph, 1).community_size, 0);

        // a-x straddles the bucket boundary, x-y does not
        assert!(!graph.contains_edge(NodeIndex::new(0), NodeIndex::new(1)));
        assert!(graph.contains_edge(NodeIndex::new(1), NodeIndex::new(2)));
    }

    #[test]
    fn test_sizes_follow_membership_not_graph() {
        let mut graph = graph_of(&["a"], &[]);
        let membership: Membership<&str> = [("a", 0), ("ghost", 0)].into_iter().collect();

        annotate_and_prune(&mut graph, &membership);

        assert_eq!(node(&graph, 0).community, Some(0));
        assert_eq!(node(&graph, 0).community_size, 2);
    }

    #[test]
    fn test_annotation_is_idempotent() {
        let mut graph = graph_of(
            &["a", "b", "c", "d"],
            &[(0, 1), (1, 2), (2, 3), (3, 0)],
        );
        let membership: Membership<&str> =
            [("a", 0), ("b", 0), ("c", 1), ("d", 1)].into_iter().collect();

        annotate_and_prune(&mut graph, &membership);
        let edges_after_first = graph.edge_count();
        let attrs_after_first: Vec<_> = graph
            .node_weights()
            .map(|n| (n.community, n.community_size))
            .collect();

        annotate_and_prune(&mut graph, &membership);
        let attrs_after_second: Vec<_> = graph
            .node_weights()
            .map(|n| (n.community, n.community_size))
            .collect();

        assert_eq!(graph.edge_count(), edges_after_first);
        assert_eq!(attrs_after_second, attrs_after_first);
    }

    #[test]
    fn test_empty_graph_is_noop() {
        let mut graph: UnGraph<Node<&str>, ()> = UnGraph::new_undirected();
        let membership: Membership<&str> = [("a", 0)].into_iter().collect();

        annotate_and_prune(&mut graph, &membership);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }
}
