//! Community detection traits.

use crate::error::Result;
use crate::membership::Membership;
use crate::node::Keyed;
use petgraph::graph::UnGraph;

/// Trait for community detection algorithms.
pub trait CommunityDetection {
    /// Detect communities in a graph.
    ///
    /// Returns a mapping from node index to community ID: `result[i]` is the
    /// community of the node at index `i`, and ids are dense in `0..k` for
    /// `k` communities.
    fn detect<N, E>(&self, graph: &UnGraph<N, E>) -> Result<Vec<usize>>;

    /// Detect communities and key the result by node identifier.
    fn partition<N, E>(&self, graph: &UnGraph<N, E>) -> Result<Membership<N::Key>>
    where
        N: Keyed,
    {
        let communities = self.detect(graph)?;
        Ok(Membership::from_labels(graph, &communities))
    }
}
