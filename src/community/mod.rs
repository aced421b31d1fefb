//! Community detection for graphs.
//!
//! Given a graph, find natural groupings where nodes within groups are
//! densely connected, and connections between groups are sparse.
//!
//! ## Label Propagation
//!
//! Near-linear algorithm ([Raghavan et al. 2007](https://arxiv.org/abs/0709.2938))
//! that spreads labels through the network. Every node starts with a unique
//! label; each sweep visits the nodes in a fresh random permutation and each
//! node adopts the label held by the majority of its neighbors. Updates land
//! in place, so a node visited late in a sweep already sees its neighbors'
//! new labels. Densely connected groups agree on a label within a few
//! sweeps, and sparse connections between groups are too weak to push a
//! label across.
//!
//! Each sweep costs O(E). The result is approximate and depends on the
//! visit order, which is the point of the permutation: averaged over runs,
//! no node is privileged.
//!
//! ## Determinism
//!
//! Runs always execute the configured number of sweeps; there is no
//! convergence test, so a run's cost depends only on graph size and the
//! sweep count. Ties in the neighbor vote go to the label seen first in
//! ascending node index order, never to a random pick. Together with a seed
//! this makes whole runs reproducible:
//!
//! ```rust
//! use petgraph::graph::UnGraph;
//! use enclave::community::{LabelPropagation, CommunityDetection};
//!
//! // Build a graph
//! let mut graph = UnGraph::<(), ()>::new_undirected();
//! let a = graph.add_node(());
//! let b = graph.add_node(());
//! let c = graph.add_node(());
//! graph.add_edge(a, b, ());
//! graph.add_edge(b, c, ());
//!
//! // Detect communities
//! let lp = LabelPropagation::new().with_seed(42);
//! let communities = lp.detect(&graph).unwrap();
//! // communities[i] = community ID for node i
//! assert_eq!(communities, lp.detect(&graph).unwrap());
//! ```
//!
//! ## References
//!
//! - Raghavan, Albert, Kumara (2007). "Near linear time algorithm to detect
//!   community structures in large-scale networks." Physical Review E 76, 036106.

mod label_prop;
mod traits;

pub use label_prop::LabelPropagation;
pub use traits::CommunityDetection;
