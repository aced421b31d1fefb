//! # enclave
//!
//! Community detection by label propagation, plus the write-back half:
//! annotate nodes with their community and its size, then prune the edges
//! that cross community boundaries, leaving one connected subgraph per
//! community.
//!
//! ```rust
//! use enclave::{annotate_and_prune, CommunityDetection, LabelPropagation, Node};
//! use petgraph::graph::UnGraph;
//!
//! // Two triangles, no edges between them
//! let mut graph = UnGraph::<Node<&str>, ()>::new_undirected();
//! let ids: Vec<_> = ["a", "b", "c", "d", "e", "f"]
//!     .into_iter()
//!     .map(|id| graph.add_node(Node::new(id)))
//!     .collect();
//! for (u, v) in [(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)] {
//!     graph.add_edge(ids[u], ids[v], ());
//! }
//!
//! let lp = LabelPropagation::new().with_max_iter(5).with_seed(42);
//! let membership = lp.partition(&graph)?;
//! assert_eq!(membership.community_count(), 2);
//!
//! annotate_and_prune(&mut graph, &membership);
//! assert_eq!(graph.edge_count(), 6); // nothing crossed a boundary
//! # Ok::<(), enclave::Error>(())
//! ```

pub mod annotate;
pub mod community;
/// Error types used across `enclave`.
pub mod error;
pub mod membership;
pub mod node;
pub mod palette;


pub use annotate::annotate_and_prune;
pub use community::{CommunityDetection, LabelPropagation};
pub use error::{Error, Result};
pub use membership::Membership;
pub use node::{CommunityNode, Keyed, Node};
pub use palette::{assign_colors, color_of, PALETTE};
