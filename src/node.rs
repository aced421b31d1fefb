//! Node payloads: the identity seam used by detection and the attribute
//! seam written by annotation.

use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Node payloads that carry a stable identifier.
///
/// Detection runs on raw graph indices; keys are only read at the boundary,
/// when results are keyed for callers. The crate never interprets them
/// beyond equality and hashing, so anything from string ids to integer ids
/// works. Keys are assumed unique within a graph.
pub trait Keyed {
    /// Identifier type.
    type Key: Eq + Hash + Clone;

    /// The node's identifier.
    fn key(&self) -> &Self::Key;
}

/// Node payloads that can record community attributes in place.
///
/// [`annotate_and_prune`](crate::annotate::annotate_and_prune) writes through
/// this trait, so callers keep their own payload types.
pub trait CommunityNode: Keyed {
    /// Record the community assignment. `None` marks the node unassigned.
    fn set_community(&mut self, community: Option<usize>);

    /// Record how many members the node's community has (0 when unassigned).
    fn set_community_size(&mut self, size: usize);
}

/// Ready-made node payload: an identifier plus the attributes the annotator
/// writes back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node<K> {
    /// Opaque identifier.
    pub id: K,
    /// Community id, `None` until annotated (and for nodes the membership
    /// does not cover).
    #[serde(default)]
    pub community: Option<usize>,
    /// Member count of the node's community, 0 until annotated.
    #[serde(default)]
    pub community_size: usize,
}

impl<K> Node<K> {
    /// Create an unannotated node.
    pub fn new(id: K) -> Self {
        Self {
            id,
            community: None,
            community_size: 0,
        }
    }
}

impl<K: Eq + Hash + Clone> Keyed for Node<K> {
    type Key = K;

    fn key(&self) -> &K {
        &self.id
    }
}

impl<K: Eq + Hash + Clone> CommunityNode for Node<K> {
    fn set_community(&mut self, community: Option<usize>) {
        self.community = community;
    }

    fn set_community_size(&mut self, size: usize) {
        self.community_size = size;
    }
}

/// Identity keys for graphs whose node weight *is* the identifier.
macro_rules! keyed_identity {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Keyed for $ty {
                type Key = $ty;

                fn key(&self) -> &$ty {
                    self
                }
            }
        )*
    };
}

keyed_identity!(String, u32, u64, usize, i32, i64);
