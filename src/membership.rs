//! Community membership: which community each node key belongs to.

use std::collections::HashMap;
use std::hash::Hash;

use petgraph::graph::UnGraph;
use serde::{Deserialize, Serialize};

use crate::node::Keyed;

/// A node-key to community-id map produced by detection.
///
/// Community ids are dense (`0..k`) when produced by a detector in this
/// crate; memberships built by hand or loaded from storage may use any ids.
/// Serializes as the flat `{key: community}` object that visualization
/// sinks expect.
///
/// # Example
///
/// ```
/// use enclave::Membership;
///
/// let membership: Membership<&str> = [("a", 0), ("b", 0), ("c", 1)].into_iter().collect();
/// assert_eq!(membership.community_count(), 2);
/// assert_eq!(membership.sizes()[&0], 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Membership<K: Eq + Hash> {
    assignments: HashMap<K, usize>,
}

impl<K: Eq + Hash> Membership<K> {
    /// Create an empty membership.
    pub fn new() -> Self {
        Self {
            assignments: HashMap::new(),
        }
    }

    /// The community the key belongs to, if any.
    pub fn get(&self, key: &K) -> Option<usize> {
        self.assignments.get(key).copied()
    }

    /// Whether the key has an assignment.
    pub fn contains(&self, key: &K) -> bool {
        self.assignments.contains_key(key)
    }

    /// Assign a key to a community, replacing any previous assignment.
    pub fn insert(&mut self, key: K, community: usize) {
        self.assignments.insert(key, community);
    }

    /// Number of assigned keys.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether no keys are assigned.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Iterate over `(key, community)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.assignments.iter().map(|(key, &community)| (key, community))
    }

    /// Member count per community id.
    ///
    /// Counts assignments, not graph nodes, so keys without a node in some
    /// particular graph still contribute.
    pub fn sizes(&self) -> HashMap<usize, usize> {
        let mut sizes = HashMap::new();
        for &community in self.assignments.values() {
            *sizes.entry(community).or_insert(0) += 1;
        }
        sizes
    }

    /// Distinct community ids, ascending.
    pub fn communities(&self) -> Vec<usize> {
        let mut ids: Vec<usize> = self.assignments.values().copied().collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Number of distinct communities.
    pub fn community_count(&self) -> usize {
        self.communities().len()
    }
}

impl<K: Eq + Hash + Clone> Membership<K> {
    /// Key the dense label vector returned by a detector, where `labels[i]`
    /// is the community of the node at index `i`.
    pub fn from_labels<N, E>(graph: &UnGraph<N, E>, labels: &[usize]) -> Self
    where
        N: Keyed<Key = K>,
    {
        debug_assert_eq!(labels.len(), graph.node_count());
        let mut assignments = HashMap::with_capacity(labels.len());
        for (idx, &community) in graph.node_indices().zip(labels) {
            if let Some(node) = graph.node_weight(idx) {
                assignments.insert(node.key().clone(), community);
            }
        }
        Self { assignments }
    }
}

impl<K: Eq + Hash> Default for Membership<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> From<HashMap<K, usize>> for Membership<K> {
    fn from(assignments: HashMap<K, usize>) -> Self {
        Self { assignments }
    }
}

impl<K: Eq + Hash> FromIterator<(K, usize)> for Membership<K> {
    fn from_iter<I: IntoIterator<Item = (K, usize)>>(iter: I) -> Self {
        Self {
            assignments: iter.into_iter().collect(),
        }
    }
}
