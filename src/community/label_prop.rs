//! Label propagation for community detection.
//!
//! Very fast O(E)-per-sweep algorithm where nodes adopt the most common
//! label among their neighbors. Each sweep visits every node once, in a
//! fresh random permutation, and updates labels in place so nodes later
//! in the sweep already see earlier updates.
//!
//! The run is reproducible: seed the detector (or hand it an RNG) and ties
//! are broken deterministically, by consulting neighbors in ascending node
//! index order and keeping the first label that reaches the winning count.

use std::collections::HashMap;

use super::traits::CommunityDetection;
use crate::error::{Error, Result};
use petgraph::graph::UnGraph;
use rand::prelude::*;

/// Label propagation community detection.
#[derive(Debug, Clone)]
pub struct LabelPropagation {
    /// Number of sweeps to run.
    max_iter: usize,
    /// Random seed.
    seed: Option<u64>,
}

impl LabelPropagation {
    /// Create a new label propagation detector.
    pub fn new() -> Self {
        Self {
            max_iter: 50,
            seed: None,
        }
    }

    /// Set the number of sweeps.
    ///
    /// All sweeps run even if labels stop changing early; with 0 sweeps
    /// every node stays in its own singleton community.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the random seed. Runs with the same seed on the same graph
    /// produce identical partitions.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Detect communities using a caller-owned randomness source.
    ///
    /// The configured seed is ignored; the RNG drives sweep order. Useful
    /// when one RNG governs a larger experiment.
    pub fn detect_with_rng<N, E, R>(&self, graph: &UnGraph<N, E>, rng: &mut R) -> Result<Vec<usize>>
    where
        R: Rng + ?Sized,
    {
        let n = graph.node_count();
        if n == 0 {
            return Err(Error::EmptyGraph);
        }

        // Initialize: each node has its own label
        let mut labels: Vec<usize> = (0..n).collect();

        // Adjacency sorted ascending once up front; tie-breaking below
        // depends on this order. A self-loop lists the node itself once.
        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
        for node in graph.node_indices() {
            let neighbors = &mut adjacency[node.index()];
            neighbors.extend(graph.neighbors(node).map(|v| v.index()));
            neighbors.sort_unstable();
        }

        let mut order: Vec<usize> = (0..n).collect();

        for _sweep in 0..self.max_iter {
            // One permutation per sweep, all from the same source
            order.shuffle(rng);

            for &node in &order {
                let neighbors = &adjacency[node];
                if neighbors.is_empty() {
                    continue;
                }

                // Count neighbor labels
                let mut label_counts = HashMap::with_capacity(neighbors.len());
                for &neighbor in neighbors {
                    *label_counts.entry(labels[neighbor]).or_insert(0usize) += 1;
                }

                // Most common label; ties go to the label seen first in
                // ascending neighbor order
                let mut best = labels[neighbors[0]];
                let mut best_count = label_counts[&best];
                for &neighbor in &neighbors[1..] {
                    let label = labels[neighbor];
                    let count = label_counts[&label];
                    if count > best_count {
                        best = label;
                        best_count = count;
                    }
                }

                labels[node] = best;
            }
        }

        // Renumber to consecutive integers, ascending by surviving label
        let mut unique: Vec<usize> = labels.clone();
        unique.sort_unstable();
        unique.dedup();

        tracing::debug!(
            nodes = n,
            sweeps = self.max_iter,
            communities = unique.len(),
            "label propagation finished"
        );

        Ok(labels
            .iter()
            .map(|&l| unique.iter().position(|&u| u == l).unwrap_or(0))
            .collect())
    }
}

impl Default for LabelPropagation {
    fn default() -> Self {
        Self::new()
    }
}

impl CommunityDetection for LabelPropagation {
    fn detect<N, E>(&self, graph: &UnGraph<N, E>) -> Result<Vec<usize>> {
        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };
        self.detect_with_rng(graph, &mut rng)
    }
}
