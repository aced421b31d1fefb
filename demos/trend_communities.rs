use enclave::{annotate_and_prune, assign_colors, CommunityDetection, LabelPropagation, Node};
use petgraph::graph::UnGraph;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Minimal end-to-end: co-occurrence graph -> label propagation ->
    // annotated nodes with cross-community edges pruned.

    // Search terms that showed up in the same sessions. Three obvious
    // topics, plus one noisy edge where sessions overlapped.
    let pairs = [
        ("rain radar", "weather tomorrow"),
        ("weather tomorrow", "storm warning"),
        ("rain radar", "storm warning"),
        ("premier league", "transfer news"),
        ("transfer news", "match highlights"),
        ("premier league", "match highlights"),
        ("banana bread", "sourdough starter"),
        ("sourdough starter", "no knead bread"),
        ("banana bread", "no knead bread"),
        ("storm warning", "match highlights"),
    ];

    let mut graph = UnGraph::<Node<&str>, u32>::new_undirected();
    let mut indices = std::collections::HashMap::new();
    for &(a, b) in &pairs {
        let ai = *indices
            .entry(a)
            .or_insert_with(|| graph.add_node(Node::new(a)));
        let bi = *indices
            .entry(b)
            .or_insert_with(|| graph.add_node(Node::new(b)));
        graph.add_edge(ai, bi, 1);
    }

    let lp = LabelPropagation::new().with_max_iter(10).with_seed(7);
    let membership = lp.partition(&graph)?;

    println!(
        "n_nodes={} n_edges={} communities={}",
        graph.node_count(),
        graph.edge_count(),
        membership.community_count()
    );

    annotate_and_prune(&mut graph, &membership);
    println!("edges after pruning: {}", graph.edge_count());

    // The flat layout the membership serializes to, sorted for stable output.
    let sorted: std::collections::BTreeMap<_, _> = membership.iter().collect();
    println!("membership={}", serde_json::to_string(&sorted)?);

    for (community, color) in assign_colors(&membership) {
        let mut members: Vec<&str> = membership
            .iter()
            .filter(|&(_, c)| c == community)
            .map(|(&key, _)| key)
            .collect();
        members.sort_unstable();
        println!("  community {} ({}): {:?}", community, color, members);
    }

    Ok(())
}
