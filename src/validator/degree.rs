use crate::graph::Edge;
use crate::node::Node;
use ahash::AHashMap;

/// In-degree and out-degree of every node, built from a single pass over the edges.
///
/// Every node id starts at zero. Edge endpoints that match no node are counted
/// all the same under their own key, so a dangling edge never lowers or hides
/// a count; it only shows up as an extra key.
#[derive(Debug, Clone, Default)]
pub struct DegreeTable<'a> {
    incoming: AHashMap<&'a str, usize>,
    outgoing: AHashMap<&'a str, usize>,
}

impl<'a> DegreeTable<'a> {
    pub fn build(nodes: &[&'a Node], edges: &'a [Edge]) -> Self {
        let mut incoming: AHashMap<&'a str, usize> =
            nodes.iter().map(|n| (n.id(), 0)).collect();
        let mut outgoing: AHashMap<&'a str, usize> =
            nodes.iter().map(|n| (n.id(), 0)).collect();

        for edge in edges {
            *outgoing.entry(edge.source.as_str()).or_insert(0) += 1;
            *incoming.entry(edge.target.as_str()).or_insert(0) += 1;
        }

        Self { incoming, outgoing }
    }

    pub fn in_degree(&self, node_id: &str) -> usize {
        self.incoming.get(node_id).copied().unwrap_or(0)
    }

    pub fn out_degree(&self, node_id: &str) -> usize {
        self.outgoing.get(node_id).copied().unwrap_or(0)
    }

    /// Ids that received a count but are not nodes of the graph.
    pub fn unknown_ids(&self, nodes: &[&Node]) -> Vec<&'a str> {
        let mut unknown: Vec<&'a str> = self
            .incoming
            .keys()
            .chain(self.outgoing.keys())
            .copied()
            .filter(|id| !nodes.iter().any(|n| n.id() == *id))
            .collect();
        unknown.sort_unstable();
        unknown.dedup();
        unknown
    }

    /// Number of distinct ids tracked, including unknown ones.
    pub fn len(&self) -> usize {
        self.incoming
            .keys()
            .chain(self.outgoing.keys())
            .collect::<ahash::AHashSet<_>>()
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.incoming.is_empty() && self.outgoing.is_empty()
    }
}
