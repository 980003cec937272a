//! Arena storage for semantic graph nodes and edges.

use ccgamr_core::Pos;

/// Index into `AmrGraph::nodes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A concept in the semantic graph, created from one sentence leaf.
///
/// Two nodes are equal when their variables are equal.
#[derive(Debug, Clone)]
pub struct Node {
    concept: String,
    var: String,
    pos: Pos,
    position: usize,
}

impl Node {
    pub fn new(concept: impl Into<String>, var: impl Into<String>, pos: Pos, position: usize) -> Self {
        Self {
            concept: concept.into(),
            var: var.into(),
            pos,
            position,
        }
    }

    pub fn concept(&self) -> &str {
        &self.concept
    }

    /// Rename the concept. Used for particle verbs ("give" → "give-up").
    pub fn set_concept(&mut self, concept: impl Into<String>) {
        self.concept = concept.into();
    }

    pub fn var(&self) -> &str {
        &self.var
    }

    pub fn pos(&self) -> &Pos {
        &self.pos
    }

    /// Leaf index of the word this node was created from.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.var == other.var
    }
}

impl Eq for Node {}

/// Labelled edge pointing at `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    label: String,
    target: NodeId,
}

impl Edge {
    pub fn new(label: impl Into<String>, target: NodeId) -> Self {
        Self {
            label: label.into(),
            target,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn target(&self) -> NodeId {
        self.target
    }
}

/// Directed labelled multigraph over sentence concepts.
#[derive(Debug, Default)]
pub struct AmrGraph {
    nodes: Vec<Node>,
    outgoing: Vec<Vec<Edge>>,
    removed: Vec<bool>,
}

impl AmrGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, returning its ID.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        self.outgoing.push(Vec::new());
        self.removed.push(false);
        id
    }

    /// Get node by ID.
    pub fn node(&self, id: NodeId) -> &Node {
        self.ensure_node(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get mutable node by ID.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.ensure_node(id);
        &mut self.nodes[id.index()]
    }

    /// Number of node slots, including deleted ones.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over live nodes with their IDs.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.removed[*i])
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    pub fn is_removed(&self, id: NodeId) -> bool {
        self.removed[id.index()]
    }

    /// Outgoing edges of `id`, in insertion order.
    pub fn edges(&self, id: NodeId) -> &[Edge] {
        &self.outgoing[id.index()]
    }

    pub fn edges_mut(&mut self, id: NodeId) -> &mut [Edge] {
        &mut self.outgoing[id.index()]
    }

    pub fn has_edges(&self, id: NodeId) -> bool {
        !self.outgoing[id.index()].is_empty()
    }

    /// Total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.outgoing.iter().map(Vec::len).sum()
    }

    /// Append an edge. Parallel edges are kept.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, label: impl Into<String>) {
        self.ensure_live(from);
        self.ensure_live(to);
        self.outgoing[from.index()].push(Edge::new(label, to));
    }

    /// Remove every edge `from → to`. Returns how many were removed.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> usize {
        let edges = &mut self.outgoing[from.index()];
        let before = edges.len();
        edges.retain(|e| e.target != to);
        before - edges.len()
    }

    /// Remove every edge pointing at `to`. Returns how many were removed.
    pub fn remove_edges_to(&mut self, to: NodeId) -> usize {
        let mut count = 0;
        for edges in &mut self.outgoing {
            let before = edges.len();
            edges.retain(|e| e.target != to);
            count += before - edges.len();
        }
        count
    }

    /// Remove and return all outgoing edges of `from`.
    pub fn detach(&mut self, from: NodeId) -> Vec<Edge> {
        std::mem::take(&mut self.outgoing[from.index()])
    }

    /// Delete a node: drop its outgoing and incoming edges and mark it dead.
    pub fn delete_node(&mut self, id: NodeId) -> Vec<Edge> {
        let detached = self.detach(id);
        self.remove_edges_to(id);
        self.removed[id.index()] = true;
        detached
    }

    /// First node (in id order) with an edge pointing at `node`.
    pub fn first_parent(&self, node: NodeId) -> Option<NodeId> {
        self.sources_of(node).next()
    }

    /// Label of the first edge `from → to`.
    pub fn edge_label(&self, from: NodeId, to: NodeId) -> Option<&str> {
        self.outgoing[from.index()]
            .iter()
            .find(|e| e.target == to)
            .map(Edge::label)
    }

    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.outgoing[from.index()].iter().any(|e| e.target == to)
    }

    /// Whether any edge points at `node`.
    pub fn is_target(&self, node: NodeId) -> bool {
        self.sources_of(node).next().is_some()
    }

    /// Whether an edge from some node other than `excluded` points at `node`.
    pub fn is_target_excluding(&self, excluded: NodeId, node: NodeId) -> bool {
        self.sources_of(node).any(|source| source != excluded)
    }

    fn sources_of(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.outgoing
            .iter()
            .enumerate()
            .filter(move |(_, edges)| edges.iter().any(|e| e.target == node))
            .map(|(i, _)| NodeId(i as u32))
    }
}
