//! Directed tree built from `(substance, attribute, payload)` edges
//!
//! Construction validates, in order:
//! 1. acyclicity
//! 2. a single root
//! 3. a single parent for every other node
//! 4. every node reachable from the root
//! 5. the node count against the configured maximum
//!
//! A valid graph is stratified: stage 0 holds the root, stage k+1 the
//! children of stage k. Walking the stages in order and, within a stage,
//! the outgoing edges sorted by payload gives the canonical edge order. It
//! only depends on the edge set, never on the order the edges came in.

use crate::error::TreeStructureError;
use crate::syntax::Canonical;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeGraphError {
    Structure(TreeStructureError),
    TooManyNodes { limit: usize, actual: usize },
}

impl fmt::Display for TreeGraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeGraphError::Structure(cause) => write!(f, "{}", cause),
            TreeGraphError::TooManyNodes { limit, actual } => {
                write!(f, "too many distinct nodes: {} > {}", actual, limit)
            }
        }
    }
}

impl std::error::Error for TreeGraphError {}

impl From<TreeStructureError> for TreeGraphError {
    fn from(cause: TreeStructureError) -> Self {
        TreeGraphError::Structure(cause)
    }
}

#[derive(Debug, Clone)]
struct Edge<P> {
    substance: usize,
    attribute: usize,
    payload: P,
}

#[derive(Debug, Clone)]
pub struct TreeGraph<N, P> {
    /// Distinct nodes, sorted
    nodes: Vec<N>,
    edges: Vec<Edge<P>>,
    root: usize,
    parents: Vec<Option<usize>>,
    /// Outgoing edge indices per node, sorted by payload
    transitions: Vec<Vec<usize>>,
    /// Node indices per level, each level sorted
    stages: Vec<Vec<usize>>,
    /// Edge indices in canonical order
    order: Vec<usize>,
}

impl<N, P> TreeGraph<N, P>
where
    N: Ord + Clone + Canonical,
    P: Ord,
{
    pub fn new<I>(edges: I, max_nodes: usize) -> Result<Self, TreeGraphError>
    where
        I: IntoIterator<Item = (N, N, P)>,
    {
        let raw: Vec<(N, N, P)> = edges.into_iter().collect();

        let nodes: Vec<N> = raw
            .iter()
            .flat_map(|(substance, attribute, _)| [substance.clone(), attribute.clone()])
            .collect::<BTreeSet<N>>()
            .into_iter()
            .collect();
        let index: BTreeMap<&N, usize> = nodes.iter().enumerate().map(|(i, n)| (n, i)).collect();

        let edges: Vec<Edge<P>> = raw
            .into_iter()
            .map(|(substance, attribute, payload)| Edge {
                substance: index[&substance],
                attribute: index[&attribute],
                payload,
            })
            .collect();

        let mut transitions = vec![Vec::new(); nodes.len()];
        let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        for (i, edge) in edges.iter().enumerate() {
            transitions[edge.substance].push(i);
            incoming[edge.attribute].push(edge.substance);
        }
        for outgoing in &mut transitions {
            outgoing.sort_by(|&a, &b| edges[a].payload.cmp(&edges[b].payload));
        }

        let names = |indices: &[usize]| -> Vec<String> {
            indices
                .iter()
                .map(|&i| nodes[i].canonical().to_string())
                .collect()
        };

        if let Some(cycle) = detect_cycle(&transitions, &edges) {
            return Err(TreeStructureError::Cycle(names(&cycle)).into());
        }

        let roots: Vec<usize> = (0..nodes.len())
            .filter(|&i| incoming[i].is_empty())
            .collect();
        let root = match roots.as_slice() {
            [root] => *root,
            [] => return Err(TreeStructureError::NoRoot.into()),
            _ => return Err(TreeStructureError::MultipleRoots(names(&roots)).into()),
        };

        if let Some(node) = (0..nodes.len()).find(|&i| incoming[i].len() > 1) {
            let mut parents = incoming[node].clone();
            parents.sort_unstable();
            return Err(TreeStructureError::MultipleParents {
                node: nodes[node].canonical().to_string(),
                parents: names(&parents),
            }
            .into());
        }
        let parents: Vec<Option<usize>> = incoming.iter().map(|p| p.first().copied()).collect();

        let stages = stratify(root, &transitions, &edges);
        let reached: usize = stages.iter().map(Vec::len).sum();
        // Unreachable after the cycle, root and parent checks; kept to guard the connectivity walk.
        if reached < nodes.len() {
            let mut visited = vec![false; nodes.len()];
            for &node in stages.iter().flatten() {
                visited[node] = true;
            }
            let unreachable: Vec<usize> = (0..nodes.len()).filter(|&i| !visited[i]).collect();
            return Err(TreeStructureError::Disconnected(names(&unreachable)).into());
        }

        if nodes.len() > max_nodes {
            return Err(TreeGraphError::TooManyNodes {
                limit: max_nodes,
                actual: nodes.len(),
            });
        }

        let order = stages
            .iter()
            .flat_map(|stage| {
                let mut stage_edges: Vec<usize> = stage
                    .iter()
                    .flat_map(|&node| transitions[node].iter().copied())
                    .collect();
                stage_edges.sort_by(|&a, &b| edges[a].payload.cmp(&edges[b].payload));
                stage_edges
            })
            .collect();

        Ok(Self {
            nodes,
            edges,
            root,
            parents,
            transitions,
            stages,
            order,
        })
    }

    fn position(&self, node: &N) -> Option<usize> {
        self.nodes.binary_search(node).ok()
    }

    /// Distinct nodes, sorted
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> &N {
        &self.nodes[self.root]
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.position(node).is_some()
    }

    /// Nodes grouped by distance from the root
    pub fn stages(&self) -> Vec<Vec<&N>> {
        self.stages
            .iter()
            .map(|stage| stage.iter().map(|&i| &self.nodes[i]).collect())
            .collect()
    }

    pub fn depth(&self) -> usize {
        self.stages.len()
    }

    pub fn parent(&self, node: &N) -> Option<&N> {
        let position = self.position(node)?;
        self.parents[position].map(|p| &self.nodes[p])
    }

    /// Outgoing `(attribute, payload)` pairs of `node`, sorted by payload
    pub fn outgoing(&self, node: &N) -> Vec<(&N, &P)> {
        self.position(node)
            .map(|position| {
                self.transitions[position]
                    .iter()
                    .map(|&e| (&self.nodes[self.edges[e].attribute], &self.edges[e].payload))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// True if an edge goes from `from` to `to`
    pub fn is_adjacent(&self, from: &N, to: &N) -> bool {
        match (self.position(from), self.position(to)) {
            (Some(from), Some(to)) => self.parents[to] == Some(from),
            _ => false,
        }
    }

    /// `matrix[i][j]` is true if an edge goes from `nodes()[i]` to `nodes()[j]`
    pub fn adjacency_matrix(&self) -> Vec<Vec<bool>> {
        let mut matrix = vec![vec![false; self.nodes.len()]; self.nodes.len()];
        for edge in &self.edges {
            matrix[edge.substance][edge.attribute] = true;
        }
        matrix
    }

    /// Edge payloads in canonical order
    pub fn payloads(&self) -> impl Iterator<Item = &P> + '_ {
        self.order.iter().map(|&e| &self.edges[e].payload)
    }
}

/// Finds a cycle with an explicit stack, so deep chains cannot overflow.
/// The returned path starts and ends on the same node.
fn detect_cycle<P>(transitions: &[Vec<usize>], edges: &[Edge<P>]) -> Option<Vec<usize>> {
    let mut visited = vec![false; transitions.len()];
    let mut visiting = vec![false; transitions.len()];

    for start in 0..transitions.len() {
        if visited[start] {
            continue;
        }

        // (node, next outgoing edge to follow)
        let mut path: Vec<(usize, usize)> = vec![(start, 0)];
        visiting[start] = true;

        while let Some(top) = path.last_mut() {
            let (node, cursor) = *top;
            match transitions[node].get(cursor) {
                Some(&edge) => {
                    top.1 += 1;
                    let next = edges[edge].attribute;
                    if visiting[next] {
                        let cycle_start =
                            path.iter().position(|&(n, _)| n == next).unwrap_or(0);
                        let mut cycle: Vec<usize> =
                            path[cycle_start..].iter().map(|&(n, _)| n).collect();
                        cycle.push(next);
                        return Some(cycle);
                    }
                    if !visited[next] {
                        visiting[next] = true;
                        path.push((next, 0));
                    }
                }
                None => {
                    visiting[node] = false;
                    visited[node] = true;
                    path.pop();
                }
            }
        }
    }

    None
}

/// Groups the nodes reachable from `root` by level, each level sorted
fn stratify<P>(root: usize, transitions: &[Vec<usize>], edges: &[Edge<P>]) -> Vec<Vec<usize>> {
    let mut stages = vec![vec![root]];
    loop {
        let mut next: Vec<usize> = stages[stages.len() - 1]
            .iter()
            .flat_map(|&node| transitions[node].iter().map(|&e| edges[e].attribute))
            .collect();
        if next.is_empty() {
            return stages;
        }
        next.sort_unstable();
        next.dedup();
        stages.push(next);
    }
}
