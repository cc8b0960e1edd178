//! Graph traversal algorithms (closures and bounded BFS).
//!
//! Provides generic traversal via the [`GraphTraversal`] trait, so every graph
//! in this crate answers closure queries with the same cycle-safe walk.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// Trait for graph traversal — any adjacency store can implement this.
pub trait GraphTraversal<V> {
    /// Returns the direct children of a vertex, `None` if the vertex is absent.
    fn children_of(&self, vertex: &V) -> Option<&HashSet<V>>;

    /// Returns the direct parents of a vertex, `None` if the vertex is absent.
    fn parents_of(&self, vertex: &V) -> Option<&HashSet<V>>;

    /// Returns the vertices adjacent to `vertex` in the given direction.
    fn adjacent(&self, vertex: &V, direction: Direction) -> Option<&HashSet<V>> {
        match direction {
            Direction::Children => self.children_of(vertex),
            Direction::Parents => self.parents_of(vertex),
        }
    }
}

/// Which edges a traversal follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Follow parent → child edges (descendants).
    #[default]
    Children,
    /// Follow child → parent edges (ancestors).
    Parents,
}

/// Computes the transitive closure of `origin` along `direction`.
///
/// Uses an explicit stack and a visited set, so deep or cyclic graphs neither
/// overflow nor loop. Each reachable vertex appears once; `origin` never
/// appears, even when it is reachable from itself. An absent origin yields an
/// empty set.
#[must_use]
pub fn closure<V, G>(graph: &G, origin: &V, direction: Direction) -> HashSet<V>
where
    V: Hash + Eq + Clone,
    G: GraphTraversal<V> + ?Sized,
{
    let mut reached = HashSet::new();
    let Some(start) = graph.adjacent(origin, direction) else {
        return reached;
    };

    let mut stack: Vec<&V> = start.iter().collect();
    while let Some(current) = stack.pop() {
        if current == origin || reached.contains(current) {
            continue;
        }
        reached.insert(current.clone());
        if let Some(next) = graph.adjacent(current, direction) {
            stack.extend(next.iter().filter(|v| !reached.contains(*v)));
        }
    }

    reached
}

/// A single step in a bounded traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalStep<V> {
    /// The vertex reached at this step.
    pub vertex: V,
    /// Number of hops from the source.
    pub depth: usize,
}

/// Configuration for bounded traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalConfig {
    /// Maximum traversal depth.
    pub max_depth: usize,
    /// Maximum number of results.
    pub limit: usize,
    /// Edges to follow.
    pub direction: Direction,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            limit: 100,
            direction: Direction::Children,
        }
    }
}

impl TraversalConfig {
    /// Creates a child-direction config with the given max depth and limit.
    #[must_use]
    pub fn new(max_depth: usize, limit: usize) -> Self {
        Self {
            max_depth,
            limit,
            direction: Direction::Children,
        }
    }

    /// Sets the traversal direction (builder pattern).
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

/// BFS traversal from a source vertex.
///
/// Returns vertices within `config.max_depth` hops in breadth-first order,
/// each at the depth it was first reached, up to `config.limit` steps. The
/// source is never reported.
#[must_use]
pub fn bfs<'a, V, G>(graph: &'a G, source: &'a V, config: &TraversalConfig) -> Vec<TraversalStep<V>>
where
    V: Hash + Eq + Clone,
    G: GraphTraversal<V> + ?Sized,
{
    let mut results = Vec::new();
    let mut visited: HashSet<&V> = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(source);
    queue.push_back((source, 0usize));

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= config.max_depth {
            continue;
        }
        let Some(next) = graph.adjacent(current, config.direction) else {
            continue;
        };

        for target in next {
            if results.len() >= config.limit {
                return results;
            }
            if !visited.insert(target) {
                continue;
            }
            results.push(TraversalStep {
                vertex: target.clone(),
                depth: depth + 1,
            });
            queue.push_back((target, depth + 1));
        }
    }

    results
}
