use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::distance::{edge_cost, heuristic};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::location::LocationRegistry;

/// Number of near-miss names attached to an unknown-location error.
const SUGGESTION_LIMIT: usize = 3;

/// Find a route between `start` and `goal` using breadth-first search.
pub fn find_route(graph: &Graph, start: &str, goal: &str) -> Result<Option<Vec<String>>> {
    find_route_bfs(graph, start, goal)
}

/// Breadth-first search. The returned route has the fewest possible hops.
pub fn find_route_bfs(graph: &Graph, start: &str, goal: &str) -> Result<Option<Vec<String>>> {
    let start = resolve_endpoint(graph, start)?;
    let goal = resolve_endpoint(graph, goal)?;

    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            return reconstruct_path(&parents, start, goal).map(|path| Some(into_owned(path)));
        }

        for next in graph.neighbours(current) {
            let next = next.as_str();
            if visited.insert(next) {
                parents.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    Ok(None)
}

/// Depth-first search following neighbour order. Returns the first route
/// discovered, which can be far from the shortest.
pub fn find_route_dfs(graph: &Graph, start: &str, goal: &str) -> Result<Option<Vec<String>>> {
    let start = resolve_endpoint(graph, start)?;
    let goal = resolve_endpoint(graph, goal)?;

    if start == goal {
        return Ok(Some(vec![start.to_string()]));
    }

    let mut visited: HashSet<&str> = HashSet::from([start]);
    let mut stack = vec![Frame::new(start, usize::MAX)];

    while let Some(frame) = stack.last_mut() {
        let Some(next) = frame.next_unvisited(graph, &visited) else {
            stack.pop();
            continue;
        };

        visited.insert(next);
        stack.push(Frame::new(next, usize::MAX));
        if next == goal {
            return Ok(Some(stack.iter().map(|f| f.node.to_string()).collect()));
        }
    }

    Ok(None)
}

/// Iterative-deepening depth-first search.
///
/// Runs a depth-limited search with bounds 0, 1, 2, ... until one succeeds.
/// With `max_depth` set to `None` the search never gives up: when `goal` is
/// unreachable from `start` this function does not return. Callers that
/// cannot rule that out should pass a bound; any bound at least the number
/// of locations in the graph finds every reachable goal.
pub fn find_route_iddfs(
    graph: &Graph,
    start: &str,
    goal: &str,
    max_depth: Option<usize>,
) -> Result<Option<Vec<String>>> {
    let start = resolve_endpoint(graph, start)?;
    let goal = resolve_endpoint(graph, goal)?;

    let mut limit = 0usize;
    loop {
        if max_depth.is_some_and(|max| limit > max) {
            debug!(max_depth = ?max_depth, "iterative deepening exhausted its depth bound");
            return Ok(None);
        }

        debug!(limit, "iterative deepening pass");
        if let Some(path) = depth_limited_search(graph, start, goal, limit) {
            return Ok(Some(into_owned(path)));
        }
        limit += 1;
    }
}

/// Greedy best-first search ordered by the cost of the last edge only.
///
/// Accumulated cost is ignored on purpose, so the result may be a locally
/// cheap but globally expensive route. Edges touching a location without
/// coordinates cost `f64::INFINITY`.
pub fn find_route_best_first(
    graph: &Graph,
    registry: &LocationRegistry,
    start: &str,
    goal: &str,
) -> Result<Option<Vec<String>>> {
    let start = resolve_endpoint(graph, start)?;
    let goal = resolve_endpoint(graph, goal)?;

    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut frontier = Frontier::default();
    frontier.push(start, 0.0);

    while let Some(current) = frontier.pop() {
        if current == goal {
            return reconstruct_path(&parents, start, goal).map(|path| Some(into_owned(path)));
        }
        if !visited.insert(current) {
            continue;
        }

        for next in graph.neighbours(current) {
            let next = next.as_str();
            if visited.contains(next) {
                continue;
            }
            frontier.push(next, edge_cost(registry, current, next));
            parents.insert(next, current);
        }
    }

    Ok(None)
}

/// A* search using great-circle edge costs and the straight-line distance to
/// `goal` as heuristic. Nodes are finalised the first time they are popped.
pub fn find_route_a_star(
    graph: &Graph,
    registry: &LocationRegistry,
    start: &str,
    goal: &str,
) -> Result<Option<Vec<String>>> {
    let start = resolve_endpoint(graph, start)?;
    let goal = resolve_endpoint(graph, goal)?;

    let mut g_score: HashMap<&str, f64> = HashMap::from([(start, 0.0)]);
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut closed: HashSet<&str> = HashSet::new();
    let mut frontier = Frontier::default();
    frontier.push(start, heuristic(registry, start, goal));

    while let Some(current) = frontier.pop() {
        if current == goal {
            return reconstruct_path(&parents, start, goal).map(|path| Some(into_owned(path)));
        }
        if !closed.insert(current) {
            continue;
        }

        let current_g = g_score.get(current).copied().unwrap_or(f64::INFINITY);
        for next in graph.neighbours(current) {
            let next = next.as_str();
            if closed.contains(next) {
                continue;
            }

            let tentative_g = current_g + edge_cost(registry, current, next);
            let known = matches!(g_score.get(next), Some(&g) if g <= tentative_g);
            if !known {
                g_score.insert(next, tentative_g);
                frontier.push(next, tentative_g + heuristic(registry, next, goal));
                parents.insert(next, current);
            }
        }
    }

    Ok(None)
}

/// Walk the predecessor map back from `goal` to `start` and return the route
/// in start-to-goal order.
pub fn reconstruct_path<'g>(
    parents: &HashMap<&'g str, &'g str>,
    start: &'g str,
    goal: &'g str,
) -> Result<Vec<&'g str>> {
    let mut path = vec![goal];
    let mut current = goal;

    while current != start {
        // A valid chain never needs more links than the map holds.
        if path.len() > parents.len() {
            return Err(Error::BrokenPredecessorChain {
                location: current.to_string(),
            });
        }
        current = parents
            .get(current)
            .copied()
            .ok_or_else(|| Error::BrokenPredecessorChain {
                location: current.to_string(),
            })?;
        path.push(current);
    }

    path.reverse();
    Ok(path)
}

fn resolve_endpoint<'g>(graph: &'g Graph, name: &str) -> Result<&'g str> {
    graph.resolve(name).ok_or_else(|| Error::UnknownLocation {
        name: name.to_string(),
        suggestions: graph.fuzzy_matches(name, SUGGESTION_LIMIT),
    })
}

fn into_owned(path: Vec<&str>) -> Vec<String> {
    path.into_iter().map(str::to_string).collect()
}

/// One pass of depth-limited search. A node whose remaining budget is zero
/// fails unless it is the goal, and is not marked visited in that case.
/// Visited marks survive backtracking within the pass.
fn depth_limited_search<'g>(
    graph: &'g Graph,
    start: &'g str,
    goal: &str,
    limit: usize,
) -> Option<Vec<&'g str>> {
    if start == goal {
        return Some(vec![start]);
    }
    if limit == 0 {
        return None;
    }

    let mut visited: HashSet<&str> = HashSet::from([start]);
    let mut stack = vec![Frame::new(start, limit)];

    while let Some(frame) = stack.last_mut() {
        let Some(next) = frame.next_unvisited(graph, &visited) else {
            stack.pop();
            continue;
        };
        let budget = frame.budget - 1;

        if next == goal {
            let mut path: Vec<&str> = stack.iter().map(|f| f.node).collect();
            path.push(next);
            return Some(path);
        }
        if budget == 0 {
            continue;
        }

        visited.insert(next);
        stack.push(Frame::new(next, budget));
    }

    None
}

/// Explicit stack frame standing in for one level of recursive descent.
#[derive(Debug)]
struct Frame<'g> {
    node: &'g str,
    cursor: usize,
    budget: usize,
}

impl<'g> Frame<'g> {
    fn new(node: &'g str, budget: usize) -> Self {
        Self {
            node,
            cursor: 0,
            budget,
        }
    }

    /// Advance past visited neighbours and return the next candidate.
    fn next_unvisited(&mut self, graph: &'g Graph, visited: &HashSet<&str>) -> Option<&'g str> {
        let neighbours = graph.neighbours(self.node);
        while let Some(candidate) = neighbours.get(self.cursor) {
            self.cursor += 1;
            if !visited.contains(candidate.as_str()) {
                return Some(candidate.as_str());
            }
        }
        None
    }
}

/// Min-priority frontier. Equal priorities pop in insertion order.
#[derive(Debug, Default)]
struct Frontier<'g> {
    heap: BinaryHeap<QueueEntry<'g>>,
    pushed: u64,
}

impl<'g> Frontier<'g> {
    fn push(&mut self, node: &'g str, priority: f64) {
        self.heap.push(QueueEntry {
            node,
            priority: FloatOrd(priority),
            sequence: self.pushed,
        });
        self.pushed += 1;
    }

    fn pop(&mut self) -> Option<&'g str> {
        self.heap.pop().map(|entry| entry.node)
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'g> {
    node: &'g str,
    priority: FloatOrd,
    sequence: u64,
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by priority.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstructs_chain_in_start_to_goal_order() {
        let parents = HashMap::from([("B", "A"), ("C", "B"), ("D", "C")]);
        let path = reconstruct_path(&parents, "A", "D").unwrap();
        assert_eq!(path, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn reconstruct_single_location() {
        let parents = HashMap::new();
        assert_eq!(reconstruct_path(&parents, "A", "A").unwrap(), vec!["A"]);
    }

    #[test]
    fn broken_chain_is_reported() {
        let parents = HashMap::from([("C", "B")]);
        let err = reconstruct_path(&parents, "A", "C").unwrap_err();
        assert!(matches!(err, Error::BrokenPredecessorChain { location } if location == "B"));
    }

    #[test]
    fn cyclic_chain_is_reported() {
        let parents = HashMap::from([("B", "C"), ("C", "B")]);
        assert!(reconstruct_path(&parents, "A", "C").is_err());
    }

    #[test]
    fn frontier_pops_lowest_priority_then_oldest() {
        let mut frontier = Frontier::default();
        frontier.push("late", 2.0);
        frontier.push("first", 1.0);
        frontier.push("second", 1.0);
        frontier.push("never-cheap", f64::INFINITY);

        let order: Vec<_> = std::iter::from_fn(|| frontier.pop()).collect();
        assert_eq!(order, vec!["first", "second", "late", "never-cheap"]);
    }

    #[test]
    fn depth_limited_search_respects_budget() {
        let mut builder = Graph::builder();
        builder.add_edge("A", "B").add_edge("B", "C");
        let graph = builder.build();

        assert_eq!(depth_limited_search(&graph, "A", "C", 1), None);
        assert_eq!(
            depth_limited_search(&graph, "A", "C", 2),
            Some(vec!["A", "B", "C"])
        );
    }
}
