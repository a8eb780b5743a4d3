//! Shortest-path searches over arbitrary state spaces.
//!
//! A state is anything hashable: a bare [`crate::Position`], or a position
//! combined with whatever else the walker has to remember (heading,
//! consecutive steps, parity, ...).

use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, HashMap, VecDeque},
    hash::Hash,
};

#[derive(Debug, Clone)]
struct Visit<S> {
    state: S,
    cost: usize,
}

impl<S> Visit<S> {
    fn new(state: S, cost: usize) -> Self {
        Self { state, cost }
    }
}

impl<S> Ord for Visit<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost.cmp(&other.cost)
    }
}

impl<S> PartialOrd for Visit<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> PartialEq for Visit<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl<S> Eq for Visit<S> {}

/// Minimum cost from any of `starts` to the first state accepted by `is_goal`.
///
/// `neighbors` yields every successor of a state together with the cost of
/// the move. Returns the goal state reached and its cost.
pub fn dijkstra<S, N, I, G>(
    starts: impl IntoIterator<Item = (S, usize)>,
    mut neighbors: N,
    mut is_goal: G,
) -> Option<(S, usize)>
where
    S: Clone + Eq + Hash,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = (S, usize)>,
    G: FnMut(&S) -> bool,
{
    let mut min_costs = HashMap::new();
    let mut to_visit = BinaryHeap::new();
    for (start, cost) in starts {
        push_if_cheaper(&mut min_costs, &mut to_visit, start, cost);
    }

    let mut visit_n = 0usize;
    while let Some(Reverse(Visit { state, cost })) = to_visit.pop() {
        if min_costs.get(&state).is_some_and(|min_cost| *min_cost < cost) {
            continue;
        }

        visit_n += 1;
        if is_goal(&state) {
            log::debug!(
                "Reached goal with cost {} after {} visit(s), {} state(s) seen.",
                cost,
                visit_n,
                min_costs.len()
            );
            return Some((state, cost));
        }

        for (next_state, step_cost) in neighbors(&state) {
            push_if_cheaper(&mut min_costs, &mut to_visit, next_state, cost + step_cost);
        }
    }

    log::debug!(
        "No goal reachable, {} visit(s) over {} state(s).",
        visit_n,
        min_costs.len()
    );
    None
}

/// Minimum cost of every state reachable from `starts` within `max_cost`.
pub fn dijkstra_costs<S, N, I>(
    starts: impl IntoIterator<Item = (S, usize)>,
    mut neighbors: N,
    max_cost: usize,
) -> HashMap<S, usize>
where
    S: Clone + Eq + Hash,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = (S, usize)>,
{
    let mut min_costs = HashMap::new();
    let mut to_visit = BinaryHeap::new();
    for (start, cost) in starts {
        if cost <= max_cost {
            push_if_cheaper(&mut min_costs, &mut to_visit, start, cost);
        }
    }

    while let Some(Reverse(Visit { state, cost })) = to_visit.pop() {
        if min_costs.get(&state).is_some_and(|min_cost| *min_cost < cost) {
            continue;
        }

        for (next_state, step_cost) in neighbors(&state) {
            let next_cost = cost + step_cost;
            if next_cost <= max_cost {
                push_if_cheaper(&mut min_costs, &mut to_visit, next_state, next_cost);
            }
        }
    }

    min_costs
}

/// Step counts of every state reachable from `start` in at most `max_steps` unit moves.
pub fn bfs_steps<S, N, I>(start: S, mut neighbors: N, max_steps: usize) -> HashMap<S, usize>
where
    S: Clone + Eq + Hash,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
{
    let mut steps_of_states = HashMap::from([(start.clone(), 0)]);
    let mut search_states = VecDeque::from([(start, 0)]);
    while let Some((cur_state, cur_steps_n)) = search_states.pop_front() {
        if cur_steps_n == max_steps {
            continue;
        }

        for next_state in neighbors(&cur_state) {
            if !steps_of_states.contains_key(&next_state) {
                steps_of_states.insert(next_state.clone(), cur_steps_n + 1);
                search_states.push_back((next_state, cur_steps_n + 1));
            }
        }
    }

    steps_of_states
}

fn push_if_cheaper<S: Clone + Eq + Hash>(
    min_costs: &mut HashMap<S, usize>,
    to_visit: &mut BinaryHeap<Reverse<Visit<S>>>,
    state: S,
    cost: usize,
) {
    if min_costs.get(&state).map_or(true, |min_cost| cost < *min_cost) {
        min_costs.insert(state.clone(), cost);
        to_visit.push(Reverse(Visit::new(state, cost)));
    }
}
