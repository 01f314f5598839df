//! Breadth-first puzzle solver.
//!
//! Unguided exhaustive exploration of a `StateSpace`: expand states in
//! first-in order, deduplicate configurations already seen, and reconstruct
//! the move sequence once a goal state is dequeued. Breadth-first order
//! makes the reported solution a shortest one, and the visited set
//! guarantees termination on the finite, cyclic move graph.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::StateSpace;

/// A solved search: the move sequence plus exploration counters.
#[derive(Clone, Debug)]
pub struct Solution<M> {
    /// Moves from the initial state to the goal, in order.
    pub moves: Vec<M>,
    /// States dequeued and expanded, the goal included.
    pub expanded: usize,
    /// Distinct states ever enqueued, the initial state included.
    pub generated: usize,
}

/// Searches breadth-first from `start` and returns a shortest solution.
///
/// Returns `None` when the reachable state space is exhausted without
/// finding a goal. Successors are expanded in sorted move order, so the
/// result is deterministic across runs.
pub fn solve<S: StateSpace>(start: S) -> Option<Solution<S::Move>> {
    // predecessor links double as the visited set; the start maps to None
    let mut parents: FxHashMap<S, Option<(S, S::Move)>> = FxHashMap::default();
    parents.insert(start.clone(), None);

    let mut frontier = VecDeque::new();
    frontier.push_back(start);

    let mut expanded = 0;
    let mut generated = 1;

    while let Some(state) = frontier.pop_front() {
        expanded += 1;

        if state.is_goal() {
            return Some(Solution {
                moves: reconstruct(&parents, &state),
                expanded,
                generated,
            });
        }

        let mut moves: Vec<S::Move> = state.legal_moves().into_iter().collect();
        moves.sort();

        for mv in moves {
            let successor = state.apply(mv);
            if parents.contains_key(&successor) {
                continue;
            }
            parents.insert(successor.clone(), Some((state.clone(), mv)));
            generated += 1;
            frontier.push_back(successor);
        }
    }

    None
}

/// Walks predecessor links back from `goal` and returns the path in
/// start-to-goal order.
fn reconstruct<S: StateSpace>(
    parents: &FxHashMap<S, Option<(S, S::Move)>>,
    goal: &S,
) -> Vec<S::Move> {
    let mut moves = Vec::new();
    let mut current = goal;
    while let Some(Some((previous, mv))) = parents.get(current) {
        moves.push(*mv);
        current = previous;
    }
    moves.reverse();
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PuzzleState;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_shortest_solution_length() {
        let solution = solve(PuzzleState::initial()).expect("the puzzle is solvable");
        assert_eq!(solution.moves.len(), 11);
    }

    #[test]
    fn test_solution_moves_replay_to_goal() {
        let solution = solve(PuzzleState::initial()).expect("the puzzle is solvable");

        let mut state = PuzzleState::initial();
        for mv in &solution.moves {
            assert!(state.is_legal(*mv), "solver emitted illegal move {mv}");
            state.apply_move(*mv);
        }
        assert!(state.is_solved());
    }

    #[test]
    fn test_exploration_counters() {
        // with sorted expansion the search is deterministic: 105 states are
        // dequeued before the goal comes up, out of 108 ever generated
        let solution = solve(PuzzleState::initial()).expect("the puzzle is solvable");
        assert_eq!(solution.expanded, 105);
        assert_eq!(solution.generated, 108);
    }

    /// A synthetic one-dimensional space: states count up toward a goal, or
    /// toward nothing, depending on `goal`.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct Counter {
        value: u32,
        limit: u32,
        goal: Option<u32>,
    }

    impl StateSpace for Counter {
        type Move = u32;

        fn legal_moves(&self) -> FxHashSet<u32> {
            let mut moves = FxHashSet::default();
            if self.value < self.limit {
                moves.insert(self.value + 1);
            }
            moves
        }

        fn apply(&self, mv: u32) -> Self {
            Counter { value: mv, ..*self }
        }

        fn is_goal(&self) -> bool {
            Some(self.value) == self.goal
        }
    }

    #[test]
    fn test_linear_chain_reconstructs_path_in_order() {
        let start = Counter {
            value: 0,
            limit: 10,
            goal: Some(4),
        };
        let solution = solve(start).expect("goal 4 is reachable");
        assert_eq!(solution.moves, vec![1, 2, 3, 4]);
        assert_eq!(solution.expanded, 5);
        assert_eq!(solution.generated, 5);
    }

    #[test]
    fn test_exhausted_space_returns_none() {
        let start = Counter {
            value: 0,
            limit: 10,
            goal: None,
        };
        assert!(solve(start).is_none());
    }

    #[test]
    fn test_goal_at_start_needs_no_moves() {
        let start = Counter {
            value: 0,
            limit: 10,
            goal: Some(0),
        };
        let solution = solve(start).expect("already solved");
        assert!(solution.moves.is_empty());
        assert_eq!(solution.expanded, 1);
        assert_eq!(solution.generated, 1);
    }
}
