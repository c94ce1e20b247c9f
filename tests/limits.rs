use gridlock::puzzle::{ResourceLimits, SolveError};
use gridlock::puzzles;
use gridlock::search::bfs::solve_with_limits;

#[test]
fn a_tiny_state_budget_stops_the_search() {
    let limits = ResourceLimits {
        max_states: 1,
        ..ResourceLimits::default()
    };
    match solve_with_limits(&puzzles::blocked_exit(), limits) {
        Err(SolveError::LimitExceeded {
            metric,
            limit,
            observed,
            ..
        }) => {
            assert_eq!(metric, "states");
            assert_eq!(limit, 1);
            assert_eq!(observed, 2);
        }
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[test]
fn a_tiny_edge_budget_stops_the_search() {
    let limits = ResourceLimits {
        max_edges: 1,
        ..ResourceLimits::default()
    };
    match solve_with_limits(&puzzles::blocked_exit(), limits) {
        Err(SolveError::LimitExceeded { metric, counts, .. }) => {
            assert_eq!(metric, "edges");
            // Only the start board was admitted before the budget blew.
            assert_eq!(counts.states, 1);
        }
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[test]
fn a_zero_step_budget_stops_the_search_immediately() {
    let limits = ResourceLimits {
        max_runtime_steps: 0,
        ..ResourceLimits::default()
    };
    match solve_with_limits(&puzzles::blocked_exit(), limits) {
        Err(SolveError::LimitExceeded { stage, metric, .. }) => {
            assert_eq!(stage, "bfs_loop");
            assert_eq!(metric, "runtime_steps");
        }
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[test]
fn demo_limits_cover_every_built_in() {
    for name in puzzles::names() {
        let puzzle = puzzles::by_name(name)
            .unwrap()
            .unwrap_or_else(|| panic!("{name} is registered"));
        solve_with_limits(&puzzle, puzzles::demo_limits())
            .unwrap_or_else(|e| panic!("{name} blew the demo budget: {e}"));
    }
}
