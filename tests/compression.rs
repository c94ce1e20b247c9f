use gridlock::game::moves::{compress, Move};
use gridlock::game::vehicle::{Direction, VehicleId};
use gridlock::puzzles;
use gridlock::search::bfs::{solve, SolveOutcome};
use gridlock::solution::Replay;

#[test]
fn solver_output_is_already_fully_merged() {
    // A shortest path can never contain two consecutive slides of the same
    // vehicle in the same direction (one merged slide would be shorter), so
    // merging the solver's output must be a no-op.
    for name in puzzles::names() {
        let puzzle = puzzles::by_name(name)
            .unwrap()
            .unwrap_or_else(|| panic!("{name} is registered"));
        if let SolveOutcome::Solved(s) = solve(&puzzle).unwrap() {
            assert_eq!(compress(&s.moves), s.moves, "{name} output re-merged");
            for w in s.moves.windows(2) {
                assert!(
                    !(w[0].vehicle == w[1].vehicle && w[0].direction == w[1].direction),
                    "{name} kept a mergeable pair: {} then {}",
                    w[0],
                    w[1]
                );
            }
        }
    }
}

#[test]
fn splitting_into_single_steps_and_remerging_reproduces_the_moves() {
    for name in puzzles::names() {
        let puzzle = puzzles::by_name(name)
            .unwrap()
            .unwrap_or_else(|| panic!("{name} is registered"));
        if let SolveOutcome::Solved(s) = solve(&puzzle).unwrap() {
            let steps: Vec<Move> = s
                .moves
                .iter()
                .flat_map(|&m| (0..m.spaces).map(move |_| Move::new(m.vehicle, m.direction, 1)))
                .collect();
            assert_eq!(compress(&steps), s.moves, "{name} round trip");
        }
    }
}

#[test]
fn merging_a_split_move_reaches_the_same_board() {
    let puzzle = puzzles::sample_level();
    let split = vec![
        Move::new(VehicleId(0), Direction::Right, 1),
        Move::new(VehicleId(0), Direction::Right, 3),
    ];
    let merged = compress(&split);
    assert_eq!(merged, vec![Move::new(VehicleId(0), Direction::Right, 4)]);

    let mut a = Replay::new(&puzzle, &split).unwrap();
    let mut b = Replay::new(&puzzle, &merged).unwrap();
    while a.step_forward().is_some() {}
    while b.step_forward().is_some() {}
    assert_eq!(a.board().key(), b.board().key());
    assert!(a.is_solved());
    assert!(b.is_solved());
}
