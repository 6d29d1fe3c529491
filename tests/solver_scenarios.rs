//! Solver scenarios: known/unknown axes, budget control, error
//! propagation and sequential/parallel equivalence.
//!
//! The scenarios revolve around one fixed message encoded with a full
//! configuration; the expected ciphertext is a frozen snapshot.

use enigma::{Enigma, EnigmaError, Solution, Solver};

const MESSAGE: &str = "THESEAREEXAMPLESOFUSINGTHEENIGMASOLVEMETHOD";
const CIPHERTEXT: &str = "VGPORTONBJTCVFXAQSJBCPYFKDRCWIJYJVMMWOUDQZP";
const PLUGBOARD: [&str; 3] = ["AZ", "BY", "CX"];

/// The scenario solver with everything known except the reflector.
fn unknown_reflector_solver() -> Solver {
    Solver::new(CIPHERTEXT, "ENIGMA")
        .known_plugboard(&PLUGBOARD)
        .known_rotors(["I", "III", "IV"])
        .known_positions(['A', 'B', 'C'])
        .known_ring_settings([3, 2, 1])
}

fn assert_scenario_solution(solution: &Solution) {
    assert_eq!(solution.plaintext, MESSAGE);
    assert_eq!(solution.config.reflector.as_deref(), Some("B"));
    assert_eq!(
        solution.config.plugboard,
        Some(PLUGBOARD.iter().map(|pair| pair.to_string()).collect())
    );
    let rotors: Vec<(&str, char, usize)> = solution
        .config
        .rotors
        .iter()
        .map(|rotor| (rotor.name.as_str(), rotor.position, rotor.ring_setting))
        .collect();
    assert_eq!(rotors, vec![("I", 'A', 3), ("III", 'B', 2), ("IV", 'C', 1)]);
}

#[test]
fn scenario_ciphertext_is_reproducible() {
    let mut machine = Enigma::new();
    machine.add_plugboard(&PLUGBOARD).unwrap();
    machine
        .add_rotors(&["I", "III", "IV"], Some(&['A', 'B', 'C']), Some(&[3, 2, 1]))
        .unwrap();
    machine.add_reflector("B").unwrap();
    assert_eq!(machine.encode_message(MESSAGE).unwrap(), CIPHERTEXT);
}

// ═══════════════════════════════════════════════════════════════════════
// Known/unknown axes
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn recovers_unknown_reflector() {
    let solutions = unknown_reflector_solver().solve().unwrap();
    assert_eq!(solutions.len(), 1);
    assert_scenario_solution(&solutions[0]);
}

#[test]
fn exhaustive_search_finds_the_same_single_match() {
    let solutions = unknown_reflector_solver()
        .stop_at_first(false)
        .max_iterations(0)
        .solve()
        .unwrap();
    assert_eq!(solutions.len(), 1, "only reflector B decrypts to the crib");
    assert_scenario_solution(&solutions[0]);
}

#[test]
fn recovers_unknown_positions() {
    let solutions = Solver::new(CIPHERTEXT, "ENIGMA")
        .known_plugboard(&PLUGBOARD)
        .known_rotors(["I", "III", "IV"])
        .known_ring_settings([3, 2, 1])
        .known_reflector("B")
        .solve()
        .unwrap();
    assert_eq!(solutions.len(), 1);
    assert_scenario_solution(&solutions[0]);
}

#[test]
fn recovers_unknown_rotor_triple() {
    let solutions = Solver::new(CIPHERTEXT, "ENIGMA")
        .known_plugboard(&PLUGBOARD)
        .known_positions(['A', 'B', 'C'])
        .known_ring_settings([3, 2, 1])
        .known_reflector("B")
        .solve()
        .unwrap();
    assert_eq!(solutions.len(), 1);
    assert_scenario_solution(&solutions[0]);
}

#[test]
fn short_crib_matches_every_reflector() {
    // A one-letter crib is found in all three reflector decodes; with the
    // early stop disabled all of them come back, in axis order.
    let solutions = Solver::new(CIPHERTEXT, "E")
        .known_plugboard(&PLUGBOARD)
        .known_rotors(["I", "III", "IV"])
        .known_positions(['A', 'B', 'C'])
        .known_ring_settings([3, 2, 1])
        .stop_at_first(false)
        .solve()
        .unwrap();
    let reflectors: Vec<&str> = solutions
        .iter()
        .map(|solution| solution.config.reflector.as_deref().unwrap())
        .collect();
    assert_eq!(reflectors, vec!["A", "B", "C"]);
}

#[test]
fn stop_at_first_returns_the_earliest_match_only() {
    let solutions = Solver::new(CIPHERTEXT, "E")
        .known_plugboard(&PLUGBOARD)
        .known_rotors(["I", "III", "IV"])
        .known_positions(['A', 'B', 'C'])
        .known_ring_settings([3, 2, 1])
        .solve()
        .unwrap();
    assert_eq!(solutions.len(), 1);
    assert_eq!(solutions[0].config.reflector.as_deref(), Some("A"));
}

#[test]
fn no_match_returns_empty() {
    let solutions = Solver::new(CIPHERTEXT, "XQXQXQ")
        .known_plugboard(&PLUGBOARD)
        .known_rotors(["I", "III", "IV"])
        .known_positions(['A', 'B', 'C'])
        .known_ring_settings([3, 2, 1])
        .known_reflector("A")
        .solve()
        .unwrap();
    assert!(solutions.is_empty());
}

// ═══════════════════════════════════════════════════════════════════════
// Iteration budget
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn budget_reaching_the_match_succeeds() {
    // Reflector B is the second candidate, so two decodes suffice.
    let solutions = unknown_reflector_solver().max_iterations(2).solve().unwrap();
    assert_eq!(solutions.len(), 1);
    assert_scenario_solution(&solutions[0]);
}

#[test]
fn budget_short_of_the_match_times_out() {
    assert_eq!(
        unknown_reflector_solver().max_iterations(1).solve(),
        Err(EnigmaError::SolveTimeout(1))
    );
}

#[test]
fn budget_times_out_even_with_matches_recorded() {
    // Candidates A and B both match the one-letter crib, but the third
    // candidate is still pending when the budget runs out.
    let result = Solver::new(CIPHERTEXT, "E")
        .known_plugboard(&PLUGBOARD)
        .known_rotors(["I", "III", "IV"])
        .known_positions(['A', 'B', 'C'])
        .known_ring_settings([3, 2, 1])
        .stop_at_first(false)
        .max_iterations(2)
        .solve();
    assert_eq!(result, Err(EnigmaError::SolveTimeout(2)));
}

#[test]
fn budget_equal_to_space_exhausts_cleanly() {
    let solutions = unknown_reflector_solver()
        .stop_at_first(false)
        .max_iterations(3)
        .solve()
        .unwrap();
    assert_eq!(solutions.len(), 1);
}

#[test]
fn non_positive_budget_is_unlimited() {
    for budget in [0, -1] {
        let solutions = unknown_reflector_solver()
            .stop_at_first(false)
            .max_iterations(budget)
            .solve()
            .unwrap();
        assert_eq!(solutions.len(), 1, "budget {budget} must not limit the search");
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Error propagation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn candidate_construction_errors_abort_the_search() {
    assert_eq!(
        unknown_reflector_solver()
            .known_plugboard(&["A5"])
            .solve(),
        Err(EnigmaError::InvalidPlugPair("A5".to_string()))
    );
    assert_eq!(
        unknown_reflector_solver()
            .known_rotors(["I", "II", "XII"])
            .solve(),
        Err(EnigmaError::UnknownRotor("XII".to_string()))
    );
    assert_eq!(
        unknown_reflector_solver().known_reflector("Q").solve(),
        Err(EnigmaError::UnknownReflector("Q".to_string()))
    );
}

#[test]
fn invalid_ciphertext_aborts_the_search() {
    let result = Solver::new("not uppercase", "CRIB")
        .known_rotors(["I", "II", "III"])
        .known_positions(['A', 'A', 'A'])
        .known_ring_settings([1, 1, 1])
        .solve();
    assert!(matches!(result, Err(EnigmaError::InvalidMessageChar(_))));
}

// ═══════════════════════════════════════════════════════════════════════
// Parallel equivalence
// ═══════════════════════════════════════════════════════════════════════

/// Runs a solver both ways and requires identical outcomes.
fn assert_parallel_matches_sequential(solver: Solver) {
    let sequential = solver.solve();
    let parallel = solver.solve_parallel();
    assert_eq!(parallel, sequential);
}

#[test]
fn parallel_equals_sequential_on_success() {
    assert_parallel_matches_sequential(unknown_reflector_solver());
    assert_parallel_matches_sequential(unknown_reflector_solver().stop_at_first(false));
}

#[test]
fn parallel_equals_sequential_on_timeout() {
    assert_parallel_matches_sequential(unknown_reflector_solver().max_iterations(1));
    assert_parallel_matches_sequential(
        Solver::new(CIPHERTEXT, "E")
            .known_plugboard(&PLUGBOARD)
            .known_rotors(["I", "III", "IV"])
            .known_positions(['A', 'B', 'C'])
            .known_ring_settings([3, 2, 1])
            .stop_at_first(false)
            .max_iterations(2),
    );
}

#[test]
fn parallel_equals_sequential_across_rotor_triples() {
    // Unknown rotor axis: 210 triples, each a separate parallel task.
    let solver = Solver::new(CIPHERTEXT, "ENIGMA")
        .known_plugboard(&PLUGBOARD)
        .known_positions(['A', 'B', 'C'])
        .known_ring_settings([3, 2, 1])
        .known_reflector("B");
    assert_parallel_matches_sequential(solver.clone());
    assert_parallel_matches_sequential(solver.stop_at_first(false));
}

#[test]
fn parallel_recovers_unknown_positions() {
    let solutions = Solver::new(CIPHERTEXT, "ENIGMA")
        .known_plugboard(&PLUGBOARD)
        .known_rotors(["I", "III", "IV"])
        .known_ring_settings([3, 2, 1])
        .known_reflector("B")
        .solve_parallel()
        .unwrap();
    assert_eq!(solutions.len(), 1);
    assert_scenario_solution(&solutions[0]);
}
