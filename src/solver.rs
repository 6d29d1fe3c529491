//! Crib solver: brute-force recovery of unknown machine settings.
//!
//! The solver searches four independent axes — rotor triple, position
//! triple, ring-setting triple and reflector. An axis with a known value
//! contributes exactly that value; an unknown axis ranges over its full
//! domain. Candidates are the Cartesian product, rotor triples outermost
//! and reflectors innermost, with the first element of each unknown triple
//! varying slowest. Each candidate gets a fresh machine, decodes the
//! ciphertext and is kept when the crib appears in the output.
//!
//! The plugboard is never searched: a known plugboard is installed on
//! every candidate, an unknown one on none.

use std::sync::atomic::{AtomicU64, Ordering};

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::error::EnigmaError;
use crate::machine::{Enigma, MachineConfig};

/// Rotor-name domain searched when the rotor triple is unknown.
const ALL_ROTORS: [&str; 7] = ["I", "II", "III", "IV", "V", "Beta", "Gamma"];

/// Reflector-name domain searched when the reflector is unknown.
const ALL_REFLECTORS: [&str; 3] = ["A", "B", "C"];

/// Default candidate budget for a search.
const DEFAULT_MAX_ITERATIONS: i64 = 100_000;

/// One successful decryption: the plaintext and the starting configuration
/// that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    /// The decoded message containing the crib.
    pub plaintext: String,
    /// The candidate machine's starting configuration.
    pub config: MachineConfig,
}

/// Builder for a crib search over a 3-rotor machine.
///
/// Every `known_*` setter pins one search axis to a single value; axes left
/// unset are searched exhaustively. [`solve`](Self::solve) runs the search
/// sequentially, [`solve_parallel`](Self::solve_parallel) fans it out over
/// a thread pool with identical results.
///
/// # Examples
///
/// ```
/// use enigma::{Enigma, Solver};
///
/// let mut machine = Enigma::new();
/// machine.add_rotors(&["I", "II", "III"], None, None).unwrap();
/// machine.add_reflector("B").unwrap();
/// let ciphertext = machine.encode_message("MEETMEATMIDNIGHT").unwrap();
///
/// let solutions = Solver::new(&ciphertext, "MIDNIGHT")
///     .known_rotors(["I", "II", "III"])
///     .known_positions(['A', 'A', 'A'])
///     .known_ring_settings([1, 1, 1])
///     .solve()
///     .unwrap();
/// assert_eq!(solutions[0].plaintext, "MEETMEATMIDNIGHT");
/// assert_eq!(solutions[0].config.reflector.as_deref(), Some("B"));
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    ciphertext: String,
    crib: String,
    plugboard: Option<Vec<String>>,
    rotors: Option<[String; 3]>,
    positions: Option<[char; 3]>,
    ring_settings: Option<[usize; 3]>,
    reflector: Option<String>,
    stop_at_first: bool,
    max_iterations: i64,
}

impl Solver {
    /// Creates a search for `crib` in decryptions of `ciphertext`, with all
    /// four axes unknown, stopping at the first match, with the default
    /// budget of 100000 candidates.
    pub fn new(ciphertext: &str, crib: &str) -> Self {
        Solver {
            ciphertext: ciphertext.to_string(),
            crib: crib.to_string(),
            plugboard: None,
            rotors: None,
            positions: None,
            ring_settings: None,
            reflector: None,
            stop_at_first: true,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Installs this plugboard on every candidate machine.
    pub fn known_plugboard(mut self, pairs: &[&str]) -> Self {
        self.plugboard = Some(pairs.iter().map(|pair| pair.to_string()).collect());
        self
    }

    /// Pins the rotor triple, leftmost rotor first.
    ///
    /// A pinned triple is taken as given and not distinctness-checked.
    pub fn known_rotors(mut self, names: [&str; 3]) -> Self {
        self.rotors = Some(names.map(|name| name.to_string()));
        self
    }

    /// Pins the starting positions, leftmost rotor first.
    pub fn known_positions(mut self, positions: [char; 3]) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Pins the ring settings, leftmost rotor first.
    pub fn known_ring_settings(mut self, ring_settings: [usize; 3]) -> Self {
        self.ring_settings = Some(ring_settings);
        self
    }

    /// Pins the reflector.
    pub fn known_reflector(mut self, name: &str) -> Self {
        self.reflector = Some(name.to_string());
        self
    }

    /// Whether to return as soon as one candidate matches (the default) or
    /// keep searching for every match.
    pub fn stop_at_first(mut self, stop: bool) -> Self {
        self.stop_at_first = stop;
        self
    }

    /// Sets the candidate budget. A non-positive value searches without
    /// limit.
    pub fn max_iterations(mut self, budget: i64) -> Self {
        self.max_iterations = budget;
        self
    }

    /// Runs the search sequentially, candidates in generation order.
    ///
    /// Returns the first match alone when stopping early, otherwise every
    /// match found before exhaustion.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SolveTimeout`] when the budget is positive
    /// and runs out with candidates left to try — even if matches were
    /// already recorded. A validation error raised while building a
    /// candidate machine (bad plugboard, unknown pinned name, invalid
    /// ciphertext) aborts the whole search.
    pub fn solve(&self) -> Result<Vec<Solution>, EnigmaError> {
        let rotor_axis = self.rotor_axis();
        let position_axis = self.position_axis();
        let ring_axis = self.ring_axis();
        let reflector_axis = self.reflector_axis();
        self.log_search_space(&rotor_axis, &position_axis, &ring_axis, &reflector_axis);

        let mut solutions = Vec::new();
        let mut iterations: i64 = 0;
        for rotors in &rotor_axis {
            for positions in &position_axis {
                for rings in &ring_axis {
                    for reflector in &reflector_axis {
                        if self.max_iterations > 0 && iterations >= self.max_iterations {
                            return Err(EnigmaError::SolveTimeout(self.max_iterations));
                        }
                        let (decoded, config) =
                            self.decode_candidate(rotors, *positions, *rings, reflector)?;
                        iterations += 1;
                        if decoded.contains(&self.crib) {
                            debug!(iterations, reflector = %reflector, "crib found in candidate decode");
                            solutions.push(Solution {
                                plaintext: decoded,
                                config,
                            });
                            if self.stop_at_first {
                                return Ok(solutions);
                            }
                        }
                    }
                }
            }
        }
        debug!(matches = solutions.len(), iterations, "search space exhausted");
        Ok(solutions)
    }

    /// Runs the search across a thread pool, one rotor triple per task.
    ///
    /// The budget bounds candidate ordinals and a shared first-match
    /// ordinal prunes work that cannot precede an already-found match, so
    /// the outcome — matches, order, success or timeout — is exactly that
    /// of [`solve`](Self::solve).
    ///
    /// # Errors
    /// Same conditions as [`solve`](Self::solve).
    pub fn solve_parallel(&self) -> Result<Vec<Solution>, EnigmaError> {
        let rotor_axis = self.rotor_axis();
        let position_axis = self.position_axis();
        let ring_axis = self.ring_axis();
        let reflector_axis = self.reflector_axis();
        self.log_search_space(&rotor_axis, &position_axis, &ring_axis, &reflector_axis);

        let per_triple =
            (position_axis.len() * ring_axis.len() * reflector_axis.len()) as u64;
        let space = rotor_axis.len() as u64 * per_triple;
        let limit = if self.max_iterations > 0 {
            self.max_iterations as u64
        } else {
            u64::MAX
        };
        // Ordinal of the earliest match found so far, shared for pruning.
        let first_match = AtomicU64::new(u64::MAX);

        let per_triple_matches = rotor_axis
            .par_iter()
            .enumerate()
            .map(|(triple_index, rotors)| {
                self.scan_triple(
                    triple_index as u64 * per_triple,
                    rotors,
                    &position_axis,
                    &ring_axis,
                    &reflector_axis,
                    limit,
                    &first_match,
                )
            })
            .collect::<Result<Vec<Vec<(u64, Solution)>>, EnigmaError>>()?;

        let mut matches: Vec<(u64, Solution)> =
            per_triple_matches.into_iter().flatten().collect();
        matches.sort_by_key(|(ordinal, _)| *ordinal);

        if self.stop_at_first && !matches.is_empty() {
            let (_, solution) = matches.swap_remove(0);
            return Ok(vec![solution]);
        }
        if self.max_iterations > 0 && space > limit {
            return Err(EnigmaError::SolveTimeout(self.max_iterations));
        }
        debug!(matches = matches.len(), "parallel search space exhausted");
        Ok(matches.into_iter().map(|(_, solution)| solution).collect())
    }

    /// Scans the candidates of one rotor triple, ordinals `start` upward.
    ///
    /// Only ordinals below `limit` are decoded; with early stopping the
    /// scan also abandons ordinals past the best match found by any task.
    #[allow(clippy::too_many_arguments)]
    fn scan_triple(
        &self,
        start: u64,
        rotors: &[String; 3],
        position_axis: &[[char; 3]],
        ring_axis: &[[usize; 3]],
        reflector_axis: &[String],
        limit: u64,
        first_match: &AtomicU64,
    ) -> Result<Vec<(u64, Solution)>, EnigmaError> {
        let mut found = Vec::new();
        let mut ordinal = start;
        'scan: for positions in position_axis {
            for rings in ring_axis {
                for reflector in reflector_axis {
                    if ordinal >= limit {
                        break 'scan;
                    }
                    if self.stop_at_first && ordinal > first_match.load(Ordering::Relaxed) {
                        break 'scan;
                    }
                    let (decoded, config) =
                        self.decode_candidate(rotors, *positions, *rings, reflector)?;
                    if decoded.contains(&self.crib) {
                        debug!(ordinal, reflector = %reflector, "crib found in candidate decode");
                        found.push((
                            ordinal,
                            Solution {
                                plaintext: decoded,
                                config,
                            },
                        ));
                        if self.stop_at_first {
                            first_match.fetch_min(ordinal, Ordering::Relaxed);
                            break 'scan;
                        }
                    }
                    ordinal += 1;
                }
            }
        }
        Ok(found)
    }

    /// Builds a fresh machine for one candidate and decodes the ciphertext.
    fn decode_candidate(
        &self,
        rotors: &[String; 3],
        positions: [char; 3],
        rings: [usize; 3],
        reflector: &str,
    ) -> Result<(String, MachineConfig), EnigmaError> {
        let mut machine = Enigma::new();
        if let Some(pairs) = &self.plugboard {
            let pairs: Vec<&str> = pairs.iter().map(String::as_str).collect();
            machine.add_plugboard(&pairs)?;
        }
        let names: Vec<&str> = rotors.iter().map(String::as_str).collect();
        machine.add_rotors(&names, Some(&positions), Some(&rings))?;
        machine.add_reflector(reflector)?;
        let decoded = machine.encode_message(&self.ciphertext)?;
        let config = machine.show_config(true);
        Ok((decoded, config))
    }

    /// The rotor axis: the pinned triple, or all 210 ordered distinct
    /// triples of the seven rotor names.
    fn rotor_axis(&self) -> Vec<[String; 3]> {
        if let Some(bound) = &self.rotors {
            return vec![bound.clone()];
        }
        let mut axis = Vec::new();
        for left in ALL_ROTORS {
            for middle in ALL_ROTORS {
                for right in ALL_ROTORS {
                    if left != middle && left != right && middle != right {
                        axis.push([left.to_string(), middle.to_string(), right.to_string()]);
                    }
                }
            }
        }
        axis
    }

    /// The position axis: the pinned triple, or all 26^3 letter triples.
    fn position_axis(&self) -> Vec<[char; 3]> {
        if let Some(bound) = self.positions {
            return vec![bound];
        }
        let mut axis = Vec::with_capacity(26 * 26 * 26);
        for left in 'A'..='Z' {
            for middle in 'A'..='Z' {
                for right in 'A'..='Z' {
                    axis.push([left, middle, right]);
                }
            }
        }
        axis
    }

    /// The ring-setting axis: the pinned triple, or all 26^3 triples of
    /// 1..=26.
    fn ring_axis(&self) -> Vec<[usize; 3]> {
        if let Some(bound) = self.ring_settings {
            return vec![bound];
        }
        let mut axis = Vec::with_capacity(26 * 26 * 26);
        for left in 1..=26 {
            for middle in 1..=26 {
                for right in 1..=26 {
                    axis.push([left, middle, right]);
                }
            }
        }
        axis
    }

    /// The reflector axis: the pinned name, or A, B and C.
    fn reflector_axis(&self) -> Vec<String> {
        match &self.reflector {
            Some(bound) => vec![bound.clone()],
            None => ALL_REFLECTORS.iter().map(|name| name.to_string()).collect(),
        }
    }

    fn log_search_space(
        &self,
        rotor_axis: &[[String; 3]],
        position_axis: &[[char; 3]],
        ring_axis: &[[usize; 3]],
        reflector_axis: &[String],
    ) {
        debug!(
            rotor_triples = rotor_axis.len(),
            position_triples = position_axis.len(),
            ring_triples = ring_axis.len(),
            reflectors = reflector_axis.len(),
            candidates = rotor_axis.len() as u64
                * position_axis.len() as u64
                * ring_axis.len() as u64
                * reflector_axis.len() as u64,
            budget = self.max_iterations,
            "starting crib search"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotor_axis_is_all_ordered_distinct_triples() {
        let solver = Solver::new("", "");
        let axis = solver.rotor_axis();
        assert_eq!(axis.len(), 7 * 6 * 5);
        assert_eq!(axis[0], ["I", "II", "III"].map(String::from));
        for triple in &axis {
            assert!(triple[0] != triple[1] && triple[0] != triple[2] && triple[1] != triple[2]);
        }
    }

    #[test]
    fn test_bound_axes_yield_one_value() {
        let solver = Solver::new("", "")
            .known_rotors(["IV", "IV", "IV"])
            .known_positions(['Q', 'Q', 'Q'])
            .known_ring_settings([5, 5, 5])
            .known_reflector("C");
        assert_eq!(solver.rotor_axis(), vec![["IV", "IV", "IV"].map(String::from)]);
        assert_eq!(solver.position_axis(), vec![['Q', 'Q', 'Q']]);
        assert_eq!(solver.ring_axis(), vec![[5, 5, 5]]);
        assert_eq!(solver.reflector_axis(), vec!["C".to_string()]);
    }

    #[test]
    fn test_unknown_axes_cover_full_domains_in_order() {
        let solver = Solver::new("", "");
        let positions = solver.position_axis();
        assert_eq!(positions.len(), 26 * 26 * 26);
        assert_eq!(positions[0], ['A', 'A', 'A']);
        assert_eq!(positions[1], ['A', 'A', 'B']);
        assert_eq!(positions[26], ['A', 'B', 'A']);
        let rings = solver.ring_axis();
        assert_eq!(rings.len(), 26 * 26 * 26);
        assert_eq!(rings[0], [1, 1, 1]);
        assert_eq!(rings[27], [1, 2, 2]);
        assert_eq!(solver.reflector_axis(), vec!["A", "B", "C"]);
    }
}
