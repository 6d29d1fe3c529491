//! Plugboard stage: letter-pair swaps applied on entry and exit.
//!
//! The plugboard sits between the keyboard/lampboard and the rotor pack and
//! swaps up to 10 disjoint letter pairs. A [`PlugLead`] is one validated
//! pair; a [`Plugboard`] holds the installed leads in insertion order and
//! rejects any lead that would reuse a letter.

use crate::error::EnigmaError;

/// Maximum number of leads a plugboard can hold.
const MAX_PAIRS: usize = 10;

/// A single plugboard lead connecting two distinct uppercase letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlugLead {
    pair: [char; 2],
}

impl PlugLead {
    /// Parses a lead from a two-letter pair string such as `"AZ"`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidPlugPair`] unless the input is exactly
    /// two distinct uppercase letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::PlugLead;
    ///
    /// let lead = PlugLead::new("AZ").unwrap();
    /// assert_eq!(lead.encode('A'), 'Z');
    /// assert_eq!(lead.encode('Z'), 'A');
    /// assert_eq!(lead.encode('M'), 'M');
    ///
    /// assert!(PlugLead::new("AA").is_err());
    /// assert!(PlugLead::new("a5").is_err());
    /// ```
    pub fn new(pair: &str) -> Result<Self, EnigmaError> {
        let mut letters = pair.chars();
        match (letters.next(), letters.next(), letters.next()) {
            (Some(first), Some(second), None)
                if first.is_ascii_uppercase() && second.is_ascii_uppercase() && first != second =>
            {
                Ok(PlugLead {
                    pair: [first, second],
                })
            }
            _ => Err(EnigmaError::InvalidPlugPair(pair.to_string())),
        }
    }

    /// Swaps `letter` with its partner when it belongs to this lead,
    /// otherwise returns it unchanged.
    pub fn encode(&self, letter: char) -> char {
        if letter == self.pair[0] {
            self.pair[1]
        } else if letter == self.pair[1] {
            self.pair[0]
        } else {
            letter
        }
    }

    /// True when `letter` is one of the two plugged letters.
    pub fn contains(&self, letter: char) -> bool {
        letter == self.pair[0] || letter == self.pair[1]
    }

    /// The lead as its two-letter pair string.
    pub fn pair_string(&self) -> String {
        self.pair.iter().collect()
    }
}

/// The plugboard: up to 10 disjoint letter-pair swaps.
///
/// Letters never repeat across leads, so [`encode`](Plugboard::encode) is an
/// involution: applying it twice returns the original letter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plugboard {
    leads: Vec<PlugLead>,
}

impl Plugboard {
    /// Creates an empty plugboard.
    pub fn new() -> Self {
        Plugboard { leads: Vec::new() }
    }

    /// Creates a plugboard from a list of pair strings.
    ///
    /// Equivalent to [`new`](Self::new) followed by
    /// [`add_many`](Self::add_many).
    ///
    /// # Errors
    /// Propagates the first parse, capacity or conflict error.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Plugboard;
    ///
    /// let board = Plugboard::from_pairs(&["AZ", "BY", "CX"]).unwrap();
    /// assert_eq!(board.encode('B'), 'Y');
    /// assert_eq!(board.encode('D'), 'D');
    /// ```
    pub fn from_pairs(pairs: &[&str]) -> Result<Self, EnigmaError> {
        let mut board = Plugboard::new();
        board.add_many(pairs)?;
        Ok(board)
    }

    /// Checks that `lead` can be installed: the board is not full and
    /// neither of its letters is already plugged.
    fn check_conflicts(&self, lead: &PlugLead) -> Result<(), EnigmaError> {
        if self.leads.len() >= MAX_PAIRS {
            return Err(EnigmaError::PlugboardFull);
        }
        for installed in &self.leads {
            if installed.contains(lead.pair[0]) || installed.contains(lead.pair[1]) {
                return Err(EnigmaError::ConflictingPlugPair(lead.pair_string()));
            }
        }
        Ok(())
    }

    /// Installs a single lead.
    ///
    /// # Errors
    /// Returns [`EnigmaError::PlugboardFull`] when 10 leads are already
    /// installed, or [`EnigmaError::ConflictingPlugPair`] when either letter
    /// is already in use.
    pub fn add(&mut self, lead: PlugLead) -> Result<(), EnigmaError> {
        self.check_conflicts(&lead)?;
        self.leads.push(lead);
        Ok(())
    }

    /// Parses and installs each pair string in sequence.
    ///
    /// Leads installed before a failure stay installed; there is no
    /// rollback.
    ///
    /// # Errors
    /// Propagates the first parse, capacity or conflict error.
    pub fn add_many(&mut self, pairs: &[&str]) -> Result<(), EnigmaError> {
        for pair in pairs {
            let lead = PlugLead::new(pair)?;
            self.add(lead)?;
        }
        Ok(())
    }

    /// Removes the first lead whose pair string matches `pair` exactly
    /// (same letter order); does nothing if no lead matches.
    pub fn remove(&mut self, pair: &str) {
        if let Some(index) = self
            .leads
            .iter()
            .position(|lead| lead.pair_string() == pair)
        {
            self.leads.remove(index);
        }
    }

    /// Encodes a letter through the board: the partner letter when `letter`
    /// is plugged, otherwise `letter` itself.
    pub fn encode(&self, letter: char) -> char {
        for lead in &self.leads {
            if lead.contains(letter) {
                return lead.encode(letter);
            }
        }
        letter
    }

    /// The installed pair strings in insertion order.
    pub fn show_pairs(&self) -> Vec<String> {
        self.leads.iter().map(PlugLead::pair_string).collect()
    }

    /// Number of installed leads.
    pub fn num_pairs(&self) -> usize {
        self.leads.len()
    }
}
