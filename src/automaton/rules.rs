//! Transition rules for both engines.
//!
//! `LifeRule` is a closed set of outer-totalistic birth/survival rules for the
//! 2D grid. `ElementaryRule` is the 8-entry lookup table of a 1D elementary
//! automaton, keyed by the `(left, center, right)` neighborhood.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Birth/survival rule applied to every cell of a grid at once.
///
/// | Rule | Survive | Born |
/// |---|---|---|
/// | `GameOfLife` | 2, 3 | 3 |
/// | `HighLife` | 2, 3 | 3, 6 |
/// | `Seeds` | never | 2 |
/// | `Chaotic` | 3, 4, 5 | 3, 4 |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LifeRule {
    /// B3/S23
    #[default]
    GameOfLife,
    /// B36/S23
    HighLife,
    /// B2/S
    Seeds,
    /// B34/S345
    Chaotic,
}

impl LifeRule {
    pub const ALL: [LifeRule; 4] = [
        LifeRule::GameOfLife,
        LifeRule::HighLife,
        LifeRule::Seeds,
        LifeRule::Chaotic,
    ];

    /// Next state of one cell given its current state and live neighbor count.
    #[inline]
    pub fn next_state(self, state: u8, neighbors: u8) -> u8 {
        let alive = state == 1;
        let next = match self {
            LifeRule::GameOfLife => {
                if alive {
                    neighbors == 2 || neighbors == 3
                } else {
                    neighbors == 3
                }
            }
            LifeRule::HighLife => {
                if alive {
                    neighbors == 2 || neighbors == 3
                } else {
                    neighbors == 3 || neighbors == 6
                }
            }
            LifeRule::Seeds => !alive && neighbors == 2,
            LifeRule::Chaotic => {
                if alive {
                    (3..=5).contains(&neighbors)
                } else {
                    neighbors == 3 || neighbors == 4
                }
            }
        };
        next as u8
    }

    /// Stable numeric id used across the C ABI.
    pub fn id(self) -> u8 {
        match self {
            LifeRule::GameOfLife => 0,
            LifeRule::HighLife => 1,
            LifeRule::Seeds => 2,
            LifeRule::Chaotic => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LifeRule::GameOfLife => "life",
            LifeRule::HighLife => "highlife",
            LifeRule::Seeds => "seeds",
            LifeRule::Chaotic => "chaotic",
        }
    }

    /// Rulestring in B/S notation.
    pub fn rulestring(self) -> &'static str {
        match self {
            LifeRule::GameOfLife => "B3/S23",
            LifeRule::HighLife => "B36/S23",
            LifeRule::Seeds => "B2/S",
            LifeRule::Chaotic => "B34/S345",
        }
    }
}

impl fmt::Display for LifeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LifeRule {
    type Err = Error;

    /// Accepts the rule name or its rulestring, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "life" | "gameoflife" | "game-of-life" | "conway" | "b3/s23" => Ok(LifeRule::GameOfLife),
            "highlife" | "b36/s23" => Ok(LifeRule::HighLife),
            "seeds" | "b2/s" | "b2/s0" => Ok(LifeRule::Seeds),
            "chaotic" | "b34/s345" => Ok(LifeRule::Chaotic),
            _ => Err(Error::config(format!("unknown rule {s:?}"))),
        }
    }
}

impl TryFrom<u8> for LifeRule {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self> {
        LifeRule::ALL
            .into_iter()
            .find(|rule| rule.id() == id)
            .ok_or_else(|| Error::config(format!("unknown rule id {id}")))
    }
}

/// Index of a neighborhood in an elementary rule table: `left << 2 | center << 1 | right`.
#[inline]
pub fn neighborhood_index(left: u8, center: u8, right: u8) -> usize {
    ((left << 2) | (center << 1) | right) as usize
}

/// An elementary (1D, radius 1) rule as an 8-entry lookup table.
///
/// Entry `k` holds the next state for the neighborhood whose bits spell `k`,
/// so the table read as a binary number (entry 7 first) is the Wolfram rule
/// number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementaryRule {
    table: [u8; 8],
}

/// Rule 30: chaotic, aperiodic center column.
pub const RULE_30: ElementaryRule = ElementaryRule::from_number(30);

/// Rule 110: localized gliders on a periodic background.
pub const RULE_110: ElementaryRule = ElementaryRule::from_number(110);

impl ElementaryRule {
    pub const fn from_number(number: u8) -> Self {
        let mut table = [0u8; 8];
        let mut k = 0;
        while k < 8 {
            table[k] = (number >> k) & 1;
            k += 1;
        }
        Self { table }
    }

    /// Build a rule from explicit `(left, center, right) -> next` entries.
    ///
    /// Every one of the 8 neighborhoods must be present, all values must be
    /// 0 or 1, and a neighborhood listed twice must agree with itself.
    pub fn from_table<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = ([u8; 3], u8)>,
    {
        let mut table = [0u8; 8];
        let mut seen = [false; 8];

        for ([left, center, right], next) in entries {
            if left > 1 || center > 1 || right > 1 {
                return Err(Error::config(format!(
                    "neighborhood ({left}, {center}, {right}) is not binary"
                )));
            }
            if next > 1 {
                return Err(Error::config(format!(
                    "neighborhood ({left}, {center}, {right}) maps to non-binary state {next}"
                )));
            }

            let idx = neighborhood_index(left, center, right);
            if seen[idx] && table[idx] != next {
                return Err(Error::config(format!(
                    "neighborhood ({left}, {center}, {right}) is mapped twice"
                )));
            }
            seen[idx] = true;
            table[idx] = next;
        }

        let missing: Vec<String> = (0..8)
            .filter(|&idx| !seen[idx])
            .map(|idx| format!("({}, {}, {})", (idx >> 2) & 1, (idx >> 1) & 1, idx & 1))
            .collect();
        if !missing.is_empty() {
            return Err(Error::config(format!(
                "rule table is missing neighborhoods {}",
                missing.join(", ")
            )));
        }

        Ok(Self { table })
    }

    /// Wolfram rule number of this table.
    pub fn number(&self) -> u8 {
        self.table
            .iter()
            .enumerate()
            .fold(0u8, |acc, (k, &bit)| acc | (bit << k))
    }

    #[inline]
    pub fn apply(&self, left: u8, center: u8, right: u8) -> u8 {
        self.table[neighborhood_index(left, center, right)]
    }

    pub fn table(&self) -> &[u8; 8] {
        &self.table
    }
}

impl Default for ElementaryRule {
    fn default() -> Self {
        RULE_30
    }
}

impl From<u8> for ElementaryRule {
    fn from(number: u8) -> Self {
        Self::from_number(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn born_and_survive(rule: LifeRule) -> (Vec<u8>, Vec<u8>) {
        let born = (0..=8).filter(|&n| rule.next_state(0, n) == 1).collect();
        let survive = (0..=8).filter(|&n| rule.next_state(1, n) == 1).collect();
        (born, survive)
    }

    #[test]
    fn test_life_rule_thresholds() {
        assert_eq!(born_and_survive(LifeRule::GameOfLife), (vec![3], vec![2, 3]));
        assert_eq!(born_and_survive(LifeRule::HighLife), (vec![3, 6], vec![2, 3]));
        assert_eq!(born_and_survive(LifeRule::Seeds), (vec![2], vec![]));
        assert_eq!(born_and_survive(LifeRule::Chaotic), (vec![3, 4], vec![3, 4, 5]));
    }

    #[test]
    fn test_life_rule_parse() {
        assert_eq!("life".parse::<LifeRule>().unwrap(), LifeRule::GameOfLife);
        assert_eq!("B36/S23".parse::<LifeRule>().unwrap(), LifeRule::HighLife);
        assert_eq!(" Seeds ".parse::<LifeRule>().unwrap(), LifeRule::Seeds);
        assert_eq!("chaotic".parse::<LifeRule>().unwrap(), LifeRule::Chaotic);
        assert!(matches!(
            "daynight".parse::<LifeRule>(),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_life_rule_ids_round_trip() {
        for rule in LifeRule::ALL {
            assert_eq!(LifeRule::try_from(rule.id()).unwrap(), rule);
            assert_eq!(rule.rulestring().parse::<LifeRule>().unwrap(), rule);
        }
        assert!(LifeRule::try_from(4).is_err());
    }

    #[test]
    fn test_rule_30_table() {
        // Literal Rule 30 mapping
        let expected = [
            ([1, 1, 1], 0),
            ([1, 1, 0], 0),
            ([1, 0, 1], 0),
            ([1, 0, 0], 1),
            ([0, 1, 1], 1),
            ([0, 1, 0], 1),
            ([0, 0, 1], 1),
            ([0, 0, 0], 0),
        ];
        for ([l, c, r], next) in expected {
            assert_eq!(RULE_30.apply(l, c, r), next, "({l}, {c}, {r})");
        }
        assert_eq!(ElementaryRule::from_table(expected).unwrap(), RULE_30);
        assert_eq!(RULE_30.number(), 30);
    }

    #[test]
    fn test_rule_110_table() {
        let expected = [
            ([1, 1, 1], 0),
            ([1, 1, 0], 1),
            ([1, 0, 1], 1),
            ([1, 0, 0], 0),
            ([0, 1, 1], 1),
            ([0, 1, 0], 1),
            ([0, 0, 1], 1),
            ([0, 0, 0], 0),
        ];
        assert_eq!(ElementaryRule::from_table(expected).unwrap(), RULE_110);
        assert_eq!(RULE_110.number(), 110);
    }

    #[test]
    fn test_from_number_covers_all_rules() {
        for number in 0..=255u8 {
            assert_eq!(ElementaryRule::from_number(number).number(), number);
        }
    }

    #[test]
    fn test_from_table_missing_entry() {
        let partial = [
            ([1, 1, 1], 0),
            ([1, 1, 0], 0),
            ([1, 0, 1], 0),
            ([1, 0, 0], 1),
            ([0, 1, 1], 1),
            ([0, 1, 0], 1),
            ([0, 0, 1], 1),
        ];
        let err = ElementaryRule::from_table(partial).unwrap_err();
        assert!(matches!(err, Error::Configuration(ref msg) if msg.contains("(0, 0, 0)")));
    }

    #[test]
    fn test_from_table_rejects_bad_values() {
        let mut entries: Vec<([u8; 3], u8)> = (0..8u8)
            .map(|k| ([(k >> 2) & 1, (k >> 1) & 1, k & 1], 0))
            .collect();
        entries[3].1 = 2;
        assert!(ElementaryRule::from_table(entries.clone()).is_err());

        entries[3].1 = 0;
        entries.push(([0, 2, 0], 1));
        assert!(ElementaryRule::from_table(entries.clone()).is_err());

        entries.pop();
        entries.push(([0, 0, 0], 1));
        assert!(ElementaryRule::from_table(entries).is_err());
    }
}
