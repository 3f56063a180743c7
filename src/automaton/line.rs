//! Elementary (1D) automaton: periodic row, rule-table step, and timelines.

use super::rules::ElementaryRule;
use crate::error::{Error, Result};

/// A binary row of fixed, non-zero length. Both ends wrap.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Row {
    cells: Vec<u8>,
}

fn check_length(len: usize) -> Result<()> {
    if len == 0 {
        return Err(Error::config("row length must be positive"));
    }
    Ok(())
}

impl Row {
    /// All-dead row.
    pub fn new(len: usize) -> Result<Self> {
        check_length(len)?;
        Ok(Self { cells: vec![0; len] })
    }

    /// One live cell at `position`, all others dead.
    pub fn single_seed(len: usize, position: usize) -> Result<Self> {
        check_length(len)?;
        if position >= len {
            return Err(Error::config(format!(
                "seed position {position} is outside a row of length {len}"
            )));
        }
        let mut cells = vec![0; len];
        cells[position] = 1;
        Ok(Self { cells })
    }

    /// One live cell in the middle (`len / 2`).
    pub fn centered(len: usize) -> Result<Self> {
        Self::single_seed(len, len / 2)
    }

    /// Wrap an externally supplied buffer. Non-zero values are normalized to 1.
    pub fn from_cells(mut cells: Vec<u8>) -> Result<Self> {
        check_length(cells.len())?;
        for cell in cells.iter_mut() {
            *cell = (*cell != 0) as u8;
        }
        Ok(Self { cells })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Cell state, or 0 outside the row.
    pub fn get(&self, i: usize) -> u8 {
        self.cells.get(i).copied().unwrap_or(0)
    }

    /// Set a cell alive (non-zero) or dead. Out-of-bounds writes are ignored.
    pub fn set(&mut self, i: usize, alive: u8) {
        if let Some(cell) = self.cells.get_mut(i) {
            *cell = (alive != 0) as u8;
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    /// `(left, center, right)` at `i`, wrapping at both ends.
    #[inline]
    pub fn neighborhood(&self, i: usize) -> (u8, u8, u8) {
        let len = self.cells.len();
        (
            self.cells[(i + len - 1) % len],
            self.cells[i],
            self.cells[(i + 1) % len],
        )
    }
}

/// Step a row forward by one generation. Every output cell is looked up from
/// the unmodified input row.
pub fn step_row(row: &Row, rule: &ElementaryRule) -> Row {
    let cells = (0..row.len())
        .map(|i| {
            let (left, center, right) = row.neighborhood(i);
            debug_assert!(center <= 1, "cell {i} holds non-binary state {center}");
            rule.apply(left, center, right)
        })
        .collect();
    Row { cells }
}

/// Generation-ordered row snapshots: entry `t` is the row before step `t + 1`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timeline {
    rows: Vec<Row>,
}

impl Timeline {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row at generation `t`.
    pub fn get(&self, t: usize) -> Option<&Row> {
        self.rows.get(t)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Row length, or 0 for an empty timeline.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Row::len)
    }

    pub(crate) fn push(&mut self, row: Row) {
        debug_assert!(self.rows.is_empty() || row.len() == self.width());
        self.rows.push(row);
    }

    /// Write the space-time diagram row-major into `out_buf` (generation 0 on
    /// top). Returns the number of bytes written, or 0 if the buffer is too small.
    pub fn write_space_time(&self, out_buf: &mut [u8]) -> usize {
        let width = self.width();
        let total_size = width * self.rows.len();
        if total_size == 0 || out_buf.len() < total_size {
            return 0;
        }
        for (row, out) in self.rows.iter().zip(out_buf.chunks_mut(width)) {
            out.copy_from_slice(row.cells());
        }
        total_size
    }

    /// The space-time diagram as one row-major buffer.
    pub fn to_space_time(&self) -> Vec<u8> {
        self.rows
            .iter()
            .flat_map(|row| row.cells().iter().copied())
            .collect()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Record `steps` generations starting from `initial`, which becomes entry 0
/// unchanged. The row produced by the last step is not recorded.
pub fn run_line(initial: &Row, rule: &ElementaryRule, steps: usize) -> Timeline {
    let mut timeline = Timeline {
        rows: Vec::with_capacity(steps),
    };
    let mut row = initial.clone();
    for _ in 0..steps {
        let next = step_row(&row, rule);
        timeline.push(row);
        row = next;
    }
    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::rules::{RULE_110, RULE_30};

    fn row(bits: &str) -> Row {
        Row::from_cells(bits.bytes().map(|b| b - b'0').collect()).unwrap()
    }

    #[test]
    fn test_rule_30_single_seed() {
        let start = row("0001000");
        let next = step_row(&start, &RULE_30);

        for i in 0..start.len() {
            let (l, c, r) = start.neighborhood(i);
            assert_eq!(next.get(i), RULE_30.apply(l, c, r));
        }
        assert_eq!(next, row("0011100"));
        assert_eq!(step_row(&next, &RULE_30), row("0110010"));
    }

    #[test]
    fn test_rule_110_grows_left() {
        let next = step_row(&row("0001000"), &RULE_110);
        assert_eq!(next, row("0011000"));
    }

    #[test]
    fn test_step_wraps_at_edges() {
        // Seed at the right edge; Rule 30 spreads into index 0.
        let next = step_row(&row("0000001"), &RULE_30);
        assert_eq!(next, row("1000011"));
    }

    #[test]
    fn test_single_cell_row_is_own_neighbor() {
        // (1, 1, 1) -> 0 and (0, 0, 0) -> 0 under Rule 30
        assert_eq!(step_row(&row("1"), &RULE_30), row("0"));
        // Rule 255 maps everything to 1
        assert_eq!(step_row(&row("0"), &ElementaryRule::from_number(255)), row("1"));
    }

    #[test]
    fn test_row_constructors() {
        assert_eq!(Row::centered(7).unwrap(), row("0001000"));
        assert_eq!(Row::centered(4).unwrap(), row("0010"));
        assert_eq!(Row::single_seed(3, 0).unwrap(), row("100"));
        assert!(Row::single_seed(3, 3).is_err());
        assert!(Row::new(0).is_err());
        assert!(Row::from_cells(Vec::new()).is_err());
        assert_eq!(Row::from_cells(vec![0, 2, 1]).unwrap().cells(), &[0, 1, 1]);
    }

    #[test]
    fn test_run_line_ordering() {
        let start = row("0001000");
        let timeline = run_line(&start, &RULE_30, 4);

        assert_eq!(timeline.len(), 4);
        assert_eq!(timeline.get(0), Some(&start));
        assert_eq!(timeline.get(1), Some(&row("0011100")));
        assert_eq!(timeline.get(2), Some(&row("0110010")));
        for t in 1..timeline.len() {
            assert_eq!(
                timeline.get(t).unwrap(),
                &step_row(timeline.get(t - 1).unwrap(), &RULE_30)
            );
        }
        assert_eq!(timeline.get(4), None);
    }

    #[test]
    fn test_run_line_zero_steps() {
        let timeline = run_line(&row("010"), &RULE_110, 0);
        assert!(timeline.is_empty());
        assert_eq!(timeline.width(), 0);
        assert!(timeline.to_space_time().is_empty());
    }

    #[test]
    fn test_space_time_layout() {
        let timeline = run_line(&row("0001000"), &RULE_30, 3);
        let flat = timeline.to_space_time();

        assert_eq!(flat.len(), 21);
        assert_eq!(&flat[0..7], row("0001000").cells());
        assert_eq!(&flat[7..14], row("0011100").cells());

        let mut buf = vec![0u8; 21];
        assert_eq!(timeline.write_space_time(&mut buf), 21);
        assert_eq!(buf, flat);

        let mut short = vec![0u8; 20];
        assert_eq!(timeline.write_space_time(&mut short), 0);
    }
}
