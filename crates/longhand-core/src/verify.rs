//! Grading of a populated grid against the expected decomposition.
//!
//! Each row is read least-significant cell first, reversed into natural
//! order, with empty and placeholder cells normalized to `'0'`. Both the
//! learner text and the expected canonical text are then stripped of
//! insignificant zeros before comparison:
//!
//! - working rows strip leading *and* trailing zeros, so `"092"` entered
//!   without the pad zero and `"230"` entered without the shift zero both
//!   match;
//! - the final row strips leading zeros only — trailing zeros of the
//!   product are significant.
//!
//! A string emptied by stripping compares as `"0"`. Grading is pure:
//! no side effects, and grading the same grid twice yields the same
//! outcome.

use tracing::debug;

use crate::decompose::Decomposition;
use crate::grid::{Cell, GridSchema, Row};
use crate::model::TrialOutcome;

/// Read a row into a natural-order digit string of exactly `width` chars.
///
/// Cells beyond the row's own width count as `'0'`, so a malformed row
/// still yields a comparable string instead of a panic.
fn row_text(row: &Row, width: usize) -> String {
    (0..width)
        .map(|col| match row.cell(col) {
            Some(Cell::Digit(d)) => (b'0' + d) as char,
            _ => '0',
        })
        .rev()
        .collect()
}

/// Strip insignificant zeros from a working-row text.
fn strip_working(text: &str) -> &str {
    let stripped = text.trim_start_matches('0').trim_end_matches('0');
    if stripped.is_empty() {
        "0"
    } else {
        stripped
    }
}

/// Strip leading zeros from a final-row text.
fn strip_final(text: &str) -> &str {
    let stripped = text.trim_start_matches('0');
    if stripped.is_empty() {
        "0"
    } else {
        stripped
    }
}

/// Grade working rows and the final row against the decomposition.
///
/// `rows` is indexed by shift; a row the rendering layer never created
/// (missing from the slice) is a failed row, not a panic, and grading
/// continues for the rest.
pub fn grade(decomposition: &Decomposition, rows: &[Row], final_row: &Row) -> TrialOutcome {
    let width = decomposition.width();

    let mut row_results = Vec::with_capacity(decomposition.len());
    for (shift, partial) in decomposition.partials().iter().enumerate() {
        let expected = partial.canonical_text(width);
        let correct = match rows.get(shift) {
            Some(row) => {
                let user = row_text(row, width);
                let matched = strip_working(&user) == strip_working(&expected);
                debug!(shift, %expected, %user, matched, "graded working row");
                matched
            }
            None => {
                debug!(shift, %expected, "working row missing from submission");
                false
            }
        };
        row_results.push(correct);
    }

    let rows_correct = row_results.iter().all(|&ok| ok);

    let expected_final = decomposition.expected_final();
    let user_final = row_text(final_row, width);
    let final_correct = strip_final(&user_final) == strip_final(&expected_final);
    debug!(%expected_final, %user_final, final_correct, "graded final row");

    TrialOutcome {
        rows_correct,
        final_correct,
        row_results,
    }
}

/// Grade a whole grid in place.
pub fn grade_grid(decomposition: &Decomposition, grid: &GridSchema) -> TrialOutcome {
    grade(decomposition, grid.rows(), grid.final_row())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose::decompose;
    use crate::model::Problem;

    fn setup(multiplicand: u64, multiplier: u64) -> (Decomposition, GridSchema) {
        let decomposition = decompose(&Problem::new(multiplicand, multiplier));
        let grid = GridSchema::for_decomposition(&decomposition);
        (decomposition, grid)
    }

    #[test]
    fn fully_correct_grid() {
        let (d, mut grid) = setup(23, 14);
        grid.row_mut(0).unwrap().enter("92").unwrap();
        grid.row_mut(1).unwrap().enter("23").unwrap();
        grid.final_row_mut().enter("322").unwrap();

        let outcome = grade_grid(&d, &grid);
        assert!(outcome.rows_correct);
        assert!(outcome.final_correct);
        assert!(outcome.is_correct());
        assert_eq!(outcome.row_results, vec![true, true]);
    }

    #[test]
    fn grading_is_idempotent() {
        let (d, mut grid) = setup(23, 14);
        grid.row_mut(0).unwrap().enter("92").unwrap();
        grid.row_mut(1).unwrap().enter("23").unwrap();
        grid.final_row_mut().enter("322").unwrap();

        let first = grade_grid(&d, &grid);
        let second = grade_grid(&d, &grid);
        assert_eq!(first, second);
    }

    #[test]
    fn pad_zero_may_be_omitted() {
        // Expected "092": entering only "92" leaves the leading cell
        // empty, which normalizes to the pad zero.
        let (d, mut grid) = setup(23, 14);
        grid.row_mut(0).unwrap().enter("92").unwrap();
        let outcome = grade_grid(&d, &grid);
        assert!(outcome.row_results[0]);
    }

    #[test]
    fn zero_partial_accepts_empty_row() {
        // 23 × 10: the shift-0 row is all zeros; leaving it untouched
        // must grade correct.
        let (d, mut grid) = setup(23, 10);
        grid.row_mut(1).unwrap().enter("23").unwrap();
        grid.final_row_mut().enter("230").unwrap();

        let outcome = grade_grid(&d, &grid);
        assert!(outcome.row_results[0], "empty row vs expected 000");
        assert!(outcome.is_correct());
    }

    #[test]
    fn empty_cell_where_digit_expected_fails_final() {
        let (d, mut grid) = setup(23, 14);
        grid.row_mut(0).unwrap().enter("92").unwrap();
        grid.row_mut(1).unwrap().enter("23").unwrap();
        // "32_" — ones cell left empty where '2' belongs.
        let f = grid.final_row_mut();
        f.set_digit(2, '3').unwrap();
        f.set_digit(1, '2').unwrap();

        let outcome = grade_grid(&d, &grid);
        assert!(outcome.rows_correct);
        assert!(!outcome.final_correct);
        assert!(!outcome.is_correct());
    }

    #[test]
    fn wrong_digit_fails_row() {
        let (d, mut grid) = setup(23, 14);
        grid.row_mut(0).unwrap().enter("93").unwrap();
        grid.row_mut(1).unwrap().enter("23").unwrap();
        grid.final_row_mut().enter("322").unwrap();

        let outcome = grade_grid(&d, &grid);
        assert_eq!(outcome.row_results, vec![false, true]);
        assert!(!outcome.rows_correct);
        assert!(outcome.final_correct);
    }

    #[test]
    fn missing_row_fails_without_panic() {
        let (d, grid) = setup(23, 14);
        let mut final_row = grid.final_row().clone();
        final_row.enter("322").unwrap();

        // Only the shift-0 row is submitted.
        let rows = vec![grid.rows()[0].clone()];
        let outcome = grade(&d, &rows, &final_row);
        assert!(!outcome.row_results[1]);
        assert!(outcome.final_correct);
    }

    #[test]
    fn trim_symmetry_on_working_rows() {
        assert_eq!(strip_working("0230"), strip_working("230"));
        assert_eq!(strip_working("092"), strip_working("92"));
        assert_eq!(strip_working("000"), "0");
        assert_eq!(strip_working(""), "0");
    }

    #[test]
    fn final_row_keeps_trailing_zeros() {
        // Product 230: "23_" (reads as 230 after normalization) matches,
        // but "023" does not — trailing zeros are significant here.
        let (d, mut grid) = setup(23, 10);
        grid.row_mut(1).unwrap().enter("23").unwrap();

        let f = grid.final_row_mut();
        f.set_digit(2, '2').unwrap();
        f.set_digit(1, '3').unwrap();
        // Ones cell empty → normalizes to 0 → "230".
        let outcome = grade_grid(&d, &grid);
        assert!(outcome.final_correct);

        let f = grid.final_row_mut();
        f.clear_all();
        f.enter("23").unwrap(); // right-aligned: reads as "023"
        let outcome = grade_grid(&d, &grid);
        assert!(!outcome.final_correct);
    }
}
