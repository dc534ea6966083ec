//! Plain-text rendering of a problem and its column layout.
//!
//! The column shape matches the pencil-and-paper convention: factors
//! right-aligned over the working rows, one row per multiplier digit
//! with shift placeholders shown as dots, then the final product.

use longhand_core::decompose::Decomposition;
use longhand_core::grid::Row;
use longhand_core::model::Problem;

/// The factor header, right-aligned to the product width.
pub fn problem_header(problem: &Problem, decomposition: &Decomposition) -> String {
    let width = decomposition.width();
    let mut out = String::new();
    out.push_str(&format!("  {:>width$}\n", problem.multiplicand));
    out.push_str(&format!("× {:>width$}\n", problem.multiplier));
    out.push_str(&format!("  {}\n", "-".repeat(width)));
    out
}

/// One working row of the answer key, shift placeholders as dots.
pub fn solved_row(decomposition: &Decomposition, shift: usize) -> Option<String> {
    let text = decomposition.expected_row(shift)?;
    let keep = text.len() - shift;
    Some(format!("{}{}", &text[..keep], ".".repeat(shift)))
}

/// The fully worked layout with every answer filled in.
pub fn solved_layout(problem: &Problem, decomposition: &Decomposition) -> String {
    let width = decomposition.width();
    let mut out = problem_header(problem, decomposition);
    for shift in 0..decomposition.len() {
        out.push_str(&format!("  {}\n", solved_row(decomposition, shift).unwrap()));
    }
    // A single working row *is* the product; skip the redundant sum.
    if decomposition.len() > 1 {
        out.push_str(&format!("  {}\n", "-".repeat(width)));
        out.push_str(&format!("  {}\n", decomposition.expected_final()));
    }
    out
}

/// The learner's grid as typed so far, for interactive play.
pub fn entry_row(row: &Row) -> String {
    format!("  {}", row.display_text())
}
