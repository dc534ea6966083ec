//! The `longhand solve` command: print a worked decomposition.

use anyhow::Result;

use longhand_core::decompose::decompose;
use longhand_core::model::Problem;

use crate::render::solved_layout;

pub fn execute(multiplicand: u64, multiplier: u64) -> Result<()> {
    anyhow::ensure!(
        multiplicand < 1_000_000_000 && multiplier < 1_000_000_000,
        "factors above 9 digits overflow the drill engine"
    );

    let problem = Problem::new(multiplicand, multiplier);
    let decomposition = decompose(&problem);

    print!("{}", solved_layout(&problem, &decomposition));
    println!();
    for partial in decomposition.partials() {
        println!(
            "{} × {} × 10^{} = {}",
            problem.multiplicand, partial.digit, partial.shift, partial.value
        );
    }
    println!("{problem} = {}", problem.product);
    Ok(())
}
