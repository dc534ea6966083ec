//! The `longhand play` command: an interactive drill session.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use longhand_core::decompose::decompose;
use longhand_core::generator::ProblemGenerator;
use longhand_core::grid::Row;
use longhand_core::model::{Problem, StudentId};
use longhand_core::report::{TerminalReport, TrialRecord};
use longhand_core::session::{ProgressReporter, Session};
use longhand_persist::{create_sink, load_config_from};

use crate::render::{entry_row, problem_header};

/// Console progress reporter.
struct ConsoleReporter {
    total: u32,
}

impl ProgressReporter for ConsoleReporter {
    fn on_trial_start(&self, trial: u32, problem: &Problem) {
        println!("\nTrial {trial} of {}:", self.total);
        print!("{}", problem_header(problem, &decompose(problem)));
    }

    fn on_trial_graded(&self, trial: u32, record: &TrialRecord) {
        let verdict = if record.is_correct() {
            "correct"
        } else {
            "incorrect"
        };
        let yesno = |ok: bool| if ok { "ok" } else { "wrong" };
        println!(
            "  Trial {trial}/{}: {verdict} (rows {}, final {})",
            self.total,
            yesno(record.rows_correct),
            yesno(record.final_correct),
        );
    }

    fn on_session_complete(&self, _: &TerminalReport) {}
}

#[allow(clippy::too_many_arguments)]
pub async fn execute(
    digits: Option<u32>,
    trials: Option<u32>,
    required_percent: Option<f64>,
    seed: Option<u64>,
    student: Option<String>,
    sink_name: Option<String>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let mut session_config = config.session_config();
    if let Some(d) = digits {
        session_config.digit_range = d;
    }
    if let Some(t) = trials {
        session_config.total_trials = t;
    }
    if let Some(p) = required_percent {
        session_config.required_percent = p;
    }

    let generator = match seed {
        Some(s) => ProblemGenerator::seeded(s),
        None => ProblemGenerator::from_entropy(),
    };
    let reporter = ConsoleReporter {
        total: session_config.total_trials,
    };

    println!(
        "longhand: {} problems, {}-digit factors, pass at {:.1}%",
        session_config.total_trials, session_config.digit_range, session_config.required_percent
    );
    println!("Type each row's digits left to right; blank counts as zeros.");

    let mut session =
        Session::new(session_config, generator, &reporter).context("session cannot start")?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !session.is_complete() {
        let problem = *session.current_problem().context("no active problem")?;
        let decomposition = session
            .current_decomposition()
            .context("no active decomposition")?
            .clone();

        for (shift, partial) in decomposition.partials().iter().enumerate() {
            let prompt = format!(
                "  row {} ({} × {}{}): ",
                shift + 1,
                problem.multiplicand,
                partial.digit,
                if shift > 0 {
                    format!(", shifted {shift}")
                } else {
                    String::new()
                }
            );
            let row = session
                .grid_mut()
                .context("no active grid")?
                .row_mut(shift)
                .context("row missing from grid")?;
            fill_row(&mut lines, &prompt, row)?;
            println!("{}", entry_row(row));
        }

        let final_row = session
            .grid_mut()
            .context("no active grid")?
            .final_row_mut();
        fill_row(&mut lines, "  final product: ", final_row)?;
        println!("{}", entry_row(final_row));

        session.submit_grid(&reporter)?;
        if !session.is_complete() {
            println!("  progress: {:.0}%", session.progress_percent());
        }
    }

    let report = session
        .terminal_report()
        .cloned()
        .context("completed session has no report")?;
    print_summary(&report);

    let output_dir = output.unwrap_or_else(|| config.output_dir.clone());
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
    let path = output_dir.join(format!("session-{timestamp}.json"));
    report.save_json(&path)?;
    println!("Report saved to: {}", path.display());

    if let Some(name) = sink_name.or_else(|| config.default_sink.clone()) {
        let sink_config = config
            .sinks
            .get(&name)
            .with_context(|| format!("sink '{name}' not found in config"))?;
        let sink = create_sink(&name, sink_config)?;
        let student = StudentId::new(
            student
                .or_else(|| config.student_id.clone())
                .unwrap_or_else(|| "anonymous".to_string()),
        );
        // Delivery failure must not change the finalized result.
        match sink.deliver(&report, &student).await {
            Ok(()) => println!("Report delivered to sink '{}'", sink.name()),
            Err(e) => {
                tracing::warn!(sink = sink.name(), "report delivery failed: {e:#}");
                eprintln!("Warning: report delivery failed: {e:#}");
            }
        }
    }

    Ok(())
}

/// Prompt until the row accepts an entry. EOF counts as a blank entry,
/// so piped input degrades to all-empty rows instead of hanging.
fn fill_row(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
    row: &mut Row,
) -> Result<()> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => String::new(),
        };
        match row.enter(line.trim()) {
            Ok(()) => return Ok(()),
            Err(e) => eprintln!("  {e}; try again"),
        }
    }
}

fn print_summary(report: &TerminalReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["#", "Problem", "Rows", "Final", "Result"]);

    for (i, trial) in report.trials.iter().enumerate() {
        let mark = |ok: bool| if ok { "ok" } else { "wrong" };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(format!(
                "{} × {} = {}",
                trial.multiplicand, trial.multiplier, trial.product
            )),
            Cell::new(mark(trial.rows_correct)),
            Cell::new(mark(trial.final_correct)),
            Cell::new(if trial.is_correct() { "correct" } else { "incorrect" }),
        ]);
    }

    println!("\n{table}");
    println!(
        "Session complete: {}/{} correct ({:.1}%)",
        report.correct_trials, report.total_trials, report.percent
    );
    println!(
        "Result: {} (required {:.1}%)",
        if report.passed { "PASSED" } else { "FAILED" },
        report.required_percent
    );
}
