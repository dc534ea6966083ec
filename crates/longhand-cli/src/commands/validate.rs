//! The `longhand validate` command: check config before a session starts.

use std::path::PathBuf;

use anyhow::{Context, Result};

use longhand_persist::load_config_from;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    config
        .session_config()
        .validate()
        .context("configuration cannot start a session")?;

    println!(
        "Config valid: {} trials of {}-digit problems, pass at {:.1}%",
        config.total_trials, config.digit_range, config.required_percent
    );
    if config.sinks.is_empty() {
        println!("No sinks configured; reports are only written locally.");
    } else {
        for (name, sink) in &config.sinks {
            println!("Sink '{name}': {sink:?}");
        }
    }
    if let Some(sink) = &config.default_sink {
        anyhow::ensure!(
            config.sinks.contains_key(sink),
            "default_sink '{sink}' has no matching [sinks.{sink}] entry"
        );
    }
    Ok(())
}
