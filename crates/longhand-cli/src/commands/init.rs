//! The `longhand init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("longhand.toml").exists() {
        println!("longhand.toml already exists, skipping.");
    } else {
        std::fs::write("longhand.toml", SAMPLE_CONFIG)?;
        println!("Created longhand.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit longhand.toml (digit range, trial count, sinks)");
    println!("  2. Run: longhand validate");
    println!("  3. Run: longhand play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# longhand configuration

digit_range = 2
total_trials = 5
required_percent = 75.0
student_id = "anonymous"
output_dir = "./longhand-results"

# Deliver terminal reports to a Firebase-style realtime database.
# Uncomment and set default_sink = "firebase" to enable.
#
# default_sink = "firebase"
#
# [sinks.firebase]
# type = "firebase"
# database_url = "https://your-app.firebaseio.com"
# auth_token = "${LONGHAND_FIREBASE_TOKEN}"
"#;
