use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use text_input::scenario::{self, Scenario};

#[derive(Debug, Parser)]
#[command(
    name = "text_field",
    version,
    about = "Replay host and user events against a text input control"
)]
struct Cli {
    /// Scenario files (TOML) to replay, each against a fresh control
    #[arg(value_name = "SCENARIO", required = true)]
    scenarios: Vec<PathBuf>,

    /// Exit with failure if any replay ends invalid
    #[arg(long = "require-valid")]
    require_valid: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut failed = false;

    for (i, path) in cli.scenarios.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("== {}", path.display());
        log::info!(target: "text_field.replay", "replaying {}", path.display());

        let report = match Scenario::load(path).and_then(|s| scenario::run(&s)) {
            Ok(report) => report,
            Err(err) => {
                eprintln!("error: {err}");
                failed = true;
                continue;
            }
        };
        println!("{report}");
        if cli.require_valid && !report.validity.is_valid() {
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
