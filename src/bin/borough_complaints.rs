//! Borough Complaints - count complaints by type and borough in a date range
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin borough_complaints -- \
//!     -i data/311.csv -s 2020-01-01 -e 2020-01-31 [-o out.csv] [-f csv|jsonl|sqlite]
//! ```
//!
//! Results go to stdout unless `--output` is given. Logs go to stderr.
//!
//! ## Environment Variables
//!
//! - RUST_LOG - Logging level (optional, default: info)

use borough_complaints::complaints_core::{aggregate_range, ComplaintError, ResultWriter};
use borough_complaints::config::{Cli, OutputTarget, RunConfig};
use clap::Parser;

fn run(cli: Cli) -> Result<(), ComplaintError> {
    let config = RunConfig::from_args(cli)?;

    log::info!("🚀 Starting complaint aggregation");
    log::info!("   Input: {}", config.input.display());
    log::info!("   Range: {}", config.range);
    log::info!("   Format: {}", config.format.as_str());

    let counts = aggregate_range(&config.input, &config.range)?;

    let mut writer = ResultWriter::new(config.format, &config.output, config.range)?;
    log::info!("📊 Backend: {}", writer.backend_type());
    writer.write_counts(&counts)?;
    writer.flush()?;

    log::info!("✅ Emitted {} groups", counts.len());

    if let OutputTarget::File(path) = &config.output {
        println!("Results saved to {}", path.display());
    }

    Ok(())
}

fn main() {
    dotenv::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log::error!("❌ {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
