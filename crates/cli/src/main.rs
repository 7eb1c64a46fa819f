use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use zonefix_domain::CliOverrides;

mod bootstrap;
mod di;

/// Repairs zone files exported from other DNS providers so they load as
/// standard BIND-style zones: CNAME, MX and SRV targets get their trailing
/// period and stray `.@` markers are removed from SRV records.
#[derive(Parser)]
#[command(name = "zonefix")]
#[command(version)]
#[command(about = "Repair zone files exported from third-party DNS providers")]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Zone files or glob patterns; each file is rewritten in place
    #[arg(value_name = "FILES", required = true)]
    files: Vec<String>,

    /// Back up each zone file before modifying it (default directory: BACKUP)
    #[arg(short = 'b', long)]
    backup: bool,

    /// Directory for backups instead of BACKUP; implies --backup
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    dir: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        backup: cli.backup,
        backup_dir: cli.dir,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting zonefix v{}", env!("CARGO_PKG_VERSION"));

    let repair_config = config.repair_config(cli.files);
    if let Some(policy) = &repair_config.backup {
        info!(directory = %policy.directory.display(), "Backups enabled");
    }

    let use_cases = di::UseCases::new(&repair_config);
    let summary = use_cases.repair_batch.execute(&repair_config.inputs);

    if summary.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        error!(
            failed = summary.failed(),
            succeeded = summary.succeeded(),
            "Some zone files could not be repaired"
        );
        Ok(ExitCode::FAILURE)
    }
}
