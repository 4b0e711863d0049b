use std::path::PathBuf;

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use payroll_ledger::api::{self, AppState};
use payroll_ledger::config::{ConfigLoader, TelemetryConfig};
use payroll_ledger::demo::demo_report;
use payroll_ledger::models::EmployeeType;
use payroll_ledger::roster::PayrollReport;
use payroll_ledger::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "payroll-ledger",
    about = "Track salaried, hourly and contract employees and total their payroll",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the sample walk-through with three employees (default command)
    Demo,
    /// Print a payroll report for the employees seeded from a config file
    Report(ReportArgs),
    /// Start the HTTP service over the seeded roster
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Path to the ledger configuration file
    #[arg(long, default_value = "config/ledger.yaml")]
    config: PathBuf,
    /// Only list employees of this type (e.g. full-time)
    #[arg(long = "type")]
    employee_type: Option<EmployeeType>,
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Path to the ledger configuration file
    #[arg(long, default_value = "config/ledger.yaml")]
    config: PathBuf,
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => {
            telemetry::init(&TelemetryConfig::default())?;
            let today = Utc::now().date_naive();
            print!("{}", demo_report(today));
        }
        Command::Report(args) => {
            let loader = ConfigLoader::load(&args.config)?;
            telemetry::init(loader.telemetry())?;
            let roster = loader.seed_roster();

            let report = match args.employee_type {
                Some(employee_type) => {
                    let mut report = PayrollReport::new();
                    report
                        .listing(
                            format!("{} Employees:", employee_type),
                            roster.list_by_type(employee_type.label()),
                        )
                        .total(&roster);
                    report
                }
                None => PayrollReport::summary(&roster),
            };
            print!("{}", report);
        }
        Command::Serve(args) => {
            let loader = ConfigLoader::load(&args.config)?;
            telemetry::init(loader.telemetry())?;

            let mut server = loader.server().clone();
            if let Some(host) = args.host {
                server.host = host;
            }
            if let Some(port) = args.port {
                server.port = port;
            }

            let roster = loader.seed_roster();
            info!(
                config = %args.config.display(),
                seeded = roster.len(),
                "Starting payroll ledger"
            );
            api::serve(AppState::new(roster), &server.bind_address()).await?;
        }
    }

    Ok(())
}
