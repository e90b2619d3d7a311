mod cli;

use clap::Parser;
use machine_health::config;
use machine_health::error::HealthError;
use machine_health::health;
use machine_health::report;
use machine_health::types::machine::{MachineType, Part};
use machine_health::types::reading::{PartReading, ReadingSet};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const FAULTED_PART: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, HealthError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Score(cmd) => {
            let profile = config::load_profile(cmd.profile.as_deref())?;
            let content = std::fs::read_to_string(&cmd.input)?;
            let set: ReadingSet = serde_json::from_str(&content)?;

            let health_report = health::report(&profile, set.machine, &set.readings)?;
            let format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            println!("{}", report::render(&health_report, format)?);

            if health_report.has_faulted_part() {
                Ok(exit_code::FAULTED_PART)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Part(cmd) => {
            let profile = config::load_profile(cmd.profile.as_deref())?;
            let machine: MachineType = cmd.machine.parse()?;
            let part: Part = cmd.part.parse()?;

            let health = health::part_health(&profile, machine, &PartReading::new(part, cmd.value))?;
            println!("{health:.2}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Rules(cmd) => {
            let profile = config::load_profile(cmd.profile.as_deref())?;
            let machines = match cmd.machine {
                Some(name) => vec![name.parse::<MachineType>()?],
                None => MachineType::ALL.to_vec(),
            };

            for machine in machines {
                println!("{machine}:");
                for (part, rule) in profile.parts_for(machine) {
                    println!("  {part}: {rule:?}");
                }
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
