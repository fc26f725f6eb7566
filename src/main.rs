use anyhow::Context;
use clap::Parser;
use judge_lookup::config::Command;
use judge_lookup::utils::error::ErrorSeverity;
use judge_lookup::utils::logger;
use judge_lookup::utils::report::{self, OutputFormat};
use judge_lookup::{CliConfig, ImportLookup, LookupError, PersonQuery, SqliteStore};
use std::io::Write;

fn execute(
    lookup: &ImportLookup<SqliteStore>,
    command: &Command,
    format: OutputFormat,
) -> judge_lookup::Result<String> {
    match command {
        Command::FindPerson {
            last,
            court,
            first,
            date,
            raise_zero,
            raise_mult,
        } => {
            let mut query = PersonQuery::new(last.as_str(), court.as_str())
                .with_case_date(*date)
                .raise_zero(*raise_zero)
                .raise_mult(*raise_mult);
            if let Some(first) = first {
                query = query.with_first_name(first.as_str());
            }

            let found: Vec<_> = lookup.find_person(&query)?.into_iter().collect();
            if found.is_empty() {
                tracing::info!("No unique judge found for '{}' in {}", last, court);
            }
            report::render_people(&found, format)
        }
        Command::Scotus { date } => {
            let judges = lookup.get_scotus_judges(*date)?;
            tracing::info!("{} judges sitting on {}", judges.len(), date);
            report::render_people(&judges, format)
        }
        Command::MinDates => report::render_court_dates(&lookup.get_min_dates()?, format),
        Command::MinNocite => report::render_court_dates(&lookup.get_min_nocite()?, format),
        Command::CourtDates => report::render_court_dates(&lookup.get_courtdates()?, format),
        Command::Paths => report::render_paths(&lookup.get_path_list()?, format),
    }
}

fn report_failure(e: &LookupError) -> ! {
    tracing::error!(
        "❌ Lookup failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let run = match cli.resolve() {
        Ok(run) => run,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, None);
            tracing::error!("❌ Configuration validation failed: {}", e);
            report_failure(&e);
        }
    };

    // 初始化日誌
    if run.json_logs {
        logger::init_json_logger(run.log_level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, run.log_level.as_deref());
    }

    tracing::info!("Starting judge-lookup against {}", run.database_path);
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
        tracing::debug!("Lookup settings: {:?}", run.settings);
    }

    let store = match SqliteStore::open_read_only(&run.database_path) {
        Ok(store) => store,
        Err(e) => report_failure(&e),
    };
    let lookup = ImportLookup::with_settings(store, run.settings);

    let output = match execute(&lookup, &cli.command, cli.format) {
        Ok(output) => output,
        Err(e) => report_failure(&e),
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output.trim_end()).context("failed to write report to stdout")?;

    Ok(())
}
