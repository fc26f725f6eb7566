use crate::config::toml_config::TomlConfig;
use crate::core::settings::LookupSettings;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::report::OutputFormat;
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

fn parse_cli_date(value: &str) -> Result<NaiveDate> {
    validation::parse_date("date", value)
}

#[derive(Debug, Clone, Parser)]
#[command(name = "judge-lookup")]
#[command(about = "Judge disambiguation and import reports over a court records database")]
pub struct CliConfig {
    /// Path to the SQLite records database (overrides [database] in the config file)
    #[arg(long)]
    pub database: Option<String>,

    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Court id treated as the supreme court (overrides [lookup] in the config file)
    #[arg(long)]
    pub supreme_court_id: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Resolve a judge's last name to a single person
    FindPerson {
        #[arg(long)]
        last: String,
        #[arg(long)]
        court: String,
        #[arg(long)]
        first: Option<String>,
        #[arg(long, value_parser = parse_cli_date)]
        date: Option<NaiveDate>,
        /// Fail when nobody matches
        #[arg(long)]
        raise_zero: bool,
        /// Fail when several people still match
        #[arg(long)]
        raise_mult: bool,
    },
    /// List the supreme court panel sitting on a date
    Scotus {
        #[arg(long, value_parser = parse_cli_date)]
        date: NaiveDate,
    },
    /// Earliest filing date per court
    MinDates,
    /// Earliest uncited filing date per court
    MinNocite,
    /// Founding date per court
    CourtDates,
    /// Local paths of opinions already imported
    Paths,
}

/// CLI flags merged over the optional TOML file.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub database_path: String,
    pub settings: LookupSettings,
    pub log_level: Option<String>,
    pub json_logs: bool,
}

impl CliConfig {
    pub fn load_file_config(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Ok(config)
            }
            None => Ok(TomlConfig::default()),
        }
    }

    pub fn resolve(&self) -> Result<RunConfig> {
        self.validate()?;
        let file_config = self.load_file_config()?;

        let database = self
            .database
            .clone()
            .or_else(|| file_config.database_path().map(str::to_string));
        let database_path = validation::validate_required_field("database.path", &database)?;
        validation::validate_path("database.path", database_path)?;

        let mut settings = LookupSettings::from_config(&file_config);
        if let Some(court_id) = &self.supreme_court_id {
            settings.supreme_court_id = court_id.clone();
        }

        Ok(RunConfig {
            database_path: database_path.clone(),
            settings,
            log_level: file_config.log_level().map(str::to_string),
            json_logs: self.json_logs || file_config.json_logs(),
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.database {
            validation::validate_path("--database", path)?;
        }
        if let Some(path) = &self.config {
            validation::validate_path("--config", path)?;
        }
        if let Some(court_id) = &self.supreme_court_id {
            validation::validate_court_id("--supreme-court-id", court_id)?;
        }
        if let Command::FindPerson { last, court, .. } = &self.command {
            validation::validate_non_empty_string("--last", last)?;
            validation::validate_court_id("--court", court)?;
        }
        Ok(())
    }
}
