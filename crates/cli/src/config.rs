//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use jobboard_listings::{NO_FILTER, ViewQuery};
use jobboard_observability::LogFormat;

#[derive(Parser, Debug)]
#[command(
    name = "jobboard",
    about = "Load job listings from JSON files and print them as a sorted, filtered table"
)]
pub struct Cli {
    /// Listings files, loaded in order. Each load replaces the previous one.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Sort order: az, za, newest or oldest. Anything else sorts A-Z.
    #[arg(long, env = "JOBBOARD_SORT", default_value = "az")]
    pub sort: String,

    /// Only show listings with this level.
    #[arg(long, env = "JOBBOARD_LEVEL", default_value = NO_FILTER)]
    pub level: String,

    /// Only show listings with this duration type.
    #[arg(long = "type", env = "JOBBOARD_TYPE", default_value = NO_FILTER)]
    pub job_type: String,

    /// Only show listings requiring this skill.
    #[arg(long, env = "JOBBOARD_SKILL", default_value = NO_FILTER)]
    pub skill: String,

    /// Output format for the table.
    #[arg(long, env = "JOBBOARD_FORMAT", value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Also print the filter choices derived from the loaded file.
    #[arg(long, default_value_t = false)]
    pub show_options: bool,

    /// Log line format (logs go to stderr).
    #[arg(long, env = "JOBBOARD_LOG_FORMAT", value_enum, default_value_t = LogFormatArg::Pretty)]
    pub log_format: LogFormatArg,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Html,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

impl Cli {
    pub fn query(&self) -> ViewQuery {
        ViewQuery::from_selections(&self.sort, &self.level, &self.job_type, &self.skill)
    }

    pub fn log_format(&self) -> LogFormat {
        match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
