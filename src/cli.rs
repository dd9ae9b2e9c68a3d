use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser};
use std::path::PathBuf;
use std::time::Duration;

use crate::worktime::{WorkHours, WORK_END_HOUR, WORK_START_HOUR};

pub const DEFAULT_COMMIT_LIMIT: usize = 1000;
pub const DEFAULT_OUTPUT: &str = "work_hours_report.json";
pub const DEFAULT_TIMEOUT: &str = "30s";

#[derive(Parser)]
#[command(name = "offhours")]
#[command(about = "Classify git commits as made inside or outside work hours")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub run: RunArgs,
}

#[derive(Args, Clone, Debug)]
pub struct RunArgs {
    #[arg(
        help = "Number of most recent commits to analyze",
        default_value_t = DEFAULT_COMMIT_LIMIT,
        value_parser = parse_limit
    )]
    pub limit: usize,

    #[arg(long, help = "Path to git repository")]
    pub repo: Option<PathBuf>,

    #[arg(long, help = "Path of the JSON report", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    #[arg(
        long,
        help = "First hour of the work day (inclusive)",
        default_value_t = WORK_START_HOUR,
        value_parser = clap::value_parser!(u32).range(0..=24)
    )]
    pub start_hour: u32,

    #[arg(
        long,
        help = "Hour the work day ends (exclusive)",
        default_value_t = WORK_END_HOUR,
        value_parser = clap::value_parser!(u32).range(0..=24)
    )]
    pub end_hour: u32,

    #[arg(
        long,
        help = "Give up on git log after this long (e.g. 30s, 2m)",
        default_value = DEFAULT_TIMEOUT,
        value_parser = humantime::parse_duration
    )]
    pub timeout: Duration,

    #[arg(long, help = "Print the report as JSON instead of tables")]
    pub json: bool,
}

fn parse_limit(s: &str) -> std::result::Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid commit count"))?;
    if n == 0 {
        return Err("commit limit must be greater than 0".to_string());
    }
    Ok(n)
}

impl RunArgs {
    pub fn work_hours(&self) -> crate::error::Result<WorkHours> {
        WorkHours::new(self.start_hour, self.end_hour)
    }
}

impl Cli {
    /// Parse argv, exiting with a usage error on an empty work-hour range.
    pub fn parse() -> Self {
        let cli = <Self as Parser>::parse();
        if let Err(e) = cli.run.work_hours() {
            Self::command().error(ErrorKind::ArgumentConflict, e).exit();
        }
        cli
    }

    pub fn execute(self) -> Result<()> {
        crate::report::exec(self.run)
    }
}
