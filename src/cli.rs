use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "scorecard",
    version,
    about = "Weighted target-achievement scoring for monthly KPI scorecards"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Init(InitCommand),
    Score(ScoreCommand),
    Trend(TrendCommand),
    Risk(RiskCommand),
    Lint(LintCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct InitCommand {
    pub path: PathBuf,
    /// Period to scaffold as YYYY-MM (default: current month)
    #[arg(long)]
    pub period: Option<String>,
    /// Clone the latest existing period's structure with actuals zeroed
    #[arg(long)]
    pub from_previous: bool,
    #[arg(long)]
    pub dry_run: bool,
    /// Overwrite an existing period document (the old file is backed up)
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub path: PathBuf,
    /// Period to score as YYYY-MM (default: latest)
    #[arg(long)]
    pub period: Option<String>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct TrendCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct RiskCommand {
    pub path: PathBuf,
    /// Period to inspect as YYYY-MM (default: latest)
    #[arg(long)]
    pub period: Option<String>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct LintCommand {
    pub path: PathBuf,
    /// Period to lint as YYYY-MM (default: every period)
    #[arg(long)]
    pub period: Option<String>,
}
