use clap::Parser;
use scorecard::cli::{self, Cli, Commands};
use scorecard::engine::aggregate::score_period;
use scorecard::engine::risk::at_risk_items;
use scorecard::engine::trend::compute_trend;
use scorecard::error::ScorecardError;
use scorecard::types::report::{PeriodReport, RiskReport, TrendReport};
use scorecard::{config, generator, lint, report, store};
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_directive = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn require_path(path: &Path) -> Result<(), ScorecardError> {
    if path.exists() {
        Ok(())
    } else {
        Err(ScorecardError::PathNotFound(path.display().to_string()))
    }
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run() -> Result<i32, ScorecardError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Score(cmd) => {
            require_path(&cmd.path)?;
            let cfg = config::load_config(&cmd.path)?;
            let period = store::load_period(&cmd.path, &cfg, cmd.period.as_deref())?;

            let findings = lint::weight_findings(&period);
            let summary = score_period(&period, cfg.achievement_cap());
            let at_risk =
                at_risk_items(&period, cfg.achievement_cap(), cfg.at_risk_threshold());
            let has_blocking = findings.iter().any(|finding| finding.blocking);
            let has_warnings = !findings.is_empty();

            let period_report = PeriodReport {
                project: cfg.project.name.clone(),
                summary,
                at_risk,
                findings,
            };
            let rendered = report::render_period(&period_report, output_format(&cmd.format))?;
            println!("{rendered}");

            if has_blocking {
                Ok(exit_code::BLOCKING)
            } else if has_warnings {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        Commands::Trend(cmd) => {
            require_path(&cmd.path)?;
            let cfg = config::load_config(&cmd.path)?;
            let periods = store::discover_periods(&cmd.path, &cfg)?;

            let trend_report = TrendReport {
                project: cfg.project.name.clone(),
                points: compute_trend(&periods, cfg.achievement_cap()),
            };
            let rendered = report::render_trend(&trend_report, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        Commands::Risk(cmd) => {
            require_path(&cmd.path)?;
            let cfg = config::load_config(&cmd.path)?;
            let period = store::load_period(&cmd.path, &cfg, cmd.period.as_deref())?;

            let items =
                at_risk_items(&period, cfg.achievement_cap(), cfg.at_risk_threshold());
            let has_items = !items.is_empty();
            let risk_report = RiskReport {
                project: cfg.project.name.clone(),
                period: period.period.clone(),
                items,
            };
            let rendered = report::render_risk(&risk_report, output_format(&cmd.format))?;
            println!("{rendered}");

            if has_items {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        Commands::Lint(cmd) => {
            require_path(&cmd.path)?;
            let cfg = config::load_config(&cmd.path)?;
            let periods = match cmd.period.as_deref() {
                Some(id) => vec![store::load_period(&cmd.path, &cfg, Some(id))?],
                None => store::discover_periods(&cmd.path, &cfg)?,
            };

            let findings: Vec<_> = periods
                .iter()
                .flat_map(|period| {
                    lint::weight_findings(period).into_iter().map(|finding| {
                        (period.period.clone(), finding)
                    })
                })
                .collect();

            if findings.is_empty() {
                println!("lint: no findings");
                return Ok(exit_code::SUCCESS);
            }

            for (period_id, finding) in &findings {
                let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                println!("[{}] {} {}: {}", level, period_id, finding.id, finding.title);
                println!("  {}", finding.body);
            }

            if findings.iter().any(|(_, finding)| finding.blocking) {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        Commands::Init(cmd) => {
            generator::writer::execute_init(&cmd)?;
            Ok(exit_code::SUCCESS)
        }
    }
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
