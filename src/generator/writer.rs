use crate::cli::InitCommand;
use crate::config;
use crate::error::{Result, ScorecardError};
use crate::store;
use crate::types::period::{validate_period_id, PeriodScore, ScoreGroup, ScoreItem};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const STARTER_CONFIG: &str = r#"[project]
name = "scorecard"

[scoring]
achievement_cap = 120.0
at_risk_threshold = 100.0

[data]
periods_dir = "periods"
"#;

#[derive(Debug, Serialize)]
struct BackupManifest {
    timestamp: String,
    scorecard_version: String,
    path: String,
    sha256: String,
}

pub fn execute_init(cmd: &InitCommand) -> Result<()> {
    let root = cmd.path.as_path();
    let period_id = match &cmd.period {
        Some(id) => id.clone(),
        None => Utc::now().format("%Y-%m").to_string(),
    };
    validate_period_id(&period_id)?;

    let config_path = root.join(config::DEFAULT_CONFIG_FILE);
    let creating_config = !config_path.exists();
    let cfg = if creating_config {
        toml::from_str(STARTER_CONFIG).map_err(ScorecardError::Toml)?
    } else {
        config::load_config(root)?
    };

    let document = if cmd.from_previous {
        match store::discover_periods(root, &cfg) {
            Ok(periods) => match periods.into_iter().next_back() {
                Some(latest) => clone_with_zeroed_actuals(&latest, &period_id),
                None => starter_period(&period_id),
            },
            // no periods directory yet: first run, nothing to clone from
            Err(ScorecardError::PathNotFound(_)) => starter_period(&period_id),
            Err(e) => return Err(e),
        }
    } else {
        starter_period(&period_id)
    };

    let out_path = store::periods_dir(root, &cfg).join(format!("{period_id}.json"));
    let overwriting = out_path.exists();
    if overwriting && !cmd.force {
        return Err(ScorecardError::WouldOverwrite(
            out_path.display().to_string(),
        ));
    }

    print_scope(root, &config_path, creating_config, &out_path, overwriting);
    if cmd.dry_run {
        println!("dry-run: no files were written");
        return Ok(());
    }

    if creating_config {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, STARTER_CONFIG)?;
    }
    if overwriting {
        let backup_path = back_up_existing(root, &out_path)?;
        println!("backup: {}", backup_path.display());
    }

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&document)?;
    fs::write(&out_path, json)?;
    debug!(path = %out_path.display(), period = %period_id, "wrote period document");
    println!("init complete: {}", out_path.display());
    Ok(())
}

fn starter_period(period_id: &str) -> PeriodScore {
    PeriodScore {
        period: period_id.to_string(),
        groups: vec![ScoreGroup {
            name: "KPIs".to_string(),
            target: 0.0,
            actual: 0.0,
            weight: 0.0,
            auto_calculate: true,
            items: vec![ScoreItem {
                name: "First criterion".to_string(),
                target: 0.0,
                actual: 0.0,
                weight: 100.0,
            }],
        }],
    }
}

/// Clones the prior period's structure for a new month: targets and weights
/// survive, actuals start at zero.
fn clone_with_zeroed_actuals(previous: &PeriodScore, period_id: &str) -> PeriodScore {
    let groups = previous
        .groups
        .iter()
        .map(|group| ScoreGroup {
            name: group.name.clone(),
            target: group.target,
            actual: 0.0,
            weight: group.weight,
            auto_calculate: group.auto_calculate,
            items: group
                .items
                .iter()
                .map(|item| ScoreItem {
                    name: item.name.clone(),
                    target: item.target,
                    actual: 0.0,
                    weight: item.weight,
                })
                .collect(),
        })
        .collect();

    PeriodScore {
        period: period_id.to_string(),
        groups,
    }
}

fn print_scope(
    root: &Path,
    config_path: &Path,
    creating_config: bool,
    out_path: &Path,
    overwriting: bool,
) {
    let display = |path: &Path| {
        path.strip_prefix(root)
            .unwrap_or(path)
            .display()
            .to_string()
    };
    if creating_config {
        println!("create: {}", display(config_path));
    }
    let action = if overwriting { "overwrite" } else { "create" };
    println!("{}: {}", action, display(out_path));
}

fn back_up_existing(root: &Path, path: &Path) -> Result<PathBuf> {
    let timestamp = Utc::now();
    let stamp = timestamp.format("%Y%m%dT%H%M%SZ").to_string();
    let backup_dir = root.join(".scorecard/backups").join(&stamp);
    fs::create_dir_all(&backup_dir)?;

    let bytes = fs::read(path)?;
    let file_name = path
        .file_name()
        .ok_or_else(|| ScorecardError::PathNotFound(path.display().to_string()))?;
    let backup_path = backup_dir.join(file_name);
    fs::write(&backup_path, &bytes)?;

    let manifest = BackupManifest {
        timestamp: timestamp.to_rfc3339(),
        scorecard_version: env!("CARGO_PKG_VERSION").to_string(),
        path: path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string(),
        sha256: sha256_hex(&bytes),
    };
    let manifest_json = serde_json::to_string_pretty(&manifest)?;
    fs::write(backup_dir.join("manifest.json"), manifest_json)?;
    Ok(backup_path)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_cmd(root: &Path, period: &str) -> InitCommand {
        InitCommand {
            path: root.to_path_buf(),
            period: Some(period.to_string()),
            from_previous: false,
            dry_run: false,
            force: false,
        }
    }

    #[test]
    fn init_scaffolds_config_and_period_document() {
        let tmp = TempDir::new().expect("temp dir should create");
        execute_init(&init_cmd(tmp.path(), "2026-08")).expect("init should succeed");

        assert!(tmp.path().join("scorecard.toml").exists());
        let raw = fs::read_to_string(tmp.path().join("periods/2026-08.json"))
            .expect("period file should exist");
        let period: PeriodScore = serde_json::from_str(&raw).expect("document should parse");
        assert_eq!(period.period, "2026-08");
        assert!(period.validate().is_ok());
    }

    #[test]
    fn init_rejects_invalid_period_id() {
        let tmp = TempDir::new().expect("temp dir should create");
        let err = execute_init(&init_cmd(tmp.path(), "2026-8")).expect_err("init should fail");
        assert!(matches!(err, ScorecardError::InvalidPeriod(_)));
    }

    #[test]
    fn init_refuses_overwrite_without_force() {
        let tmp = TempDir::new().expect("temp dir should create");
        execute_init(&init_cmd(tmp.path(), "2026-08")).expect("first init should succeed");

        let err = execute_init(&init_cmd(tmp.path(), "2026-08")).expect_err("second init");
        assert!(matches!(err, ScorecardError::WouldOverwrite(_)));
    }

    #[test]
    fn forced_overwrite_backs_up_with_digest() {
        let tmp = TempDir::new().expect("temp dir should create");
        execute_init(&init_cmd(tmp.path(), "2026-08")).expect("first init should succeed");

        let mut cmd = init_cmd(tmp.path(), "2026-08");
        cmd.force = true;
        execute_init(&cmd).expect("forced init should succeed");

        let backups = tmp.path().join(".scorecard/backups");
        let entries: Vec<_> = fs::read_dir(&backups)
            .expect("backups dir should exist")
            .filter_map(|entry| entry.ok())
            .collect();
        assert_eq!(entries.len(), 1);
        let manifest_raw = fs::read_to_string(entries[0].path().join("manifest.json"))
            .expect("manifest should exist");
        assert!(manifest_raw.contains("sha256"));
        assert!(entries[0].path().join("2026-08.json").exists());
    }

    #[test]
    fn dry_run_writes_nothing() {
        let tmp = TempDir::new().expect("temp dir should create");
        let mut cmd = init_cmd(tmp.path(), "2026-08");
        cmd.dry_run = true;
        execute_init(&cmd).expect("dry-run should succeed");

        assert!(!tmp.path().join("scorecard.toml").exists());
        assert!(!tmp.path().join("periods/2026-08.json").exists());
    }

    #[test]
    fn from_previous_fails_when_prior_period_is_corrupt() {
        let tmp = TempDir::new().expect("temp dir should create");
        execute_init(&init_cmd(tmp.path(), "2026-07")).expect("first init should succeed");
        fs::write(tmp.path().join("periods/2026-07.json"), "{ not json")
            .expect("corrupt period should write");

        let mut cmd = init_cmd(tmp.path(), "2026-08");
        cmd.from_previous = true;
        let err = execute_init(&cmd).expect_err("clone init should fail");
        assert!(matches!(err, ScorecardError::PeriodDocument(_)));
        assert!(!tmp.path().join("periods/2026-08.json").exists());
    }

    #[test]
    fn from_previous_falls_back_to_starter_on_first_run() {
        let tmp = TempDir::new().expect("temp dir should create");
        let mut cmd = init_cmd(tmp.path(), "2026-08");
        cmd.from_previous = true;
        execute_init(&cmd).expect("first-run clone init should succeed");

        let raw = fs::read_to_string(tmp.path().join("periods/2026-08.json"))
            .expect("period file should exist");
        assert!(raw.contains("First criterion"));
    }

    #[test]
    fn from_previous_clones_structure_with_zeroed_actuals() {
        let tmp = TempDir::new().expect("temp dir should create");
        execute_init(&init_cmd(tmp.path(), "2026-07")).expect("first init should succeed");

        let july_path = tmp.path().join("periods/2026-07.json");
        let mut july: PeriodScore = serde_json::from_str(
            &fs::read_to_string(&july_path).expect("july should exist"),
        )
        .expect("july should parse");
        july.groups[0].items[0].target = 12.0;
        july.groups[0].items[0].actual = 9.0;
        fs::write(&july_path, serde_json::to_string_pretty(&july).expect("july serializes"))
            .expect("july should rewrite");

        let mut cmd = init_cmd(tmp.path(), "2026-08");
        cmd.from_previous = true;
        execute_init(&cmd).expect("clone init should succeed");

        let august: PeriodScore = serde_json::from_str(
            &fs::read_to_string(tmp.path().join("periods/2026-08.json"))
                .expect("august should exist"),
        )
        .expect("august should parse");
        assert_eq!(august.period, "2026-08");
        assert_eq!(august.groups[0].items[0].target, 12.0);
        assert_eq!(august.groups[0].items[0].actual, 0.0);
    }
}
