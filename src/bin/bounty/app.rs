//! Start-up wiring shared by all commands

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use blood_token::{BountyList, BountyRegistry, BountyStorage, Config};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub struct App {
    pub config: Config,
    pub config_path: PathBuf,
    pub db_path: PathBuf,
    pub registry: Arc<BountyRegistry>,
    pub storage: Arc<BountyStorage>,
}

impl App {
    pub fn open(config_path: &Path, db: Option<&Path>, verbose: bool) -> Result<Self> {
        let config = Config::load_from(config_path).context("Failed to load config")?;

        let level = if verbose {
            "debug".to_string()
        } else {
            config.logging.level.clone()
        };
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level)),
            )
            .with_writer(std::io::stderr)
            .init();

        let db_path = db
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config.database_path());
        let storage = Arc::new(
            BountyStorage::new(&db_path)
                .with_context(|| format!("Failed to open cache {}", db_path.display()))?,
        );

        let targets = match storage.load_list()? {
            Some(list) => {
                debug!("Loaded {} cached targets", list.len());
                list
            }
            None => {
                info!("No cached bounty list, using configured defaults");
                config.default_targets()
            }
        };

        let registry = Arc::new(BountyRegistry::with_targets(targets));

        Ok(Self {
            config,
            config_path: config_path.to_path_buf(),
            db_path,
            registry,
            storage,
        })
    }

    /// Save `targets` to the cache, then make them the active list.
    pub fn commit(&self, targets: BountyList) -> Result<()> {
        commit(&self.registry, &self.storage, targets)
    }
}

/// The active list only changes once the save has succeeded, so a failed
/// save is reported instead of being lost when the process exits.
fn commit(registry: &BountyRegistry, storage: &BountyStorage, targets: BountyList) -> Result<()> {
    storage
        .save_list(&targets)
        .context("Failed to save bounty list")?;
    registry.set(targets);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blood_token::parse_bounty_list;

    fn scratch_db(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "blood-token-{}-{}.db",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        path
    }

    #[test]
    fn test_commit_saves_then_sets() {
        let registry = BountyRegistry::new();
        let storage = BountyStorage::in_memory().unwrap();
        let targets = parse_bounty_list("Alice | headshot only").unwrap();

        commit(&registry, &storage, targets.clone()).unwrap();

        assert_eq!(registry.get(), targets);
        assert_eq!(storage.load_list().unwrap(), Some(targets));
    }

    #[test]
    fn test_commit_reports_failed_save() {
        let path = scratch_db("failed-save");
        let storage = BountyStorage::new(&path).unwrap();
        rusqlite::Connection::open(&path)
            .unwrap()
            .execute("DROP TABLE bounty_targets", [])
            .unwrap();

        let registry = BountyRegistry::new();
        let before = registry.get();
        let err = commit(&registry, &storage, parse_bounty_list("Alice").unwrap()).unwrap_err();

        assert!(format!("{:#}", err).starts_with("Failed to save bounty list"));
        assert_eq!(registry.get(), before);

        drop(storage);
        let _ = std::fs::remove_file(&path);
    }
}
