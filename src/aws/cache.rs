//! Cache management for collected account data.
//!
//! Account data lives under `<root>/<account name>/<region>/<call>.json`.
//! A missing file is fetched through the AWS CLI and written back, unless
//! the cache is offline.

use crate::config;
use chrono::{DateTime, Utc};
use std::error::Error;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct AccountDataCache {
    root: PathBuf,
    offline: bool,
}

impl AccountDataCache {
    pub fn new(root: impl Into<PathBuf>, offline: bool) -> Self {
        AccountDataCache {
            root: root.into(),
            offline,
        }
    }

    /// Path of the cache file for one API call.
    pub fn cache_file(&self, account: &str, region: &str, call: &str) -> PathBuf {
        self.root.join(account).join(region).join(format!("{call}.json"))
    }

    /// Read cached JSON, or run `fetch` and store its output if the file is missing.
    pub fn read_or_fetch<F>(
        &self,
        account: &str,
        region: &str,
        call: &str,
        fetch: F,
    ) -> Result<String, Box<dyn Error>>
    where
        F: FnOnce() -> Result<String, Box<dyn Error>>,
    {
        let cache_file = self.cache_file(account, region, call);

        if cache_file.exists() {
            log::debug!("Reading from cache file: {}", cache_file.display());
            warn_if_stale(&cache_file);
            return std::fs::read_to_string(&cache_file)
                .map_err(|e| format!("Error reading cache file {}: {e}", cache_file.display()).into());
        }

        if self.offline {
            return Err(format!("Cache file does not exist: {}", cache_file.display()).into());
        }

        log::warn!("Cache file not found: {}", cache_file.display());
        let json = fetch()?;
        if let Some(parent) = cache_file.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Error creating {}: {e}", parent.display()))?;
        }
        log::info!("Writing data to cache file: {}", cache_file.display());
        std::fs::write(&cache_file, &json)
            .map_err(|e| format!("Error writing cache file {}: {e}", cache_file.display()))?;

        std::thread::sleep(std::time::Duration::from_millis(config::SLEEP_MSEC));
        Ok(json)
    }
}

/// Age of a file in whole days, if the filesystem reports a modification time.
fn age_in_days(path: &Path) -> Option<i64> {
    let modified: DateTime<Utc> = std::fs::metadata(path).ok()?.modified().ok()?.into();
    Some((Utc::now() - modified).num_days())
}

fn warn_if_stale(path: &Path) {
    if let Some(days) = age_in_days(path) {
        if days > config::CACHE_MAX_AGE_DAYS {
            log::warn!(
                "Cache file {} is {days} days old, collected data may be out of date",
                path.display()
            );
        }
    }
}
