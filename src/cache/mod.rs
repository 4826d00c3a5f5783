//! Last known catalog and schedule, stored as JSON under fixed names and
//! restored verbatim before the first fetch completes.

use crate::errors::AppResult;
use crate::models::catalog::Classified;
use crate::models::schedule::WeeklySchedule;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const MENU_CACHE: &str = "menu_cache.json";
pub const HOURS_CACHE: &str = "hours_cache.json";

pub struct Cache {
    dir: PathBuf,
}

impl Cache {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Write to a temp file and rename, so a reader never sees half a file.
    fn store<T: Serialize>(&self, name: &str, value: &T) -> AppResult<()> {
        fs::create_dir_all(&self.dir)?;
        let target = self.path(name);
        let tmp = target.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(value)?)?;
        fs::rename(&tmp, &target)?;
        debug!(path = %target.display(), "cache updated");
        Ok(())
    }

    /// A missing or corrupt cache is a miss, not an error.
    fn load<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let path = self.path(name);
        let bytes = fs::read(&path).ok()?;
        match serde_json::from_slice(&bytes) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable cache");
                None
            }
        }
    }

    pub fn store_menu(&self, menu: &Classified) -> AppResult<()> {
        self.store(MENU_CACHE, menu)
    }

    pub fn load_menu(&self) -> Option<Classified> {
        self.load(MENU_CACHE)
    }

    pub fn store_hours(&self, schedule: &WeeklySchedule) -> AppResult<()> {
        self.store(HOURS_CACHE, schedule)
    }

    pub fn load_hours(&self) -> Option<WeeklySchedule> {
        self.load(HOURS_CACHE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classifier::classify;
    use crate::models::rows::RawRow;
    use std::env;

    fn temp_cache(name: &str) -> Cache {
        let dir = env::temp_dir().join(format!("menuboard_cache_{name}"));
        fs::remove_dir_all(&dir).ok();
        Cache::new(dir)
    }

    #[test]
    fn menu_round_trips_through_disk() {
        let cache = temp_cache("menu");
        let menu = classify(&[RawRow {
            categoria: "Spritz".into(),
            nome: "Aperol Spritz".into(),
            prezzo: "6,00".into(),
            allergeni: "sedano".into(),
            ..Default::default()
        }]);
        cache.store_menu(&menu).unwrap();
        assert_eq!(cache.load_menu(), Some(menu));
    }

    #[test]
    fn missing_and_corrupt_are_misses() {
        let cache = temp_cache("corrupt");
        assert!(cache.load_hours().is_none());
        fs::create_dir_all(&cache.dir).unwrap();
        fs::write(cache.path(HOURS_CACHE), "{ not json").unwrap();
        assert!(cache.load_hours().is_none());
    }
}
