//! The menu board context: owns the published catalog and schedule and
//! drives cache restore → fetch → classify/parse → publish → cache store.

use crate::cache::Cache;
use crate::config::Config;
use crate::core::classifier::classify;
use crate::core::refresh::Refresher;
use crate::core::schedule::{is_open, parse_weekly_hours};
use crate::errors::{AppError, AppResult};
use crate::models::catalog::Classified;
use crate::models::schedule::WeeklySchedule;
use crate::source;
use chrono::NaiveDateTime;
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct Board {
    pub menu: Refresher<Classified>,
    pub hours: Refresher<WeeklySchedule>,
    cache: Cache,
    menu_source: String,
    hours_source: Option<String>,
    timeout: Duration,
}

impl Board {
    /// Restore whatever the cache holds; the schedule falls back to
    /// 07:00–24:00 every day when nothing was ever fetched.
    pub fn open(cfg: &Config) -> Self {
        let cache = Cache::new(&cfg.cache_dir);
        let mut menu = Refresher::new("menu", Classified::default());
        let mut hours = Refresher::new("hours", WeeklySchedule::fallback());

        if let Some(cached) = cache.load_menu() {
            debug!(items = cached.item_count(), "menu restored from cache");
            menu.restore(cached);
        }
        if let Some(cached) = cache.load_hours() {
            debug!("hours restored from cache");
            hours.restore(cached);
        }

        Self {
            menu,
            hours,
            cache,
            menu_source: cfg.menu_source.clone(),
            hours_source: cfg.hours_source.clone(),
            timeout: Duration::from_secs(cfg.http_timeout_secs),
        }
    }

    /// Fetch and classify the menu. On failure the current catalog stays.
    pub fn refresh_menu(&mut self) -> AppResult<&Classified> {
        let src = self.menu_source.clone();
        let timeout = self.timeout;
        let published = self
            .menu
            .refresh(|| source::load_menu(&src, timeout), classify)?;
        if let Err(e) = self.cache.store_menu(published) {
            warn!(error = %e, "menu cache not written, serving fresh data anyway");
        }
        info!(items = published.item_count(), "menu refreshed");
        Ok(published)
    }

    /// Fetch and parse the hours. Without an hours source nothing changes.
    pub fn refresh_hours(&mut self) -> AppResult<&WeeklySchedule> {
        let Some(src) = self.hours_source.clone() else {
            return Err(AppError::Source("no hours source configured".into()));
        };
        let timeout = self.timeout;
        let published = self
            .hours
            .refresh(|| source::load_hours(&src, timeout), parse_weekly_hours)?;
        if let Err(e) = self.cache.store_hours(published) {
            warn!(error = %e, "hours cache not written, serving fresh data anyway");
        }
        info!(intervals = published.interval_count(), "hours refreshed");
        Ok(published)
    }

    pub fn has_hours_source(&self) -> bool {
        self.hours_source.is_some()
    }

    pub fn catalog(&self) -> &Classified {
        self.menu.current()
    }

    pub fn schedule(&self) -> &WeeklySchedule {
        self.hours.current()
    }

    pub fn is_open_at(&self, at: &NaiveDateTime) -> bool {
        is_open(self.schedule(), at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_config(name: &str, menu_csv: &str, hours_csv: Option<&str>) -> Config {
        let dir = std::env::temp_dir().join(format!("menuboard_board_{name}"));
        fs::remove_dir_all(&dir).ok();
        fs::create_dir_all(&dir).unwrap();
        let menu_path = dir.join("menu.csv");
        fs::write(&menu_path, menu_csv).unwrap();
        let hours_source = hours_csv.map(|h| {
            let p = dir.join("orari.csv");
            fs::write(&p, h).unwrap();
            p.to_string_lossy().to_string()
        });
        Config {
            menu_source: menu_path.to_string_lossy().to_string(),
            hours_source,
            cache_dir: dir.join("cache").to_string_lossy().to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn refresh_then_reopen_from_cache() {
        let cfg = temp_config(
            "reopen",
            "categoria,nome,prezzo,descrizione,allergeni,tag,disponibile\nCaffè,Espresso,\"1,20\",,,,\n",
            Some("day,start,end\nlunedì,CHIUSO,CHIUSO\nmartedì,07:00,20:00\n"),
        );
        let mut board = Board::open(&cfg);
        board.refresh_menu().unwrap();
        board.refresh_hours().unwrap();

        // the source goes away: the cached copy is still served
        fs::remove_file(&cfg.menu_source).unwrap();
        let mut again = Board::open(&cfg);
        assert_eq!(again.catalog().item_count(), 1);
        assert!(again.schedule().day(1).is_empty());
        assert!(again.refresh_menu().is_err());
        assert_eq!(again.catalog().item_count(), 1);
    }

    #[test]
    fn unwritable_cache_does_not_fail_refresh() {
        let mut cfg = temp_config(
            "unwritable",
            "categoria,nome,prezzo,descrizione,allergeni,tag,disponibile\nBibite,Acqua,\"1,00\",,,,\n",
            Some("day,start,end\nsabato,07:00,24:00\n"),
        );
        // a regular file where the cache directory should be
        let blocker = std::path::Path::new(&cfg.menu_source).with_file_name("not_a_dir");
        fs::write(&blocker, "x").unwrap();
        cfg.cache_dir = blocker.to_string_lossy().to_string();

        let mut board = Board::open(&cfg);
        assert_eq!(board.refresh_menu().unwrap().item_count(), 1);
        assert_eq!(board.refresh_hours().unwrap().day(6).len(), 1);
        assert_eq!(board.catalog().item_count(), 1);
    }

    #[test]
    fn no_cache_no_hours_uses_fallback() {
        let cfg = temp_config(
            "fallback",
            "categoria,nome,prezzo,descrizione,allergeni,tag,disponibile\n",
            None,
        );
        let mut board = Board::open(&cfg);
        assert_eq!(board.schedule(), &WeeklySchedule::fallback());
        assert!(board.refresh_hours().is_err());
        board.refresh_menu().unwrap();
        assert!(board.catalog().is_empty());
    }
}
