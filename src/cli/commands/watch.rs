use super::board_with_hours;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::render::status_line;
use chrono::Local;
use std::thread;
use std::time::Duration;

/// Re-evaluate the open status on a fixed cadence. Open/closed is a pure
/// function of the clock, so every tick is a fresh `is_open` call.
/// A line is printed on the first tick and whenever the status flips.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { ticks, interval } = cmd {
        let secs = interval.unwrap_or(cfg.status_interval_secs);
        if secs == 0 && ticks.is_none() {
            return Err(AppError::Config(
                "status interval must be at least 1 second".into(),
            ));
        }

        let board = board_with_hours(cfg, false);
        let mut last: Option<bool> = None;
        let mut done = 0u64;

        loop {
            let now = Local::now().naive_local();
            let open = board.is_open_at(&now);
            if last != Some(open) {
                println!("[{}] {}", now.format("%H:%M"), status_line(open));
                last = Some(open);
            }

            done += 1;
            if ticks.is_some_and(|t| done >= t) {
                break;
            }
            thread::sleep(Duration::from_secs(secs));
        }
    }
    Ok(())
}
