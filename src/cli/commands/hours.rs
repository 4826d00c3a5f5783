use super::board_with_hours;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::schedule::weekday_index;
use crate::render::{hours_table, status_line};
use chrono::{Datelike, Local};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Hours { offline } = cmd {
        let board = board_with_hours(cfg, *offline);
        let now = Local::now().naive_local();

        println!("🕒 Orari di apertura\n");
        print!(
            "{}",
            hours_table(board.schedule(), Some(weekday_index(now.weekday())))
        );
        println!("\n{}", status_line(board.is_open_at(&now)));
    }
    Ok(())
}
