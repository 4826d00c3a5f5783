use super::board_with_hours;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::render::status_line;
use crate::utils::time::parse_local_timestamp;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { at, offline } = cmd {
        let when = match at {
            Some(s) => parse_local_timestamp(s)?,
            None => Local::now().naive_local(),
        };

        let board = board_with_hours(cfg, *offline);
        let open = board.is_open_at(&when);
        println!("{}  ({})", status_line(open), when.format("%a %d/%m %H:%M"));
    }
    Ok(())
}
