use super::board_with_menu;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::browse::search;
use crate::errors::AppResult;
use crate::render::{RenderOptions, render_search};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search {
        query,
        lite,
        offline,
    } = cmd
    {
        let board = board_with_menu(cfg, *offline);
        let results = search(&board.catalog().catalog, query);
        let opts = RenderOptions {
            lite: *lite || cfg.lite_mode,
        };
        print!("{}", render_search(&results, opts));
    }
    Ok(())
}
