use super::board_with_menu;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::render::{RenderOptions, category_label, render_menu};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Menu {
        category,
        lite,
        list,
        offline,
    } = cmd
    {
        let only = category
            .as_deref()
            .map(|c| Category::from_key(c).ok_or_else(|| AppError::InvalidCategory(c.to_string())))
            .transpose()?;

        let board = board_with_menu(cfg, *offline);
        let menu = board.catalog();

        if *list {
            for (cat, bucket) in &menu.catalog {
                println!("{} ({})", category_label(*cat), bucket.items.len());
            }
            return Ok(());
        }

        let opts = RenderOptions {
            lite: *lite || cfg.lite_mode,
        };
        print!("{}", render_menu(menu, only, opts));
    }
    Ok(())
}
