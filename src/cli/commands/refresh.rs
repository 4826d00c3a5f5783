use crate::board::Board;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success};

/// Fetch both feeds and update the cache. Fails only when nothing could be
/// refreshed at all.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut board = Board::open(cfg);
    let mut refreshed = 0;

    match board.refresh_menu() {
        Ok(menu) => {
            success(format!(
                "Menu: {} prodotti in {} categorie",
                menu.item_count(),
                menu.catalog.len()
            ));
            if let Some(text) = &menu.announcement {
                info(format!("Avviso: {text}"));
            }
            refreshed += 1;
        }
        Err(e) => error(format!("Menu: {e}")),
    }

    if board.has_hours_source() {
        match board.refresh_hours() {
            Ok(hours) => {
                success(format!("Orari: {} fasce orarie", hours.interval_count()));
                refreshed += 1;
            }
            Err(e) => error(format!("Orari: {e}")),
        }
    } else {
        info("Orari: nessuna sorgente configurata, uso 07:00–24:00");
    }

    if refreshed == 0 {
        return Err(AppError::Source("nothing could be refreshed".into()));
    }
    Ok(())
}
