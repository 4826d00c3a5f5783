pub mod config;
pub mod hours;
pub mod init;
pub mod menu;
pub mod refresh;
pub mod search;
pub mod status;
pub mod watch;

use crate::board::Board;
use crate::config::Config;
use crate::ui::messages::warning;

/// Open the board from cache and, unless offline, try to refresh the menu.
/// A failed fetch is reported and the cached (or empty) menu is kept.
pub(crate) fn board_with_menu(cfg: &Config, offline: bool) -> Board {
    let mut board = Board::open(cfg);
    if !offline && let Err(e) = board.refresh_menu() {
        warning(format!("Menu non aggiornato ({e}), uso i dati salvati"));
    }
    board
}

/// Same for the hours; without an hours source the cached or default
/// schedule is used silently.
pub(crate) fn board_with_hours(cfg: &Config, offline: bool) -> Board {
    let mut board = Board::open(cfg);
    if !offline
        && board.has_hours_source()
        && let Err(e) = board.refresh_hours()
    {
        warning(format!("Orari non aggiornati ({e}), uso i dati salvati"));
    }
    board
}
