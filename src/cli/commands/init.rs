use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (left alone when it already exists)
///  - the cache directory
pub fn handle(cli: &Cli) -> AppResult<()> {
    let written = Config::init_all(cli.test)?;
    let cfg = Config::load()?;

    println!("⚙️  Initializing menuboard…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Cache dir   : {}", cfg.cache_dir);

    if written {
        success("Configuration file created");
        info("Set menu_source (and hours_source) in the configuration file");
    } else {
        info("Configuration file already present, not overwritten");
    }
    Ok(())
}
