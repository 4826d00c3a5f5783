use clap::{Parser, Subcommand};

/// Command-line interface definition for menuboard
#[derive(Parser)]
#[command(
    name = "menuboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Menu board for a small venue: shows the published menu and whether the venue is open",
    long_about = None
)]
pub struct Cli {
    /// Override the menu source (CSV file path or http(s) URL)
    #[arg(global = true, long = "menu-source")]
    pub menu_source: Option<String>,

    /// Override the opening-hours source (CSV file path or http(s) URL)
    #[arg(global = true, long = "hours-source")]
    pub hours_source: Option<String>,

    /// Override the cache directory
    #[arg(global = true, long = "cache-dir")]
    pub cache_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and cache directory
    Init,

    /// Show the configuration
    Config {
        /// Print the effective configuration (file + command-line overrides)
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Show the menu, one category or all of them
    Menu {
        /// Category key: calde, fredde, aperitivi, alcolici, food, dolci, altro
        category: Option<String>,

        /// Compact rendering: one line per item
        #[arg(long)]
        lite: bool,

        /// List the categories that currently have items
        #[arg(long, conflicts_with = "category")]
        list: bool,

        /// Use the cached menu only, do not fetch
        #[arg(long)]
        offline: bool,
    },

    /// Search items by name across every category
    Search {
        /// Text to look for (case-insensitive)
        query: String,

        /// Compact rendering: one line per item
        #[arg(long)]
        lite: bool,

        /// Use the cached menu only, do not fetch
        #[arg(long)]
        offline: bool,
    },

    /// Tell whether the venue is open
    Status {
        /// Local time to check instead of now ("YYYY-MM-DD HH:MM")
        #[arg(long, value_name = "TIME")]
        at: Option<String>,

        /// Use the cached hours only, do not fetch
        #[arg(long)]
        offline: bool,
    },

    /// Print the weekly opening hours
    Hours {
        /// Use the cached hours only, do not fetch
        #[arg(long)]
        offline: bool,
    },

    /// Re-check the open status on a fixed cadence
    Watch {
        /// Stop after this many checks (default: run until interrupted)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        ticks: Option<u64>,

        /// Seconds between checks (default: status_interval_secs from config)
        #[arg(long)]
        interval: Option<u64>,
    },

    /// Fetch both sources and update the cache
    Refresh,
}
