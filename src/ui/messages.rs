use ansi_term::{Colour, Style};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_BANNER: &str = "📣";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Blue.bold().paint(ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Green.bold().paint(ICON_OK), msg);
}

/// Warnings go to stderr so piped menu output stays clean.
pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Colour::Yellow.bold().paint(ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Colour::Red.bold().paint(ICON_ERR), msg);
}

/// Announcement banner shown above the menu.
pub fn banner_line(msg: &str) -> String {
    let style = Style::new().on(Colour::Yellow).fg(Colour::Black).bold();
    format!("{} {}", ICON_BANNER, style.paint(format!(" {msg} ")))
}

/// Optional: formatted section header
pub fn header<T: fmt::Display>(msg: T) -> String {
    format!("{}", Colour::Blue.bold().paint(format!("====================== {msg}")))
}
