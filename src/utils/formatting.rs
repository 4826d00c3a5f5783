//! Formatting utilities used for terminal output.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap());

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

pub fn strip_ansi(s: &str) -> String {
    ANSI_ESCAPE.replace_all(s, "").into_owned()
}

/// Columns the string occupies on screen (ANSI codes excluded).
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{s}{}", " ".repeat(pad))
}

/// "€ 3,50". A price that could not be read shows as 0.
pub fn format_price(price: f64) -> String {
    let p = if price.is_finite() { price } else { 0.0 };
    format!("€ {:.2}", p).replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_has_comma_and_two_decimals() {
        assert_eq!(format_price(3.0), "€ 3,00");
        assert_eq!(format_price(12.5), "€ 12,50");
    }

    #[test]
    fn non_finite_price_shows_zero() {
        assert_eq!(format_price(f64::NAN), "€ 0,00");
        assert_eq!(format_price(f64::INFINITY), "€ 0,00");
    }

    #[test]
    fn width_ignores_colours_and_counts_accents_once() {
        assert_eq!(visible_width(&bold("Lunedì")), 6);
        assert_eq!(pad_right(&italic("Tè"), 4), format!("{}  ", italic("Tè")));
    }
}
