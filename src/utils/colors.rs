/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Sold-out items are greyed out.
pub fn dim_if(value: &str, dim: bool) -> String {
    if dim {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// "Novità" and "Top" badges.
pub fn color_for_tag(tag: &str) -> &'static str {
    match tag {
        "new" => CYAN,
        "hot" => MAGENTA,
        _ => RESET,
    }
}
