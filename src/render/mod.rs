//! Text rendering of the catalog, search results, status and hours.
//! Everything returns a String; printing is up to the command handlers.

use crate::core::browse::{is_redundant_heading, items_in, subcategories};
use crate::core::schedule::day_name;
use crate::models::catalog::{CategoryBucket, Classified};
use crate::models::category::Category;
use crate::models::menu_item::MenuItem;
use crate::models::schedule::{TimeInterval, WeeklySchedule};
use crate::ui::messages::{banner_line, header};
use crate::utils::colors::{RESET, color_for_tag, dim_if};
use crate::utils::formatting::{bold, italic, pad_right, visible_width};
use crate::utils::format_price;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minute;
use ansi_term::Colour;

const LINE_WIDTH: usize = 56;
const INDENT: &str = "    ";

/// Monday first, Sunday last.
const WEEK_ORDER: [usize; 7] = [1, 2, 3, 4, 5, 6, 0];

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// One line per item, no description or allergens.
    pub lite: bool,
}

fn item_head(item: &MenuItem) -> String {
    let mut head = item.name.clone();
    if let Some(label) = item.tag_label() {
        head.push_str(&format!(" {}[{label}]{RESET}", color_for_tag(&item.tag)));
    }
    if item.sold_out {
        head.push_str(" (esaurito)");
    }
    head
}

pub fn render_item(item: &MenuItem, opts: RenderOptions) -> String {
    let head = item_head(item);
    let price = format_price(item.price);
    let gap = LINE_WIDTH.saturating_sub(visible_width(&head) + visible_width(&price));
    let filler = if opts.lite { "." } else { " " };
    let mut out = dim_if(&format!("{head} {}{price}", filler.repeat(gap)), item.sold_out);
    out.push('\n');

    if opts.lite {
        return out;
    }

    if !item.description.is_empty() {
        for line in textwrap::wrap(&item.description, LINE_WIDTH - INDENT.len()) {
            out.push_str(&format!("{INDENT}{}\n", italic(&line)));
        }
    }

    let allergens: Vec<String> = item
        .known_allergens()
        .iter()
        .map(|a| format!("{} {}", a.icon(), a.label()))
        .collect();
    if !allergens.is_empty() {
        out.push_str(&format!("{INDENT}{}\n", allergens.join(" · ")));
    }
    out
}

fn render_items<'a>(items: impl IntoIterator<Item = &'a MenuItem>, opts: RenderOptions) -> String {
    items.into_iter().map(|i| render_item(i, opts)).collect()
}

/// One category: subcategory headings only when the bucket mixes labels.
pub fn render_category(cat: Category, bucket: &CategoryBucket, opts: RenderOptions) -> String {
    let mut out = format!("{}\n\n", header(&bucket.title));
    let labels = subcategories(bucket);

    if labels.len() > 1 {
        for label in labels {
            if !is_redundant_heading(cat, bucket, label) {
                out.push_str(&format!("{}\n", bold(label)));
            }
            out.push_str(&render_items(items_in(bucket, label), opts));
            out.push('\n');
        }
    } else {
        out.push_str(&render_items(&bucket.items, opts));
        out.push('\n');
    }
    out
}

/// Banner (if any) followed by one category, or every category in tab order.
pub fn render_menu(menu: &Classified, only: Option<Category>, opts: RenderOptions) -> String {
    let mut out = String::new();
    if let Some(text) = &menu.announcement {
        out.push_str(&banner_line(text));
        out.push_str("\n\n");
    }

    let mut shown = 0;
    for (cat, bucket) in &menu.catalog {
        if only.is_some_and(|c| c != *cat) {
            continue;
        }
        out.push_str(&render_category(*cat, bucket, opts));
        shown += 1;
    }

    if shown == 0 {
        out.push_str("Nessun prodotto disponibile.\n");
    }
    out
}

pub fn render_search(results: &[&MenuItem], opts: RenderOptions) -> String {
    let mut out = format!("{}\n\n", header(format!("Risultati ricerca ({})", results.len())));
    out.push_str(&render_items(results.iter().copied(), opts));
    out
}

pub fn status_line(open: bool) -> String {
    if open {
        format!("{} Aperto", Colour::Green.bold().paint("●"))
    } else {
        format!("{} Chiuso", Colour::Red.bold().paint("●"))
    }
}

fn describe_intervals(intervals: &[TimeInterval]) -> String {
    if intervals.is_empty() {
        return "Chiuso".to_string();
    }
    intervals
        .iter()
        .map(|i| format!("{}–{}", format_minute(i.start), format_minute(i.end)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Day × interval table, Monday to Sunday; `today` is highlighted.
pub fn hours_table(schedule: &WeeklySchedule, today: Option<usize>) -> String {
    let mut table = Table::new(vec![Column::new("Giorno"), Column::new("Orari")]);
    for idx in WEEK_ORDER {
        let name = day_name(idx);
        let name = if today == Some(idx) {
            bold(name)
        } else {
            name.to_string()
        };
        table.add_row(vec![name, describe_intervals(schedule.day(idx))]);
    }
    table.render()
}

/// Plain label for a category (used by `menu --list`).
pub fn category_label(cat: Category) -> String {
    format!("{} {}", pad_right(cat.key(), 10), cat.title())
}
