//! Plain-text rendering of items for the terminal.
//!
//! Tables are compact: a header row, a dashed rule under each column, then
//! one left-aligned row per item.

use crate::Item;
use crate::core::filter::WeekBuckets;

const HEADERS: [&str; 5] = ["Index", "Day", "Date", "Time", "Message"];
const COLUMN_GAP: &str = "  ";

/// Renders items as a table with columns `Index | Day | Date | Time | Message`.
///
/// An empty slice renders as `No items.`
///
/// ```
/// use quarterlog::Item;
/// use quarterlog::display::render_table;
/// use chrono::NaiveDate;
///
/// let at = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let table = render_table(&[Item::at("standup", at)]);
///
/// assert!(table.lines().next().unwrap().starts_with("Index"));
/// assert!(table.contains("05/01/23  09:00 AM  standup"));
/// ```
pub fn render_table(items: &[Item]) -> String {
    if items.is_empty() {
        return "No items.".to_string();
    }

    let rows: Vec<[String; 5]> = items
        .iter()
        .map(|item| {
            [
                item.index().to_string(),
                item.weekday_short(),
                item.display_date(),
                item.display_time(),
                item.message().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&HEADERS, &widths));
    lines.push(format_row(&widths.map(|w| "-".repeat(w)), &widths));
    for row in &rows {
        lines.push(format_row(row, &widths));
    }

    lines.join("\n")
}

/// Renders a week, one section per weekday from Sunday to Saturday.
///
/// Days without items print `No <Day> items.`
pub fn render_week(week: &WeekBuckets) -> String {
    week.iter()
        .map(|(name, items)| {
            if items.is_empty() {
                format!("No {name} items.")
            } else {
                format!("{name}\n{}", render_table(items))
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| {
            let cell = cell.as_ref();
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);

    line.trim_end().to_string()
}
