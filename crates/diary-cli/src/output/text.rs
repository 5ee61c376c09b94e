//! Text and table output for entries.

use diary_core::DiaryEntry;

use crate::ui::format::{date_label, preview, time_label};
use crate::ui::{kv, simple_table, Column, UiContext};

use super::json::print_json;

/// Print a single entry.
pub fn print_entry(ctx: &UiContext, entry: &DiaryEntry, quiet: bool) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        return print_json(entry);
    }
    if !quiet {
        println!("{}", kv(ctx, "ID", &entry.id));
        println!("{}", kv(ctx, "Date", &date_label(&entry.date)));
        println!("{}", kv(ctx, "Time", &time_label(entry.created_at)));
        if !entry.tags.is_empty() {
            println!("{}", kv(ctx, "Tags", &entry.tags.join(", ")));
        }
        for uri in &entry.image_uris {
            println!("{}", kv(ctx, "Image", uri));
        }
        println!();
    }
    println!("{}", entry.text);
    Ok(())
}

/// Print a list of entries with one-line previews.
pub fn print_entry_list(
    ctx: &UiContext,
    entries: &[DiaryEntry],
    preview_chars: usize,
) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        return print_json(entries);
    }
    if entries.is_empty() {
        if ctx.mode.is_pretty() {
            println!("No entries.");
        }
        return Ok(());
    }

    let columns = [
        Column::new("ID"),
        Column::new("DATE"),
        Column::new("TIME"),
        Column::new("TAGS"),
        Column::new("TEXT"),
    ];
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| {
            vec![
                entry.id.clone(),
                entry.date.clone(),
                time_label(entry.created_at),
                entry.tags.join(","),
                preview(&entry.text, preview_chars),
            ]
        })
        .collect();
    println!("{}", simple_table(ctx, &columns, &rows));
    Ok(())
}
