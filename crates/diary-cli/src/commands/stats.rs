//! Yearly statistics: entry days, busiest month, top tags and the
//! per-month pie chart.

use serde::Serialize;

use diary_core::chart::{pie_slices, PieSlice};
use diary_core::stats::YearStats;

use crate::app::AppContext;
use crate::cli::StatsArgs;
use crate::helpers::resolve_year;
use crate::output::print_json;
use crate::ui::{header, kv, print, simple_table, Column, UiContext};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsReport<'a> {
    year: i32,
    #[serde(flatten)]
    stats: &'a YearStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pie: Option<Vec<PieSlice>>,
}

pub async fn handle_stats(ctx: &AppContext<'_>, args: &StatsArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(&args.output);
    let year = resolve_year(args.year);
    let store = ctx.open_store()?;
    let stats = store.year_stats(year).await;
    let pie = args.pie.then(|| pie_slices(&stats.month_counts));

    if ui.mode.is_json() {
        return print_json(&StatsReport {
            year,
            stats: &stats,
            pie,
        });
    }

    let year_label = year.to_string();
    if !ctx.quiet() {
        print(&ui, &header(&ui, "stats", Some(year_label.as_str())));
    }
    print(&ui, &kv(&ui, "Days", &stats.days_with_entries.to_string()));
    print(&ui, &kv(&ui, "Entries", &stats.total_entries().to_string()));
    print(&ui, &kv(&ui, "Top Month", &month_label(stats.top_month)));
    print(&ui, &kv(&ui, "Top Tags", &top_tags_label(&stats)));

    if !ctx.quiet() {
        print_month_table(&ui, &stats);
    }
    if let Some(slices) = pie {
        print_pie(&ui, &slices);
    }
    Ok(())
}

fn month_label(month: Option<u32>) -> String {
    match month {
        Some(m @ 1..=12) => MONTH_NAMES[(m - 1) as usize].to_string(),
        _ => "-".to_string(),
    }
}

fn top_tags_label(stats: &YearStats) -> String {
    if stats.top_tags.is_empty() {
        return "-".to_string();
    }
    stats
        .top_tags
        .iter()
        .map(|t| format!("#{} {} ({})", t.rank, t.tag, t.count))
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_month_table(ui: &UiContext, stats: &YearStats) {
    let total = stats.total_entries();
    let rows: Vec<Vec<String>> = (1..=12u32)
        .map(|month| {
            let count = stats.month_count(month);
            vec![
                MONTH_NAMES[(month - 1) as usize].to_string(),
                count.to_string(),
                bar(count, total),
            ]
        })
        .collect();
    let columns = [Column::new("MONTH"), Column::new("ENTRIES"), Column::new("")];
    println!();
    println!("{}", simple_table(ui, &columns, &rows));
}

fn print_pie(ui: &UiContext, slices: &[PieSlice]) {
    let rows: Vec<Vec<String>> = slices
        .iter()
        .map(|s| {
            vec![
                month_label(Some(s.month)),
                s.color.to_string(),
                format!("{:.1}%", s.share * 100.0),
                s.path.clone(),
            ]
        })
        .collect();
    let columns = [
        Column::new("MONTH"),
        Column::new("COLOR"),
        Column::new("SHARE"),
        Column::new("PATH"),
    ];
    println!();
    println!("{}", simple_table(ui, &columns, &rows));
}

/// Proportional bar, twenty cells wide at 100%.
fn bar(count: u32, total: u32) -> String {
    if total == 0 || count == 0 {
        return String::new();
    }
    let cells = ((count as f64 / total as f64) * 20.0).round().max(1.0) as usize;
    "#".repeat(cells)
}
