use chrono::Datelike;

use crate::app::AppContext;
use crate::cli::OnThisDayArgs;
use crate::helpers::today;
use crate::output::print_entry_list;
use crate::ui::{header, print};

pub async fn handle_on_this_day(ctx: &AppContext<'_>, args: &OnThisDayArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(&args.output);
    let now = today();
    let month = args.month.unwrap_or_else(|| now.month());
    let day = args.day.unwrap_or_else(|| now.day());

    let store = ctx.open_store()?;
    let entries = store.entries_by_month_day(month, day).await;
    if !ctx.quiet() && ui.mode.is_pretty() {
        let label = format!("{:02}-{:02}", month, day);
        print(&ui, &header(&ui, "on this day", Some(label.as_str())));
    }
    print_entry_list(&ui, &entries, ctx.preview_chars()?)
}
