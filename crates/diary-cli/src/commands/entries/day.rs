use diary_core::calendar::date_key;

use crate::app::AppContext;
use crate::cli::DayArgs;
use crate::helpers::resolve_date;
use crate::output::print_entry_list;
use crate::ui::format::date_label;
use crate::ui::{header, print};

pub async fn handle_day(ctx: &AppContext<'_>, args: &DayArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(&args.output);
    let date = resolve_date(args.date.as_deref())?;
    let store = ctx.open_store()?;

    let entries = store.entries_on(date).await;
    if !ctx.quiet() && ui.mode.is_pretty() {
        print(&ui, &header(&ui, "day", Some(date_label(&date_key(date)).as_str())));
    }
    print_entry_list(&ui, &entries, ctx.preview_chars()?)
}
