use crate::app::{not_found_entry, AppContext};
use crate::cli::ShowArgs;
use crate::output::print_entry;

pub async fn handle_show(ctx: &AppContext<'_>, args: &ShowArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(&args.output);
    let store = ctx.open_store()?;

    let entry = store
        .get_by_id(args.id.trim())
        .await
        .ok_or_else(|| not_found_entry(&args.id))?;
    print_entry(&ui, &entry, ctx.quiet())
}
