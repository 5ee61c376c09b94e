use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::errors::CliError;
use crate::output::print_entry_list;
use crate::ui::{header, hint, print};

pub async fn handle_search(ctx: &AppContext<'_>, args: &SearchArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(&args.output);
    let tag = args.tag.trim();
    if tag.is_empty() {
        return Err(CliError::invalid_input("Tag must not be empty").into());
    }

    let store = ctx.open_store()?;
    let entries = store.entries_by_tag(tag).await;
    if !ctx.quiet() && ui.mode.is_pretty() {
        print(&ui, &header(&ui, "search", Some(tag)));
    }
    print_entry_list(&ui, &entries, ctx.preview_chars()?)?;
    if entries.is_empty() && !ctx.quiet() && ui.mode.is_pretty() {
        print(&ui, &hint(&ui, "Run `diary tags` to see tags in use."));
    }
    Ok(())
}
