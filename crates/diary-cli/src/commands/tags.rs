use crate::app::AppContext;
use crate::cli::OutputArgs;
use crate::output::print_json;

pub async fn handle_tags(ctx: &AppContext<'_>, args: &OutputArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(args);
    let store = ctx.open_store()?;
    let tags = store.all_tags().await;

    if ui.mode.is_json() {
        return print_json(&tags);
    }
    if tags.is_empty() {
        if ui.mode.is_pretty() && !ctx.quiet() {
            println!("No tags yet.");
        }
        return Ok(());
    }
    for tag in &tags {
        println!("{}", tag);
    }
    Ok(())
}
