use crate::app::{not_found_entry, AppContext};
use crate::cli::DeleteArgs;
use crate::ui::receipt;

pub async fn handle_delete(ctx: &AppContext<'_>, args: &DeleteArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let id = args.id.trim();

    if !store.delete(id).await? {
        return Err(not_found_entry(id).into());
    }
    if !ctx.quiet() {
        let ui = ctx.ui(&Default::default());
        println!("{}", receipt(&ui, "Deleted entry", &[("ID", id)]));
    }
    Ok(())
}
