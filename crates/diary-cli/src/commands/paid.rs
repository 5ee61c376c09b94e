use serde_json::json;

use crate::app::AppContext;
use crate::cli::OutputArgs;
use crate::output::print_json;
use crate::ui::{badge, kv, print, Badge};

pub async fn handle_paid(ctx: &AppContext<'_>, args: &OutputArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(args);
    let paid = ctx.paid_flag()?.is_paid().await;

    if ui.mode.is_json() {
        return print_json(&json!({ "paid": paid }));
    }
    if ui.mode.is_pretty() && !ctx.quiet() {
        let (kind, message) = if paid {
            (Badge::Ok, "Ads removed")
        } else {
            (Badge::Info, "Ads enabled")
        };
        print(&ui, &badge(&ui, kind, message));
    } else {
        print(&ui, &kv(&ui, "Paid", if paid { "true" } else { "false" }));
    }
    Ok(())
}
