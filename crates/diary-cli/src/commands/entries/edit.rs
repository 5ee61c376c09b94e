use diary_core::draft::EntryDraft;

use crate::app::{not_found_entry, AppContext};
use crate::cli::EditArgs;
use crate::errors::CliError;
use crate::output::print_json;
use crate::ui::{print, receipt};

use super::add::{apply_images, apply_tags};

pub async fn handle_edit(ctx: &AppContext<'_>, args: &EditArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(&args.output);
    let nothing_to_do = args.text.is_none()
        && args.tag.is_empty()
        && args.image.is_empty()
        && !args.clear_tags
        && !args.clear_images;
    if nothing_to_do {
        return Err(CliError::invalid_input(
            "Nothing to change. Pass --text, --tag, --image, --clear-tags or --clear-images.",
        )
        .into());
    }

    let store = ctx.open_store()?;
    let id = args.id.trim();
    let existing = store
        .get_by_id(id)
        .await
        .ok_or_else(|| not_found_entry(id))?;

    let mut draft = EntryDraft::from_entry(&existing);
    if let Some(text) = &args.text {
        draft.set_text(text.clone());
    }
    if args.clear_tags {
        draft.clear_tags();
    }
    apply_tags(&ui, &mut draft, &args.tag);
    if args.clear_images {
        draft.clear_images();
    }
    apply_images(&ui, &mut draft, &args.image);
    if draft.is_blank() {
        return Err(CliError::invalid_input("Nothing to save: entry text is empty").into());
    }

    let updated = store
        .update(id, draft.into_update())
        .await?
        .ok_or_else(|| not_found_entry(id))?;

    if ui.mode.is_json() {
        return print_json(&updated);
    }
    if !ctx.quiet() {
        print(&ui, &receipt(&ui, "Updated entry", &[("ID", updated.id.as_str())]));
    }
    Ok(())
}
