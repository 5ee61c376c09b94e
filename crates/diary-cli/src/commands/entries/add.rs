use diary_core::calendar::date_key;
use diary_core::draft::{EntryDraft, TagRejection, MAX_IMAGES, MAX_TAGS};

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::errors::CliError;
use crate::helpers::resolve_date;
use crate::output::print_json;
use crate::ui::{badge, print, receipt, Badge, UiContext};

pub async fn handle_add(ctx: &AppContext<'_>, args: &AddArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(&args.output);
    let date = resolve_date(args.date.as_deref())?;

    let mut draft = EntryDraft::new();
    draft.set_text(args.text.clone());
    apply_tags(&ui, &mut draft, &args.tag);
    apply_images(&ui, &mut draft, &args.image);
    if draft.is_blank() {
        return Err(CliError::invalid_input("Nothing to save: entry text is empty").into());
    }

    let store = ctx.open_store()?;
    let entry = store.add(draft.into_new_entry(date_key(date))).await?;

    if ui.mode.is_json() {
        return print_json(&entry);
    }
    if !ctx.quiet() {
        print(
            &ui,
            &receipt(&ui, "Added entry", &[("ID", entry.id.as_str()), ("Date", entry.date.as_str())]),
        );
    } else {
        println!("{}", entry.id);
    }
    Ok(())
}

/// Add tags to a draft, warning about any that were skipped.
pub(crate) fn apply_tags(ui: &UiContext, draft: &mut EntryDraft, tags: &[String]) {
    for tag in tags {
        let reason = match draft.add_tag(tag) {
            Ok(()) => continue,
            Err(TagRejection::Blank) => continue,
            Err(TagRejection::Duplicate) => "duplicate".to_string(),
            Err(TagRejection::LimitReached) => format!("at most {} tags", MAX_TAGS),
        };
        eprintln!(
            "{}",
            badge(ui, Badge::Warn, &format!("Skipped tag \"{}\" ({})", tag.trim(), reason))
        );
    }
}

/// Attach images to a draft, warning when the limit drops some.
pub(crate) fn apply_images(ui: &UiContext, draft: &mut EntryDraft, images: &[String]) {
    if images.is_empty() {
        return;
    }
    let kept = draft.add_images(images.iter().cloned());
    if kept < images.len() {
        eprintln!(
            "{}",
            badge(
                ui,
                Badge::Warn,
                &format!(
                    "Kept {} of {} images (at most {})",
                    kept,
                    images.len(),
                    MAX_IMAGES
                ),
            )
        );
    }
}
