use std::path::PathBuf;

use diary_core::FileStore;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_store_path, write_config, DiaryConfig};
use crate::errors::CliError;
use crate::ui::{hint, print, receipt};

pub async fn handle_init(ctx: &AppContext<'_>, args: &InitArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(&Default::default());
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nHint: Pass --force to overwrite it.",
            config_path.display()
        ))
        .into());
    }

    let store_path = match args.path.as_deref().or(ctx.store_flag()) {
        Some(path) => PathBuf::from(path),
        None => default_store_path()?,
    };

    FileStore::new(&store_path).ensure_exists().await?;
    write_config(
        &config_path,
        &DiaryConfig::new(&store_path, args.preview_chars),
    )?;
    tracing::info!(
        config = %config_path.display(),
        store = %store_path.display(),
        "initialized diary"
    );

    if !ctx.quiet() {
        let store_label = store_path.display().to_string();
        let config_label = config_path.display().to_string();
        print(
            &ui,
            &receipt(
                &ui,
                "Diary ready",
                &[("Store", store_label.as_str()), ("Config", config_label.as_str())],
            ),
        );
        if ui.mode.is_pretty() {
            print(&ui, &hint(&ui, "Write your first entry with `diary add --text \"...\"`."));
        }
    }
    Ok(())
}
