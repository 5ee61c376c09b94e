//! Application context for the Diary CLI.
//!
//! Bundles the parsed CLI arguments with the lazily-loaded config and the
//! key-value backend shared by the entry store and the paid flag.

use std::path::PathBuf;
use std::sync::Arc;

use once_cell::unsync::OnceCell;

use diary_core::purchase::PaidFlag;
use diary_core::{EntryStore, FileStore};

use crate::cli::{Cli, OutputArgs};
use crate::config::DiaryConfig;
use crate::constants::DEFAULT_PREVIEW_CHARS;
use crate::ui::UiContext;

use super::resolver::{load_config, resolve_store_path};

pub type Store = EntryStore<Arc<FileStore>>;

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<DiaryConfig>>,
    backend: OnceCell<Arc<FileStore>>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
            backend: OnceCell::new(),
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The `--store`/`DIARY_STORE` value, if given.
    pub fn store_flag(&self) -> Option<&str> {
        self.cli.store.as_deref().filter(|p| !p.trim().is_empty())
    }

    /// UI context for a command's output flags.
    pub fn ui(&self, output: &OutputArgs) -> UiContext {
        UiContext::from_env(
            output.json,
            output.format.as_deref(),
            self.cli.no_color,
            self.cli.ascii,
        )
    }

    /// The config file contents, loaded once. `None` when no config exists.
    pub fn config(&self) -> anyhow::Result<Option<&DiaryConfig>> {
        Ok(self.config.get_or_try_init(load_config)?.as_ref())
    }

    pub fn preview_chars(&self) -> anyhow::Result<usize> {
        Ok(self
            .config()?
            .map(DiaryConfig::preview_chars)
            .unwrap_or(DEFAULT_PREVIEW_CHARS))
    }

    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        resolve_store_path(self.store_flag(), self.config()?)
    }

    fn backend(&self) -> anyhow::Result<Arc<FileStore>> {
        let backend = self.backend.get_or_try_init(|| -> anyhow::Result<_> {
            let path = self.store_path()?;
            tracing::debug!(path = %path.display(), "opening store");
            Ok(Arc::new(FileStore::new(path)))
        })?;
        Ok(Arc::clone(backend))
    }

    pub fn open_store(&self) -> anyhow::Result<Store> {
        Ok(EntryStore::new(self.backend()?))
    }

    pub fn paid_flag(&self) -> anyhow::Result<PaidFlag<Arc<FileStore>>> {
        Ok(PaidFlag::new(self.backend()?))
    }
}
