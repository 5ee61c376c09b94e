//! Filesystem utilities for atomic writes.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

/// Write `contents` to `destination` through a sibling temp file and a rename.
///
/// Readers observe either the previous file or the new one, never a torn write.
/// Parent directories are created as needed.
pub async fn write_atomic(destination: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    let temp_path = temp_sibling(destination);
    fs::write(&temp_path, contents).await?;
    rename_with_fallback(&temp_path, destination).await
}

/// Rename a file, with fallback for platforms where rename fails if target exists.
///
/// If the rename ultimately fails, the temp file is cleaned up.
pub async fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination).await {
        let _ = fs::remove_file(destination).await;
        if let Err(retry_err) = fs::rename(temp_path, destination).await {
            let _ = fs::remove_file(temp_path).await;
            return Err(io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            ));
        }
    }
    Ok(())
}

fn temp_sibling(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".{}.tmp", std::process::id()));
    destination.with_file_name(name)
}
