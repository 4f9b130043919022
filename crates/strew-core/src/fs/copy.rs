//! Recursive tree copying and idempotent directory creation.

use std::fs;
use std::path::Path;

use anyhow::Context;

/// Copy `src` into `dst`, preserving relative structure.
///
/// If `src` is a directory, `dst` is created (recursively) when missing and
/// every child entry is copied under it by name. If `src` is a file, its full
/// byte content is copied to `dst`, overwriting any existing destination file
/// unconditionally. No metadata is transformed; content is copied as-is.
pub fn copy_tree(src: &Path, dst: &Path) -> anyhow::Result<()> {
    let meta = fs::metadata(src)
        .with_context(|| format!("Failed to stat source path: {}", src.display()))?;

    if meta.is_dir() {
        fs::create_dir_all(dst)
            .with_context(|| format!("Failed to create directory: {}", dst.display()))?;
        copy_dir_entries(src, dst)
    } else if meta.is_file() {
        fs::copy(src, dst).with_context(|| {
            format!(
                "Failed to copy file from {} to {}",
                src.display(),
                dst.display()
            )
        })?;
        Ok(())
    } else {
        anyhow::bail!("Unsupported filesystem entry type at {}", src.display());
    }
}

fn copy_dir_entries(src: &Path, dst: &Path) -> anyhow::Result<()> {
    for entry in
        fs::read_dir(src).with_context(|| format!("Failed to read dir: {}", src.display()))?
    {
        let entry =
            entry.with_context(|| format!("Failed to read dir entry: {}", src.display()))?;
        let ty = entry
            .file_type()
            .with_context(|| format!("Failed to stat dir entry: {}", entry.path().display()))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());

        if ty.is_dir() {
            fs::create_dir_all(&to)
                .with_context(|| format!("Failed to create directory: {}", to.display()))?;
            copy_dir_entries(&from, &to)?;
        } else if ty.is_file() {
            fs::copy(&from, &to).with_context(|| {
                format!(
                    "Failed to copy file from {} to {}",
                    from.display(),
                    to.display()
                )
            })?;
        } else {
            anyhow::bail!("Unsupported filesystem entry type at {}", from.display());
        }
    }
    Ok(())
}

/// Create `dir` (and any missing parents) if it does not already exist.
///
/// Returns `true` when the directory was created by this call, `false` when
/// it already existed. A second call on the same path is not an error.
pub fn ensure_dir(dir: &Path) -> anyhow::Result<bool> {
    if dir.exists() {
        return Ok(false);
    }
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    Ok(true)
}
