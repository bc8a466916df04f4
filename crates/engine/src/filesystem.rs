use crate::config::WalkOptions;
use crate::error::{EngineError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Build the file-name matcher for the configured extensions (`*.htm`, ...).
///
/// # Errors
/// Returns an error if an extension produces an invalid glob.
pub fn extension_matcher(extensions: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for ext in extensions {
        let ext = ext.trim().trim_start_matches('.');
        if ext.is_empty() {
            continue;
        }
        builder.add(Glob::new(&format!("*.{ext}"))?);
    }
    Ok(builder.build()?)
}

/// Recursive, sorted walk returning every matching file under the root.
///
/// No hidden-file or ignore-file filtering is applied. Any walk error aborts
/// the enumeration.
///
/// # Errors
/// Returns an error if the root is missing, is not a directory, or a
/// directory beneath it cannot be read.
pub fn collect_files(options: &WalkOptions) -> Result<Vec<PathBuf>> {
    let root = &options.root;
    if !root.exists() {
        return Err(EngineError::RootNotFound(root.clone()));
    }
    if !root.is_dir() {
        return Err(EngineError::RootNotDirectory(root.clone()));
    }

    let matcher = extension_matcher(&options.extensions)?;

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();
        if !is_regular_or_linked_file(&entry) {
            continue;
        }
        if path
            .file_name()
            .is_some_and(|name| matcher.is_match(Path::new(name)))
        {
            files.push(relative_to_cwd(root, path));
        }
    }

    log::debug!("{} matching files under {}", files.len(), root.display());
    Ok(files)
}

/// Regular files, plus symlinks that resolve to a file when links are not followed.
fn is_regular_or_linked_file(entry: &ignore::DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| {
        ft.is_file() || (ft.is_symlink() && entry.path().is_file())
    })
}

/// Drop the leading `./` the walker adds when the root is the current directory.
fn relative_to_cwd(root: &Path, path: &Path) -> PathBuf {
    if root == Path::new(".") {
        path.strip_prefix(".").unwrap_or(path).to_path_buf()
    } else {
        path.to_path_buf()
    }
}
