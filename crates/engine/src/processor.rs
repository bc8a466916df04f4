use crate::charmap;
use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::progress::ProgressSink;
use crate::report::Conversion;
use std::fs;
use std::path::{Path, PathBuf};

/// Re-encode a single file into the mirrored tree.
///
/// Order of effects: read, decode, substitute, derive the output path,
/// notify `progress`, then write. Nothing is written on failure or dry run.
///
/// # Errors
/// Returns the first read, decode, path derivation, progress or write failure.
pub fn process_file(
    path: &Path,
    config: &Config,
    progress: &dyn ProgressSink,
) -> Result<Conversion> {
    let bytes = fs::read(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let text = charmap::decode(bytes, config.input_encoding, path)?;
    let (converted, replacements) = config.content.apply(&text);
    let destination = config.rename.derive(path)?;

    progress
        .on_file(path, &destination, config.dry_run)
        .map_err(EngineError::Progress)?;

    if config.dry_run {
        log::debug!("dry run: skipping write of {}", destination.display());
    } else {
        write_output(&destination, converted.as_bytes(), config.create_dirs)?;
    }

    log::trace!(
        "{} -> {} ({replacements} replacements)",
        path.display(),
        destination.display()
    );

    Ok(Conversion {
        source: path.to_path_buf(),
        destination,
        replacements,
        bytes: converted.len(),
    })
}

fn write_output(destination: &Path, contents: &[u8], create_dirs: bool) -> Result<()> {
    if create_dirs
        && let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty())
        && !parent.is_dir()
    {
        fs::create_dir_all(parent).map_err(|e| EngineError::CreateDir {
            path: PathBuf::from(parent),
            source: e,
        })?;
        log::debug!("created directory {}", parent.display());
    }

    fs::write(destination, contents).map_err(|e| EngineError::FileWrite {
        path: destination.to_path_buf(),
        source: e,
    })
}
