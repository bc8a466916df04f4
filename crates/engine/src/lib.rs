// crates/engine/src/lib.rs
use rayon::prelude::*;
use std::path::PathBuf;

pub mod charmap;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod options;
pub mod processor;
pub mod progress;
pub mod report;
pub mod rules;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::progress::ProgressSink;
use crate::report::{Conversion, RunReport};

/// Run the re-encoding pass described by `config`.
///
/// Files are enumerated up front, so outputs written during the run are never
/// picked up as inputs. With `jobs == 1` files are processed in sorted order.
///
/// # Errors
///
/// Returns the first failure unless `config.keep_going` is set, in which case
/// per-file failures are collected in `RunReport::errors` and only
/// configuration or enumeration failures are returned.
pub fn run(config: &Config, progress: &dyn ProgressSink) -> Result<RunReport> {
    config.validate()?;

    let (files, skipped): (Vec<PathBuf>, Vec<PathBuf>) =
        filesystem::collect_files(&config.walk)?
            .into_iter()
            .partition(|p| !config.rename.is_mirrored(p));

    for path in &skipped {
        log::info!("skipping already mirrored file {}", path.display());
    }
    log::info!(
        "{} files to convert under {} ({} mirrored skipped)",
        files.len(),
        config.walk.root.display(),
        skipped.len()
    );

    let jobs = config.effective_jobs();
    let outcomes = if jobs <= 1 {
        run_sequential(&files, config, progress)?
    } else {
        run_parallel(&files, config, progress, jobs)?
    };

    let mut report = RunReport {
        skipped_mirrored: skipped.len(),
        dry_run: config.dry_run,
        ..RunReport::default()
    };
    for outcome in outcomes {
        match outcome {
            Ok(conversion) => report.conversions.push(conversion),
            Err(failure) => report.errors.push(failure),
        }
    }
    Ok(report)
}

type Outcome = std::result::Result<Conversion, (PathBuf, EngineError)>;

fn run_sequential(
    files: &[PathBuf],
    config: &Config,
    progress: &dyn ProgressSink,
) -> Result<Vec<Outcome>> {
    let mut outcomes = Vec::with_capacity(files.len());
    for path in files {
        match processor::process_file(path, config, progress) {
            Ok(conversion) => outcomes.push(Ok(conversion)),
            Err(e) if config.keep_going => {
                log::warn!("{}: {e}", path.display());
                outcomes.push(Err((path.clone(), e)));
            }
            Err(e) => return Err(e),
        }
    }
    Ok(outcomes)
}

fn run_parallel(
    files: &[PathBuf],
    config: &Config,
    progress: &dyn ProgressSink,
    jobs: usize,
) -> Result<Vec<Outcome>> {
    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;
    log::debug!("processing on {jobs} threads");

    pool.install(|| {
        if config.keep_going {
            Ok(files
                .par_iter()
                .map(|path| {
                    processor::process_file(path, config, progress).map_err(|e| {
                        log::warn!("{}: {e}", path.display());
                        (path.clone(), e)
                    })
                })
                .collect())
        } else {
            // Short-circuits: once an error is seen no new files are started.
            files
                .par_iter()
                .map(|path| processor::process_file(path, config, progress).map(Ok))
                .collect::<Result<Vec<_>>>()
        }
    })
}
