use crate::core::cleanup;
use crate::models::deploy::DeployReport;
use crate::models::error::{AppError, Phase};
use crate::utils::file::FileUtils;
use crate::utils::path::{existing_dir, overlaps};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

/// Entry point for deployment logic.
/// Wipes the immediate contents of `target` and copies every entry of `source` into it.
///
/// Not transactional: a failure leaves `target` partially cleared or partially repopulated,
/// and the error names the phase and path that failed.
pub fn deploy(source: &Utf8Path, target: &Utf8Path) -> Result<DeployReport, AppError> {
    let (source, target) = validate(source, target)?;

    let cleared = cleanup::clear_dir(&target)?;
    info!("Cleared {cleared} entries from {target}");

    let copied = copy_entries(&source, &target)?;
    info!("Copied {copied} entries from {source} to {target}");

    Ok(DeployReport { cleared, copied })
}

/// Checks every precondition before anything is touched.
/// Returns the normalized `(source, target)` pair.
pub fn validate(
    source: &Utf8Path,
    target: &Utf8Path,
) -> Result<(Utf8PathBuf, Utf8PathBuf), AppError> {
    if target.as_str().is_empty() {
        return Err(AppError::MissingServerPath);
    }
    if source.as_str().is_empty() {
        return Err(AppError::MissingActiveProject);
    }

    let target = existing_dir(target)?;
    let source = existing_dir(source)?;

    // Clearing the target would destroy the source.
    if overlaps(&source, &target) {
        return Err(AppError::OverlappingPaths {
            project: source,
            server: target,
        });
    }
    Ok((source, target))
}

fn copy_entries(source: &Utf8Path, target: &Utf8Path) -> Result<usize, AppError> {
    let entries = source
        .read_dir_utf8()
        .map_err(|e| AppError::io(Phase::Copy, source, e))?;

    let mut copied = 0;
    for entry in entries {
        let entry = entry.map_err(|e| AppError::io(Phase::Copy, source, e))?;
        let src = entry.path();
        let dst = target.join(entry.file_name());

        // `is_dir` follows links, so a linked directory is copied as a tree.
        if src.is_dir() {
            debug!("Copying directory {src}");
            FileUtils::copy_tree(src, &dst, Phase::Copy)?;
        } else {
            debug!("Copying file {src}");
            FileUtils::copy_file(src, &dst, Phase::Copy)?;
        }
        copied += 1;
    }
    Ok(copied)
}
