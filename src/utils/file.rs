use crate::models::error::{AppError, Phase};
use camino::Utf8Path;
use std::fs;
use tracing::debug;
use walkdir::WalkDir;

pub struct FileUtils;

impl FileUtils {
    /// Recursively copies a directory tree from source to destination.
    /// The destination must not exist yet. Symlinks inside the source are followed.
    pub fn copy_tree(src: &Utf8Path, dst: &Utf8Path, phase: Phase) -> Result<(), AppError> {
        if dst.exists() || dst.is_symlink() {
            return Err(AppError::DestinationExists(dst.to_owned()));
        }

        for entry in WalkDir::new(src).follow_links(true) {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .and_then(Utf8Path::from_path)
                    .unwrap_or(src)
                    .to_owned();
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
                AppError::io(phase, path, source)
            })?;

            let src_path = Utf8Path::from_path(entry.path())
                .ok_or_else(|| AppError::NonUtf8Path(entry.path().display().to_string()))?;

            // Every walked entry lives under `src`.
            let rel_path = src_path.strip_prefix(src).unwrap_or(src_path);
            let dst_path = dst.join(rel_path);

            if entry.file_type().is_dir() {
                fs::create_dir(&dst_path).map_err(|e| AppError::io(phase, &dst_path, e))?;
            } else {
                Self::copy_file(src_path, &dst_path, phase)?;
            }
        }

        Ok(())
    }

    /// Copies bytes and permissions, then carries the modification time over when the platform allows.
    pub fn copy_file(src: &Utf8Path, dst: &Utf8Path, phase: Phase) -> Result<(), AppError> {
        fs::copy(src, dst).map_err(|e| AppError::io(phase, src, e))?;

        let carried = fs::metadata(src)
            .and_then(|meta| meta.modified())
            .and_then(|mtime| Self::open_for_times(dst)?.set_modified(mtime));
        if let Err(e) = carried {
            debug!("Could not preserve mtime of {dst}: {e}");
        }
        Ok(())
    }

    // The copy may already be read-only, so no write access is requested.
    #[cfg(unix)]
    fn open_for_times(path: &Utf8Path) -> std::io::Result<fs::File> {
        fs::File::open(path)
    }

    #[cfg(windows)]
    fn open_for_times(path: &Utf8Path) -> std::io::Result<fs::File> {
        use std::os::windows::fs::OpenOptionsExt;
        const FILE_WRITE_ATTRIBUTES: u32 = 0x0100;
        fs::File::options()
            .access_mode(FILE_WRITE_ATTRIBUTES)
            .open(path)
    }

    #[cfg(not(any(unix, windows)))]
    fn open_for_times(path: &Utf8Path) -> std::io::Result<fs::File> {
        fs::File::options().write(true).open(path)
    }

    /// Counts the immediate entries of a directory.
    pub fn count_entries(dir: &Utf8Path, phase: Phase) -> Result<usize, AppError> {
        Ok(fs::read_dir(dir)
            .map_err(|e| AppError::io(phase, dir, e))?
            .count())
    }
}
