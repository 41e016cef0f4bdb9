use crate::models::error::AppError;
use camino::{Utf8Path, Utf8PathBuf};
use std::path::PathBuf;

pub fn to_utf8(path: PathBuf) -> Result<Utf8PathBuf, AppError> {
    Utf8PathBuf::from_path_buf(path).map_err(|p| AppError::NonUtf8Path(p.to_string_lossy().into()))
}

/// Resolves an existing directory to its absolute form, without the `\\?\` prefix on Windows.
pub fn existing_dir(path: &Utf8Path) -> Result<Utf8PathBuf, AppError> {
    if !path.is_dir() {
        return Err(AppError::DirectoryNotFound(path.to_owned()));
    }
    dunce::canonicalize(path)
        .map_err(|_| AppError::DirectoryNotFound(path.to_owned()))
        .and_then(to_utf8)
}

/// True when either path contains the other.
pub fn overlaps(a: &Utf8Path, b: &Utf8Path) -> bool {
    a.starts_with(b) || b.starts_with(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_paths_overlap() {
        let root = Utf8Path::new("/srv/www");
        assert!(overlaps(root, Utf8Path::new("/srv/www/project")));
        assert!(overlaps(Utf8Path::new("/srv/www/project"), root));
        assert!(overlaps(root, root));
        assert!(!overlaps(root, Utf8Path::new("/srv/www2")));
        assert!(!overlaps(root, Utf8Path::new("/home/ana/project")));
    }
}
