use crate::core::deployment;
use crate::models::deploy::{BackupRecord, DeployReport};
use crate::models::error::{AppError, Phase};
use crate::models::paths::BackupPathRules;
use crate::utils::file::FileUtils;
use crate::utils::path::{existing_dir, overlaps, to_utf8};
use crate::utils::time::folder_timestamp;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use directories::{BaseDirs, UserDirs};
use tracing::info;

const BACKUP_PREFIX: &str = "backup_";

/// `<documents>/XAMPP_Backups`, falling back to the home directory when there is no documents folder.
pub fn default_backup_root() -> Result<Utf8PathBuf, AppError> {
    let base = UserDirs::new()
        .and_then(|dirs| dirs.document_dir().map(|p| p.to_path_buf()))
        .or_else(|| BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()))
        .ok_or(AppError::NoConfigDir)?;
    Ok(BackupPathRules::new(&to_utf8(base)?).root)
}

/// Snapshots the whole server root into `backup_root/backup_<timestamp>/`.
pub fn create_backup(server_root: &Utf8Path, backup_root: &Utf8Path) -> Result<BackupRecord, AppError> {
    if server_root.as_str().is_empty() {
        return Err(AppError::MissingServerPath);
    }
    let server_root = existing_dir(server_root)?;

    let refuse = |server: Utf8PathBuf| AppError::OverlappingPaths {
        project: backup_root.to_owned(),
        server,
    };
    if overlaps(&server_root, backup_root) {
        return Err(refuse(server_root));
    }
    std::fs::create_dir_all(backup_root).map_err(|e| AppError::io(Phase::Backup, backup_root, e))?;
    // Links or relative segments can still hide an overlap.
    if overlaps(&server_root, &existing_dir(backup_root)?) {
        return Err(refuse(server_root));
    }

    let name = unique_name(backup_root);
    let path = backup_root.join(&name);
    FileUtils::copy_tree(&server_root, &path, Phase::Backup)?;

    let entries = FileUtils::count_entries(&path, Phase::Backup)?;
    info!("Backed up {entries} entries from {server_root} to {path}");
    Ok(BackupRecord { name, path, entries })
}

/// Two backups within the same second get a numeric suffix.
fn unique_name(backup_root: &Utf8Path) -> String {
    let base = format!("{BACKUP_PREFIX}{}", folder_timestamp());
    let mut name = base.clone();
    let mut n = 1;
    while backup_root.join(&name).exists() {
        n += 1;
        name = format!("{base}_{n}");
    }
    name
}

/// Lists all snapshots, newest first. A missing backup root means no backups.
pub fn list_backups(backup_root: &Utf8Path) -> Result<Vec<BackupRecord>, AppError> {
    if !backup_root.exists() {
        return Ok(Vec::new());
    }

    let entries = backup_root
        .read_dir_utf8()
        .map_err(|e| AppError::io(Phase::Backup, backup_root, e))?;

    let mut backups: Vec<BackupRecord> = entries
        .filter_map(|entry| entry.ok())
        .filter(|e| e.file_name().starts_with(BACKUP_PREFIX) && e.path().is_dir())
        .map(|e| -> Result<BackupRecord, AppError> {
            let path = e.path().to_path_buf();
            Ok(BackupRecord {
                name: e.file_name().to_string(),
                entries: FileUtils::count_entries(&path, Phase::Backup)?,
                path,
            })
        })
        .collect::<Result<_, _>>()?;

    // Timestamps sort lexically; descending puts the newest first.
    backups.sort_by(|a, b| b.name.cmp(&a.name));
    Ok(backups)
}

/// A snapshot name is one plain path component carrying the backup prefix.
fn is_backup_name(name: &str) -> bool {
    let mut components = Utf8Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Utf8Component::Normal(c)), None) if c.starts_with(BACKUP_PREFIX)
    )
}

/// Mirrors a snapshot back into the server root.
pub fn restore_backup(
    backup_root: &Utf8Path,
    name: &str,
    server_root: &Utf8Path,
) -> Result<DeployReport, AppError> {
    let snapshot = backup_root.join(name);
    if !is_backup_name(name) || !snapshot.is_dir() {
        return Err(AppError::DirectoryNotFound(snapshot));
    }
    info!("Restoring {snapshot} into {server_root}");
    deployment::deploy(&snapshot, server_root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backup_names_are_single_prefixed_components() {
        assert!(is_backup_name("backup_2024-05-01_14-03-59"));
        assert!(is_backup_name("backup_2024-05-01_14-03-59_2"));
        assert!(!is_backup_name(""));
        assert!(!is_backup_name("notes"));
        assert!(!is_backup_name("../project"));
        assert!(!is_backup_name("backup_x/../../project"));
        assert!(!is_backup_name("/srv/backup_x"));
        assert!(!is_backup_name("."));
    }

    #[test]
    fn default_root_is_named_after_backup_rules() {
        match default_backup_root() {
            Ok(root) => assert_eq!(root.file_name(), Some("XAMPP_Backups")),
            Err(e) => assert!(matches!(e, AppError::NoConfigDir)),
        }
    }
}
