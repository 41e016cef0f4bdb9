use crate::core::project_service::ProjectService;
use crate::models::error::AppError;
use std::fmt::Write;

pub fn deploy(service: &ProjectService, with_backup: bool) -> Result<String, AppError> {
    let mut out = String::new();
    let report = if with_backup {
        let (record, report) = service.deploy_with_backup()?;
        let _ = writeln!(out, "Backed up {} entries to {}", record.entries, record.path);
        report
    } else {
        service.deploy()?
    };
    let _ = write!(
        out,
        "The active project was deployed successfully ({} removed, {} copied).",
        report.cleared, report.copied
    );
    Ok(out)
}

pub fn backup(service: &ProjectService) -> Result<String, AppError> {
    let record = service.backup_server()?;
    Ok(format!("Backed up {} entries to {}", record.entries, record.path))
}

pub fn list_backups(service: &ProjectService) -> Result<String, AppError> {
    let backups = service.list_backups()?;
    if backups.is_empty() {
        return Ok(format!("No backups in {}", service.backup_root()));
    }

    let mut out = format!("Backups in {}:", service.backup_root());
    for b in backups {
        let _ = write!(out, "\n  {} ({} entries)", b.name, b.entries);
    }
    Ok(out)
}

pub fn restore(service: &ProjectService, name: &str) -> Result<String, AppError> {
    let report = service.restore_backup(name)?;
    Ok(format!(
        "Restored {name} ({} removed, {} copied).",
        report.cleared, report.copied
    ))
}
