use crate::core::project_service::ProjectService;
use crate::models::error::AppError;
use camino::Utf8Path;
use std::fmt::Write;

const ACTIVE_TAG: &str = " [ACTIVE]";

pub fn show(service: &ProjectService) -> String {
    let config = service.config();
    let mut out = String::new();

    let server = config.server_path().map_or("(not set)", |p| p.as_str());
    let _ = writeln!(out, "Server root: {server}");
    let _ = writeln!(out, "Config:      {}", service.store().config_file());

    if config.projects.is_empty() {
        out.push_str("No projects registered.");
        return out;
    }

    out.push_str("Projects:");
    for (i, path) in config.project_paths().enumerate() {
        let tag = if config.is_active(&path) { ACTIVE_TAG } else { "" };
        let _ = write!(out, "\n  {}. {path}{tag}", i + 1);
    }
    out
}

pub fn select_server(service: &mut ProjectService, dir: &Utf8Path) -> Result<String, AppError> {
    let path = service.select_server_path(dir)?;
    Ok(format!("Server root set to {path}"))
}

pub fn add(service: &mut ProjectService, dir: &Utf8Path) -> Result<String, AppError> {
    Ok(if service.add_project(dir)? {
        format!("Project added: {dir}")
    } else {
        format!("Project already registered: {dir}")
    })
}

pub fn remove(service: &mut ProjectService, dir: &Utf8Path) -> Result<String, AppError> {
    if !service.remove_project(dir)? {
        return Err(AppError::UnknownProject(dir.to_owned()));
    }
    Ok(format!("Project removed: {dir}"))
}

pub fn activate(service: &mut ProjectService, dir: &Utf8Path) -> Result<String, AppError> {
    service.set_active_project(dir)?;
    Ok(format!("Active project: {}", service.config().active_project))
}

pub fn open(service: &ProjectService, dir: &Utf8Path, editor: &str) -> Result<String, AppError> {
    let path = service.open_project(dir, editor)?;
    Ok(format!("Opening {path} in {editor}"))
}
