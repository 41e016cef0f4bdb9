use camino::Utf8PathBuf;
use derive_more::Display;

/// Step of an operation an I/O failure happened in.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    #[display("clearing server root")]
    Clear,
    #[display("copying project")]
    Copy,
    #[display("backing up server root")]
    Backup,
    #[display("accessing config")]
    Config,
    #[display("launching editor")]
    Launch,
}

#[derive(Display, Debug)]
pub enum AppError {
    #[display("No server root selected. Pick the WAMP/XAMPP directory first.")]
    MissingServerPath,
    #[display("No active project selected.")]
    MissingActiveProject,
    #[display("Directory not found: {_0}")]
    DirectoryNotFound(Utf8PathBuf),
    #[display("Project is not registered: {_0}")]
    UnknownProject(Utf8PathBuf),
    #[display("Refusing to deploy: project '{project}' and server root '{server}' overlap")]
    OverlappingPaths {
        project: Utf8PathBuf,
        server: Utf8PathBuf,
    },
    #[display("Destination already exists: {_0}")]
    DestinationExists(Utf8PathBuf),
    #[display("Error while {phase} at '{path}': {source}")]
    Io {
        phase: Phase,
        path: Utf8PathBuf,
        source: std::io::Error,
    },
    #[display("Config file '{path}' is corrupt: {reason}")]
    ConfigCorrupt { path: Utf8PathBuf, reason: String },
    #[display("Path is not valid UTF-8: {_0}")]
    NonUtf8Path(String),
    #[display("Could not determine the user config directory")]
    NoConfigDir,
}

impl AppError {
    pub fn io(phase: Phase, path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            phase,
            path: path.into(),
            source,
        }
    }

    /// True for errors raised before any filesystem change was attempted.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::MissingServerPath
                | AppError::MissingActiveProject
                | AppError::DirectoryNotFound(_)
                | AppError::UnknownProject(_)
                | AppError::OverlappingPaths { .. }
        )
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
