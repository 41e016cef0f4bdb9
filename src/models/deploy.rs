use camino::Utf8PathBuf;
use serde::Serialize;

/// Outcome of a successful mirror run. Counts are immediate entries only.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DeployReport {
    pub cleared: usize,
    pub copied: usize,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct BackupRecord {
    pub name: String,
    pub path: Utf8PathBuf,
    pub entries: usize,
}
