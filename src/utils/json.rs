use crate::models::error::{AppError, Phase};
use camino::Utf8Path;

pub struct Json;

impl Json {
    /// Writes `data` as pretty JSON with a 4-space indent.
    pub fn write<T: serde::Serialize>(path: &Utf8Path, data: &T) -> Result<(), AppError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        data.serialize(&mut ser)
            .map_err(|e| AppError::io(Phase::Config, path, e.into()))?;
        std::fs::write(path, buf).map_err(|e| AppError::io(Phase::Config, path, e))
    }

    pub fn read<T: serde::de::DeserializeOwned>(path: &Utf8Path) -> Result<T, AppError> {
        let s = std::fs::read_to_string(path).map_err(|e| AppError::io(Phase::Config, path, e))?;
        serde_json::from_str::<T>(&s).map_err(|e| AppError::ConfigCorrupt {
            path: path.to_owned(),
            reason: e.to_string(),
        })
    }
}
