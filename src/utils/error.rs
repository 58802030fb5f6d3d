use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML rendering error: {0}")]
    TomlRenderError(#[from] toml::ser::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl FixtureError {
    /// CLI 退出碼：配置錯誤為 1，讀取或解析錯誤為 2
    pub fn exit_code(&self) -> i32 {
        match self {
            FixtureError::InvalidValue { .. } => 1,
            FixtureError::IoError(_)
            | FixtureError::TomlParseError(_)
            | FixtureError::TomlRenderError(_)
            | FixtureError::SerializationError(_) => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, FixtureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let config = FixtureError::InvalidValue {
            field: "fixtures".to_string(),
            value: "clinic.json".to_string(),
            reason: "bad extension".to_string(),
        };
        assert_eq!(config.exit_code(), 1);

        let io = FixtureError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.exit_code(), 2);
        assert!(io.to_string().starts_with("IO error"));
    }
}
