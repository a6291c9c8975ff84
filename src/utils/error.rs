use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Entry index {index} is out of range (form has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unknown field: {name}")]
    InvalidField { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Config,
    System,
}

impl FormError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FormError::IndexOutOfRange { .. } | FormError::InvalidField { .. } => {
                ErrorCategory::Usage
            }
            FormError::TomlError(_) | FormError::ConfigValidationError { .. } => {
                ErrorCategory::Config
            }
            FormError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FormError::IndexOutOfRange { index, len } => {
                if *len == 0 {
                    format!("There is no entry #{} because the form is empty", index + 1)
                } else {
                    format!(
                        "There is no entry #{}; valid entries are #1 to #{}",
                        index + 1,
                        len
                    )
                }
            }
            FormError::InvalidField { name } => {
                format!("'{}' is not a field; use name, email or mobile", name)
            }
            FormError::IoError(e) => format!("Could not read the session file: {}", e),
            FormError::TomlError(e) => format!("The session file is not valid TOML: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;
