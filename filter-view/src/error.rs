use thiserror::Error;

/// Errors surfaced by the filter view layer.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A query value could not be parsed for the named field.
    #[error("invalid value {value:?} for `{field}`: {reason}")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    /// Configuration values were rejected by `ViewConfig::validate`.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration text was not valid TOML for `ViewConfig`.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl FilterError {
    pub(crate) fn validation(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FilterError::Validation {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// The query key that failed validation, if this is a validation error.
    pub fn field(&self) -> Option<&str> {
        match self {
            FilterError::Validation { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
