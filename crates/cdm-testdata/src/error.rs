use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no fixture named '{0}' is registered")]
    KeyNotFound(String),

    #[error("unknown {kind} '{value}'")]
    UnknownToken { kind: &'static str, value: String },
}

impl CatalogError {
    pub(crate) fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        CatalogError::UnknownToken {
            kind,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
