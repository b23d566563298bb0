use thiserror::Error;

/// Raised when a control reports a name or value outside the fixed vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown tab tag: {0}")]
    UnknownTab(String),
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),
    #[error("unknown {record} field: {name}")]
    UnknownField { record: &'static str, name: String },
    #[error("field {0} expects a text value")]
    ExpectedText(String),
    #[error("field {0} expects a checked value")]
    ExpectedChecked(String),
}
