use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    InvalidInput(String),
    IndexOutOfRange { index: usize, len: usize },
    InvalidData(String),
    Io(String),
}

impl AppError {
    pub fn invalid_input<M: Into<String>>(message: M) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    pub fn invalid_data<M: Into<String>>(message: M) -> Self {
        Self::InvalidData(message.into())
    }

    pub fn io<M: Into<String>>(message: M) -> Self {
        Self::Io(message.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::IndexOutOfRange { .. } => "index_out_of_range",
            Self::InvalidData(_) => "invalid_data",
            Self::Io(_) => "io_error",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::InvalidInput(message) => message.clone(),
            Self::IndexOutOfRange { index, len } => {
                format!("no pending task at position {index} (pending has {len})")
            }
            Self::InvalidData(message) => message.clone(),
            Self::Io(message) => message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code(), self.message())
    }
}

impl std::error::Error for AppError {}

/// Non-fatal notice returned next to a task whose due date could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWarning {
    pub input: String,
    pub fallback: time::Date,
}

impl DateWarning {
    pub fn code(&self) -> &'static str {
        "invalid_date"
    }
}

impl fmt::Display for DateWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - '{}' is not a yyyy-MM-dd date (e.g. 2025-06-04), using {} instead",
            self.code(),
            self.input,
            crate::model::format_date(self.fallback)
        )
    }
}
