use thiserror::Error;

pub type BmiResult<T> = Result<T, BmiError>;

#[derive(Debug, Error)]
pub enum BmiError {
    #[error("height must be a positive value, got {0}")]
    InvalidHeight(f64),
    #[error("weight must be a positive value, got {0}")]
    InvalidWeight(f64),
    #[error("bmi out of range for weight {weight} and height {height}")]
    OutOfRange { weight: f64, height: f64 },
    #[error("invalid number: {input:?}")]
    InvalidNumber { input: String },
    #[error("no input provided")]
    MissingInput,
    #[error("unknown locale: {0}")]
    InvalidLocale(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl BmiError {
    /// Stable tag used in machine-readable output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidHeight(_) => "invalid_height",
            Self::InvalidWeight(_) => "invalid_weight",
            Self::OutOfRange { .. } => "out_of_range",
            Self::InvalidNumber { .. } => "invalid_number",
            Self::MissingInput => "missing_input",
            Self::InvalidLocale(_) => "invalid_locale",
            Self::Io(_) => "io",
        }
    }

    /// Errors caused by what the user typed, as opposed to a broken terminal.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
