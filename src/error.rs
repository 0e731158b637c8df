use thiserror::Error;

/// Errors raised while reading input or configuration.
///
/// None of these reach the user: the session logs them and carries on with
/// whatever part of the input was usable.
#[derive(Debug, Error)]
pub enum SketchError {
    /// A form field used as a number does not hold one
    #[error("field `{field}` is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// A form field used as a colour does not hold a hex colour
    #[error("not a hex colour: {0:?}")]
    InvalidColor(String),

    #[error("failed to read config file: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type SketchResult<T> = Result<T, SketchError>;
