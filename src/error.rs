/// Errors raised by the source-level entry points.
///
/// The tree rewrite itself has no failure path: shapes it does not recognize are
/// left untouched.
#[derive(Debug, Clone)]
pub enum TransformError {
    Parse { messages: Vec<String> },
    InvalidOptions { reason: String },
}

impl std::fmt::Display for TransformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse { messages } => {
                write!(f, "Failed to parse compiled MDX: {}", messages.join("; "))
            }
            Self::InvalidOptions { reason } => write!(f, "Invalid options: {}", reason),
        }
    }
}

impl std::error::Error for TransformError {}

#[cfg(feature = "napi")]
impl From<TransformError> for napi::Error {
    fn from(err: TransformError) -> Self {
        napi::Error::from_reason(err.to_string())
    }
}
