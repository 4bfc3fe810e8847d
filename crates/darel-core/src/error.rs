use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// A predicate assumed an element shape the input did not have.
    /// Carries a rendering of the tuple under evaluation.
    Shape { tuple: String, reason: String },
    /// Malformed combinator configuration (bad regex, empty predicate set
    /// where one is required, ...). Raised at the constructing call.
    Precondition(String),
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgebraError::Shape { tuple, reason } => {
                write!(f, "shape error at {tuple}: {reason}")
            }
            AlgebraError::Precondition(msg) => write!(f, "precondition failed: {msg}"),
        }
    }
}

impl std::error::Error for AlgebraError {}

impl From<regex::Error> for AlgebraError {
    fn from(e: regex::Error) -> Self {
        AlgebraError::Precondition(format!("invalid pattern: {e}"))
    }
}

pub type Result<T> = std::result::Result<T, AlgebraError>;
