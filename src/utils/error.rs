/// A solver error type which, essentially, is a wrapper on String type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverError(String);

/// A type alias for result type with `SolverError`.
pub type SolverResult<T> = Result<T, SolverError>;

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for SolverError {}

impl From<String> for SolverError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for SolverError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}
