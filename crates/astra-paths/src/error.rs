use std::fmt;

/// Errors raised when building an [`AStarState`](crate::AStarState).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierError {
    /// No map was supplied to bind the frontier to.
    MissingMap,
}

impl fmt::Display for FrontierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMap => write!(f, "frontier: map cannot be absent"),
        }
    }
}

impl std::error::Error for FrontierError {}
