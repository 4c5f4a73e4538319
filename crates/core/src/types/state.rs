// crates/core/src/types/state.rs
//! Screen-level request state

/// State of a single screen-level request
///
/// UI state holders publish one of these per screen: nothing requested yet,
/// a request in flight, a payload to render, or a message to display next
/// to a retry action.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> ScreenState<T> {
    /// Returns true while a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the success payload, if any
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the error message, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Maps the success payload, leaving the other states untouched
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ScreenState<U> {
        match self {
            Self::Idle => ScreenState::Idle,
            Self::Loading => ScreenState::Loading,
            Self::Success(value) => ScreenState::Success(f(value)),
            Self::Error(message) => ScreenState::Error(message),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for ScreenState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Error(err.to_string()),
        }
    }
}
