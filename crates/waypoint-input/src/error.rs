use std::error::Error;

/// Failure reported by a listener callback.
///
/// Listener failures never leave the dispatch loop: they are logged and the
/// remaining listeners still run.
#[derive(Debug)]
pub enum ListenerError {
    Failed { reason: String },
    Custom(Box<dyn Error>),
}

impl ListenerError {
    pub fn failed(reason: impl Into<String>) -> Self {
        ListenerError::Failed {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for ListenerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListenerError::Failed { reason } => write!(f, "listener failed: {reason}"),
            ListenerError::Custom(err) => write!(f, "listener failed: {err}"),
        }
    }
}

impl Error for ListenerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ListenerError::Failed { .. } => None,
            ListenerError::Custom(err) => Some(err.as_ref()),
        }
    }
}

impl From<Box<dyn Error>> for ListenerError {
    fn from(err: Box<dyn Error>) -> Self {
        ListenerError::Custom(err)
    }
}

impl From<String> for ListenerError {
    fn from(reason: String) -> Self {
        ListenerError::Failed { reason }
    }
}

impl From<&str> for ListenerError {
    fn from(reason: &str) -> Self {
        ListenerError::failed(reason)
    }
}

pub type ListenerResult = Result<(), ListenerError>;
