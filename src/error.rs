use std::fmt;

/// Failure returned by a handler in place of a [`Reply`](crate::reply::Reply).
///
/// The runtime reports it to the platform as a failed invocation; handlers
/// never retry or recover internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    Failed(String),
}

impl HandlerError {
    pub fn failed(message: impl Into<String>) -> Self {
        HandlerError::Failed(message.into())
    }
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::Failed(msg) => write!(f, "Handler Failed: {msg}"),
        }
    }
}

impl std::error::Error for HandlerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_message() {
        let err = HandlerError::failed("no response");
        assert_eq!(err.to_string(), "Handler Failed: no response");
    }

    #[test]
    fn test_converts_into_runtime_error() {
        let err: lambda_http::Error = HandlerError::failed("boom").into();
        assert_eq!(err.to_string(), "Handler Failed: boom");
    }
}
