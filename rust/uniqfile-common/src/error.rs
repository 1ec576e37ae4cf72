use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn attempts_exhausted(attempts: u32) -> Error {
        Error(ErrorKind::AttemptsExhausted { attempts }.into())
    }

    pub fn io(context: impl Into<String>, source: io::Error) -> Error {
        Error(
            ErrorKind::Io {
                context: context.into(),
                source,
            }
            .into(),
        )
    }

    /// Whether every creation attempt collided with an existing file.
    pub fn is_attempts_exhausted(&self) -> bool {
        matches!(self.kind(), ErrorKind::AttemptsExhausted { .. })
    }

    /// The underlying I/O error, when this error wraps one.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self.kind() {
            ErrorKind::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("unable to create a unique file after {attempts} attempts")]
    AttemptsExhausted { attempts: u32 },

    #[error("IO error for '{context}': {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::io("", e)
    }
}

impl From<Error> for io::Error {
    fn from(e: Error) -> Self {
        match e.into_kind() {
            ErrorKind::Io { source, .. } => source,
            kind @ ErrorKind::AttemptsExhausted { .. } => {
                io::Error::new(io::ErrorKind::AlreadyExists, kind.to_string())
            }
            kind @ ErrorKind::InvalidArgument { .. } => {
                io::Error::new(io::ErrorKind::InvalidInput, kind.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::{Error, ErrorKind};

    #[test]
    fn test_exhausted_message_names_attempts() {
        let err = Error::attempts_exhausted(1000);
        assert!(err.is_attempts_exhausted());
        assert!(err.io_error().is_none());
        assert_eq!(
            err.to_string(),
            "unable to create a unique file after 1000 attempts"
        );
    }

    #[test]
    fn test_io_error_is_preserved() {
        let err = Error::io(
            "/tmp/x.0123",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!err.is_attempts_exhausted());
        assert_eq!(
            err.io_error().map(|e| e.kind()),
            Some(io::ErrorKind::PermissionDenied)
        );

        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_into_io_error() {
        let io_err: io::Error = Error::attempts_exhausted(5).into();
        assert_eq!(io_err.kind(), io::ErrorKind::AlreadyExists);

        let io_err: io::Error = Error::from(ErrorKind::InvalidArgument {
            name: "max_attempts".into(),
            message: "max_attempts > 0".into(),
        })
        .into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }
}
