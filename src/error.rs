//! Error types shared by both tools.
//!
//! Every failure keeps its underlying cause so it can be logged in full, while
//! [`ErrorKind`] decides the terse console message and the exit code.

use thiserror::Error;

/// Exit code for normal completion, including soft network failures.
pub const EXIT_OK: i32 = 0;
/// Exit code for unrecoverable transport failures.
pub const EXIT_TRANSPORT: i32 = 1;
/// Exit code for argument parsing failures.
pub const EXIT_USAGE: i32 = 2;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Timeout,
    TooManyRedirects,
    TransportError,
    ParseError,
    Other,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("request timed out")]
    Timeout(#[source] reqwest::Error),

    #[error("too many redirects")]
    TooManyRedirects(#[source] reqwest::Error),

    #[error(transparent)]
    Transport(reqwest::Error),

    #[error("unexpected response body")]
    Parse(#[from] serde_json::Error),

    #[error("malformed compound identifier: {0:?}")]
    MalformedIdentifier(String),

    #[error("transfer from {sender:?} has no {field}")]
    MissingField { sender: String, field: &'static str },

    #[error("failed to write report")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Error::Timeout(e)
        } else if e.is_redirect() {
            Error::TooManyRedirects(e)
        } else {
            Error::Transport(e)
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Timeout(_) => ErrorKind::Timeout,
            Error::TooManyRedirects(_) => ErrorKind::TooManyRedirects,
            Error::Transport(_) => ErrorKind::TransportError,
            Error::Parse(_) | Error::MalformedIdentifier(_) | Error::MissingField { .. } => {
                ErrorKind::ParseError
            }
            Error::Csv(_) | Error::Io(_) => ErrorKind::Other,
        }
    }

    /// Process exit code for this failure.
    ///
    /// Only transport failures are fatal; timeouts, redirect loops and bad
    /// response bodies are reported and the tool still exits cleanly.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::TransportError => EXIT_TRANSPORT,
            _ => EXIT_OK,
        }
    }

    /// Full cause chain, for logging.
    pub fn chain(&self) -> String {
        let mut out = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            out.push_str(": ");
            out.push_str(&cause.to_string());
            source = cause.source();
        }
        out
    }
}

pub type Result<T> = std::result::Result<T, Error>;
