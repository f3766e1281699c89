use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;
use std::sync::Arc;

/// Error kinds for collection operations.
///
/// Each kind describes one category of failure so callers can match on
/// [`TroveError::kind`] instead of parsing messages.
///
/// # Examples
///
/// ```rust
/// use trove::errors::{ErrorKind, TroveError, TroveResult};
///
/// fn example() -> TroveResult<()> {
///     Err(TroveError::new("condition must be an object", ErrorKind::InvalidArgument))
/// }
///
/// assert_eq!(example().unwrap_err().kind(), &ErrorKind::InvalidArgument);
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// A value of the wrong shape was passed (non-object record, bad field path, ...)
    InvalidArgument,
    /// The request is well formed but not supported (multi-field conditions)
    NotImplemented,
    /// The operation is not valid in the current state of the collection
    InvalidOperation,
    /// Error converting a value to or from its record representation
    EncodingError,
    /// The records and their indexes disagree (indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidArgument => write!(f, "Invalid argument"),
            ErrorKind::NotImplemented => write!(f, "Not implemented"),
            ErrorKind::InvalidOperation => write!(f, "Invalid operation"),
            ErrorKind::EncodingError => write!(f, "Encoding error"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Error type returned by every fallible collection operation.
///
/// `TroveError` carries a message, an [`ErrorKind`], an optional cause and the
/// backtrace captured where it was created.
#[derive(Clone)]
pub struct TroveError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<TroveError>>,
    backtrace: Arc<Backtrace>,
}

impl TroveError {
    /// Creates a new `TroveError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        TroveError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: Arc::new(Backtrace::new()),
        }
    }

    /// Creates a new `TroveError` that wraps `cause`.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: TroveError) -> Self {
        TroveError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: Arc::new(Backtrace::new()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&TroveError> {
        self.cause.as_deref()
    }
}

impl Display for TroveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for TroveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // print error message with stack trace followed by cause
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace),
        }
    }
}

impl Error for TroveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// `TroveResult<T>` is shorthand for `Result<T, TroveError>`.
pub type TroveResult<T> = Result<T, TroveError>;

impl From<serde_json::Error> for TroveError {
    fn from(err: serde_json::Error) -> Self {
        TroveError::new(&format!("JSON encoding error: {}", err), ErrorKind::EncodingError)
    }
}
