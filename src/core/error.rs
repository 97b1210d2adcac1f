use std::fmt;

/// §7: Storage failures propagate unchanged; Decode wraps a corrupted
/// posting-list blob; InvalidArgument is reserved for genuinely malformed
/// internal calls (mismatched parallel-array lengths), not empty input.
#[derive(Debug)]
pub enum ErrorKind {
    Storage,
    Decode,
    InvalidArgument,
    NotFound,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: String) -> Self {
        Error { kind, context }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.context)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error {
            kind: ErrorKind::Storage,
            context: err.to_string(),
        }
    }
}

impl From<bincode::Error> for Error {
    fn from(err: bincode::Error) -> Self {
        Error {
            kind: ErrorKind::Decode,
            context: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
