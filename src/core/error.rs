use std::fmt;
use std::io;
use std::result;

#[derive(Debug)]
pub enum Error {
    Argument(String),
    OutOfRange(String),
    Io(String),
    Parse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Argument(msg)    => write!(f, "{}", msg),
            Error::OutOfRange(msg)  => write!(f, "{}", msg),
            Error::Io(msg)          => write!(f, "{}", msg),
            Error::Parse(msg)       => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(format!("JSON error: {}", err))
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Parse(format!("CSV error: {}", err))
    }
}

impl From<calamine::Error> for Error {
    fn from(err: calamine::Error) -> Self {
        Error::Parse(format!("Workbook error: {}", err))
    }
}

pub type Result<T> = result::Result<T, Error>;
