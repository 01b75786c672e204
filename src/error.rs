use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum Error {
    Request(reqwest::Error),
    /// The menu page answered with a non-success status code.
    Status(u16),
    Io(std::io::Error),
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Request(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(e) => write!(f, "Request error: {e}"),
            Self::Status(code) => write!(f, "Menu page returned status {code}"),
            Self::Io(e) => write!(f, "Io error: {e}"),
            Self::Config(msg) => write!(f, "Config error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
