extern crate zip;

use super::fetch;
use std::{error::Error as StdError, fmt, result::Result as StdResult, string::FromUtf8Error};
use zip::result::ZipError;

/// The sample package itself is broken.
#[derive(Debug)]
pub enum FormatError {
    Zip(ZipError),
    MissingOutput { input: String, output: String },
}
impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Zip(err) => write!(f, "zip: {}", err),
            FormatError::MissingOutput { input, output } => {
                write!(f, "{} has no matching {}", input, output)
            }
        }
    }
}
impl StdError for FormatError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            FormatError::Zip(err) => Some(err),
            FormatError::MissingOutput { .. } => None,
        }
    }
}

#[derive(Debug)]
pub enum Error {
    Fetch(fetch::Error),
    ArchiveFormat(FormatError),
    Decode { entry: String, source: FromUtf8Error },
}
pub type Result<T> = StdResult<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Fetch(err) => write!(f, "Error fetching sample archive: {}", err),
            Error::ArchiveFormat(err) => write!(f, "Malformed sample archive: {}", err),
            Error::Decode { entry, source } => write!(f, "Error decoding {}: {}", entry, source),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Fetch(err) => Some(err),
            Error::ArchiveFormat(err) => Some(err),
            Error::Decode { source, .. } => Some(source),
        }
    }
}
impl From<fetch::Error> for Error {
    fn from(err: fetch::Error) -> Self {
        Error::Fetch(err)
    }
}

pub(super) fn zip_error(err: ZipError) -> Error {
    Error::ArchiveFormat(FormatError::Zip(err))
}
pub(super) fn missing_output(input: &str, output: String) -> Error {
    Error::ArchiveFormat(FormatError::MissingOutput {
        input: input.to_owned(),
        output,
    })
}
