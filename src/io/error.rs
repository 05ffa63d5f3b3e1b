//! # Error reporting for reading of problem files
//!
//! Describes any problems encountered during reading and parsing.
use std::error::Error;
use std::fmt;
use std::io;

use crate::data::linear_program::error::ConfigurationError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
#[derive(Debug)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    IO(io::Error),
    /// Contents of the file could not be parsed into a problem.
    ///
    /// # Note
    ///
    /// A problem of the wrong shape will not be represented with this error. This variant is only
    /// created for syntactically incorrect files.
    Parse(serde_json::Error),
    /// The file describes a problem for which no tableau can be built.
    ///
    /// For example, a row might have more coefficients than there are objective coefficients.
    Configuration(ConfigurationError),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ImportError::FileExtension(message) => message.fmt(f),
            ImportError::IO(error) => write!(f, "Couldn't read the problem file: {}", error),
            ImportError::Parse(error) => write!(f, "Couldn't parse the problem file: {}", error),
            ImportError::Configuration(error) => write!(f, "Inconsistent problem: {}", error),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ImportError::FileExtension(_) => None,
            ImportError::IO(error) => Some(error),
            ImportError::Parse(error) => Some(error),
            ImportError::Configuration(error) => Some(error),
        }
    }
}

impl From<io::Error> for ImportError {
    fn from(error: io::Error) -> Self {
        ImportError::IO(error)
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(error: serde_json::Error) -> Self {
        ImportError::Parse(error)
    }
}

impl From<ConfigurationError> for ImportError {
    fn from(error: ConfigurationError) -> Self {
        ImportError::Configuration(error)
    }
}
