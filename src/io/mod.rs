//! # Reading and writing of problems
//!
//! Problems are read from JSON files. Solve traces are written as text tables or as JSON.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::data::linear_program::problem::Problem;
use crate::data::number_types::Element;
use crate::io::error::ImportError;

pub mod error;
pub mod text;

/// Import a problem from a file.
///
/// Currently only supports JSON files, of the form
///
/// ```json
/// {
///     "objective": [1, 1],
///     "rows": [{"values": [1, 2], "operation": "<=", "constraint": 4}]
/// }
/// ```
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, the contents can't be parsed
/// or the problem is malformed.
pub fn import<F: Element + DeserializeOwned>(file_path: &Path) -> Result<Problem<F>, ImportError> {
    // Open and read the file
    let mut program = String::new();
    File::open(file_path)?.read_to_string(&mut program)?;

    // Choose the right parser
    match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("json" | "JSON") => parse(&program),
            Some(extension_string) => Err(ImportError::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path
            ))),
            None => Err(ImportError::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension
            ))),
        },
        None => Err(ImportError::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path
        ))),
    }
}

/// Parse and validate a problem in JSON format.
///
/// # Errors
///
/// When the text is not valid JSON describing a problem, or when the problem is malformed.
pub fn parse<F: Element + DeserializeOwned>(program: &str) -> Result<Problem<F>, ImportError> {
    let problem: Problem<F> = serde_json::from_str(program)?;
    problem.validate()?;

    Ok(problem)
}
