pub mod output;

pub use output::{
    create_writer, CalculationReport, ComponentListing, JsonWriter, MarkdownWriter, OutputFormat,
    OutputWriter, TerminalWriter,
};

use crate::errors::RoimapError;
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<(), RoimapError> {
    fs::write(path, content).map_err(|e| RoimapError::io(path, e))
}

/// Stdout, or a freshly created file when `path` is given.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, RoimapError> {
    match path {
        Some(path) => {
            let file = fs::File::create(path).map_err(|e| RoimapError::io(path, e))?;
            Ok(Box::new(std::io::BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}
