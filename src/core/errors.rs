/*!
# Error types

Parsing a line never fails: a line either yields a location or it doesn't.
These errors cover the surfaces around it, loading configuration and
reading captured output.
*/

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocatorError {
    #[error("config field `{field}` must not be empty")]
    EmptyField { field: &'static str },

    #[error("config field `{field}` must not contain line breaks")]
    MultilineField { field: &'static str },

    #[error("failed to read test output from {path}")]
    ReadOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
