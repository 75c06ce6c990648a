/*!
# Core Module

Shared types for the locator: hyperlink spans, error types and
filesystem helpers.
*/

pub mod errors;
pub mod fs_utils;
pub mod position;

pub use errors::LocatorError;
pub use fs_utils::{decode_lossy, is_regular_file, read_output_file};
pub use position::HyperlinkSpan;
