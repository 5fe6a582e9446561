//! One-shot CSV → JSON conversion.
//!
//! Reads a comma-delimited file (decoded as ISO-8859-1), fills missing cells
//! with a single-space placeholder, and writes the rows as a JSON document
//! under a top-level `data` key.

pub mod convert;
pub mod decode;
pub mod document;
pub mod error;
pub mod table;

pub use convert::{convert, Config, Summary};
pub use error::ConvertError;
