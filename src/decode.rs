use std::fs;
use std::path::Path;

use encoding_rs::mem::decode_latin1;
use tracing::debug;

use crate::error::ConvertError;

/// Read `path` and decode its bytes as ISO-8859-1.
///
/// Every byte maps to the code point of the same value, so the decode itself
/// cannot fail; files in an unknown single-byte encoding come through as
/// whatever Latin-1 says those bytes mean rather than aborting the run.
pub fn read_latin1(path: &Path) -> Result<String, ConvertError> {
    let bytes = fs::read(path).map_err(|e| ConvertError::file_access(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read input file");
    Ok(decode_latin1(&bytes).into_owned())
}
