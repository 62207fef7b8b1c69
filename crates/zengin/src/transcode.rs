//! Shift_JIS transcoding of finished records.

use encoding_rs::SHIFT_JIS;

use crate::error::{ZenginError, ZenginResult};

/// Record separator.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Joins lines with CR LF and encodes the result as Shift_JIS.
///
/// No terminator follows the last line. Normalized records only contain
/// single-byte characters, so an unmappable character means a record was
/// built without normalization; it is reported instead of being replaced.
///
/// # Example
///
/// ```
/// use zengin::transcode::encode;
///
/// let bytes = encode(&["ｱ¥", "9"])?;
/// assert_eq!(bytes, [0xB1, 0x5C, b'\r', b'\n', b'9']);
/// # Ok::<(), zengin::ZenginError>(())
/// ```
pub fn encode<S: AsRef<str>>(lines: &[S]) -> ZenginResult<Vec<u8>> {
    let joined: String =
        lines.iter().map(|line| line.as_ref()).collect::<Vec<&str>>().join(LINE_TERMINATOR);

    let (bytes, _, had_errors) = SHIFT_JIS.encode(&joined);
    if had_errors {
        return Err(first_unmappable(&joined));
    }
    Ok(bytes.into_owned())
}

fn first_unmappable(text: &str) -> ZenginError {
    let mut buf = [0u8; 4];
    let character = text
        .chars()
        .find(|c| SHIFT_JIS.encode(c.encode_utf8(&mut buf)).2)
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    ZenginError::Unmappable { character }
}
