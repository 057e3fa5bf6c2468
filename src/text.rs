use tracing::{debug, trace};

use crate::TransformError;

/// Maps every `char` of `s` with `f` into a new [String]
pub fn transform_chars<F>(s: &str, f: F) -> String
where F: FnMut(char) -> char {
    trace!(len = s.len(), "transform chars");
    s.chars().map(f).collect()
}

/// Maps every ASCII byte of `s` in place with `f`.
///
/// Non-ASCII characters are skipped. If `f` returns a byte which is not ASCII,
/// the transform stops with [TransformError::NonAsciiOutput] before writing it, so
/// `s` is always left as valid UTF-8.
///
/// ```
/// let mut s = String::from("welcome to somewhere");
/// elementwise::transform_ascii_in_place(&mut s, |b| b.to_ascii_uppercase()).unwrap();
/// assert_eq!(s, "WELCOME TO SOMEWHERE");
/// ```
pub fn transform_ascii_in_place<F>(s: &mut str, mut f: F) -> Result<(), TransformError>
where F: FnMut(u8) -> u8 {
    trace!(len = s.len(), "transform ascii in place");

    // SAFETY: only ASCII bytes are replaced, and only by ASCII bytes, which keeps every
    // multi-byte sequence intact.
    let bytes = unsafe { s.as_bytes_mut() };
    for (index, byte) in bytes.iter_mut().enumerate() {
        if !byte.is_ascii() {
            continue;
        }

        let mapped = f(*byte);
        if !mapped.is_ascii() {
            debug!(index, byte = mapped, "mapping produced a non-ASCII byte");
            return Err(TransformError::NonAsciiOutput { index, byte: mapped });
        }
        *byte = mapped;
    }
    Ok(())
}
