//! Strict UTF-8 validation and decoding.
//!
//! Two decoders live here. [`decode_checked`] enforces every well-formedness
//! rule and is used for the validation pass. The crate-internal `decode_trusted`
//! skips all checks and may only be fed input that [`validate`] has already
//! accepted; [`CodePoints`] is the public way to walk validated text.

use std::fmt;

pub const MAX_CODE_POINT: u32 = 0x10FFFF;
pub const SURROGATE_START: u32 = 0xD800;
pub const SURROGATE_END: u32 = 0xDFFF;

/// Why a byte sequence was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8ErrorKind {
    /// A continuation byte or `0xF8..=0xFF` where a sequence must start.
    InvalidLeadByte,
    /// Fewer bytes remain than the lead byte declares.
    Truncated,
    /// A trailing byte does not match `10xxxxxx`.
    BadContinuation,
    /// The value fits in fewer bytes than were used.
    Overlong,
    /// UTF-16 surrogate range.
    Surrogate,
    /// Above U+10FFFF.
    OutOfRange,
    /// U+FDD0..U+FDEF or any code point ending in FFFE/FFFF.
    Noncharacter,
}

impl fmt::Display for Utf8ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Utf8ErrorKind::InvalidLeadByte => "invalid lead byte",
            Utf8ErrorKind::Truncated => "truncated sequence",
            Utf8ErrorKind::BadContinuation => "malformed continuation byte",
            Utf8ErrorKind::Overlong => "overlong encoding",
            Utf8ErrorKind::Surrogate => "surrogate code point",
            Utf8ErrorKind::OutOfRange => "code point beyond U+10FFFF",
            Utf8ErrorKind::Noncharacter => "noncharacter code point",
        };
        f.write_str(text)
    }
}

/// A rejected sequence and the byte offset where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at byte {offset}")]
pub struct Utf8Error {
    pub offset: usize,
    pub kind: Utf8ErrorKind,
}

/// Number of bytes a sequence starting with `lead` occupies.
pub fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        _ if lead & 0xE0 == 0xC0 => Some(2),
        _ if lead & 0xF0 == 0xE0 => Some(3),
        _ if lead & 0xF8 == 0xF0 => Some(4),
        _ => None,
    }
}

/// Smallest value that legitimately needs `len` bytes.
fn min_value_for_len(len: usize) -> u32 {
    match len {
        2 => 0x80,
        3 => 0x800,
        4 => 0x10000,
        _ => 0,
    }
}

fn lead_bits(lead: u8, len: usize) -> u32 {
    let mask = match len {
        1 => 0x7F,
        2 => 0x1F,
        3 => 0x0F,
        _ => 0x07,
    };
    u32::from(lead & mask)
}

pub fn is_noncharacter(code_point: u32) -> bool {
    (0xFDD0..=0xFDEF).contains(&code_point) || code_point & 0xFFFE == 0xFFFE
}

/// Decode the code point starting at `offset`, enforcing every validity rule.
///
/// Returns the code point and the number of bytes it occupies.
///
/// ```
/// use slugsmith_engine::utf8::{Utf8ErrorKind, decode_checked};
///
/// assert_eq!(decode_checked("ñ".as_bytes(), 0), Ok((0xF1, 2)));
/// let err = decode_checked(&[0xC0, 0xAF], 0).unwrap_err();
/// assert_eq!(err.kind, Utf8ErrorKind::Overlong);
/// ```
pub fn decode_checked(bytes: &[u8], offset: usize) -> Result<(u32, usize), Utf8Error> {
    let fail = |kind| Utf8Error { offset, kind };

    let lead = *bytes.get(offset).ok_or(fail(Utf8ErrorKind::Truncated))?;
    let len = sequence_len(lead).ok_or(fail(Utf8ErrorKind::InvalidLeadByte))?;
    if len == 1 {
        return Ok((u32::from(lead), 1));
    }

    let tail = bytes
        .get(offset + 1..offset + len)
        .ok_or(fail(Utf8ErrorKind::Truncated))?;
    let mut code_point = lead_bits(lead, len);
    for &byte in tail {
        if byte & 0xC0 != 0x80 {
            return Err(fail(Utf8ErrorKind::BadContinuation));
        }
        code_point = (code_point << 6) | u32::from(byte & 0x3F);
    }

    if code_point < min_value_for_len(len) {
        return Err(fail(Utf8ErrorKind::Overlong));
    }
    if code_point > MAX_CODE_POINT {
        return Err(fail(Utf8ErrorKind::OutOfRange));
    }
    if (SURROGATE_START..=SURROGATE_END).contains(&code_point) {
        return Err(fail(Utf8ErrorKind::Surrogate));
    }
    if is_noncharacter(code_point) {
        return Err(fail(Utf8ErrorKind::Noncharacter));
    }

    Ok((code_point, len))
}

/// Decode without any checks. `bytes` must already have passed [`validate`].
///
/// Panics if a sequence runs past the end of `bytes`.
pub(crate) fn decode_trusted(bytes: &[u8], offset: usize) -> (u32, usize) {
    let lead = bytes[offset];
    let len = sequence_len(lead).unwrap_or(1);
    let code_point = bytes[offset + 1..offset + len]
        .iter()
        .fold(lead_bits(lead, len), |acc, &byte| (acc << 6) | u32::from(byte & 0x3F));
    (code_point, len)
}

impl From<std::str::Utf8Error> for Utf8Error {
    fn from(err: std::str::Utf8Error) -> Self {
        let kind = match err.error_len() {
            None => Utf8ErrorKind::Truncated,
            Some(_) => Utf8ErrorKind::BadContinuation,
        };
        Utf8Error {
            offset: err.valid_up_to(),
            kind,
        }
    }
}

/// Scan the whole input; the first bad sequence rejects all of it.
pub fn validate(bytes: &[u8]) -> Result<(), Utf8Error> {
    let mut offset = 0;
    while offset < bytes.len() {
        let (_, len) = decode_checked(bytes, offset)?;
        offset += len;
    }
    Ok(())
}

/// Iterator over already-validated input, yielding each code point with
/// the bytes that encode it.
pub struct CodePoints<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> CodePoints<'a> {
    /// Validate `bytes` up front and iterate with the trusted decoder.
    pub fn new(bytes: &'a [u8]) -> Result<Self, Utf8Error> {
        validate(bytes)?;
        Ok(Self::assume_valid(bytes))
    }

    /// Iterate input that has already been through [`validate`].
    pub(crate) fn assume_valid(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }
}

impl<'a> Iterator for CodePoints<'a> {
    type Item = (u32, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.bytes.len() {
            return None;
        }
        let start = self.offset;
        let (code_point, len) = decode_trusted(self.bytes, start);
        self.offset += len;
        Some((code_point, &self.bytes[start..start + len]))
    }
}
