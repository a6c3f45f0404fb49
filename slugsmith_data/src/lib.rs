//! Shared transliteration data for slugsmith.

pub mod table;
pub mod validate;

pub use table::{TRANSLIT_TABLE, TranslitEntry};
pub use validate::{TableError, validate_table};

/// Look up the ASCII replacement for a code point.
///
/// Returns `None` when the table has no entry; `Some("")` means the
/// character is deliberately deleted.
///
/// ```
/// assert_eq!(slugsmith_data::lookup(0x20AC), Some("euro"));
/// assert_eq!(slugsmith_data::lookup(0x042C), Some(""));
/// assert_eq!(slugsmith_data::lookup(0x1F600), None);
/// ```
pub fn lookup(code_point: u32) -> Option<&'static str> {
    TRANSLIT_TABLE
        .binary_search_by_key(&code_point, |entry| entry.code_point)
        .ok()
        .map(|idx| TRANSLIT_TABLE[idx].ascii)
}

/// All table entries, in ascending code point order.
pub fn entries() -> &'static [TranslitEntry] {
    &TRANSLIT_TABLE
}

/// Number of entries in the shipped table.
pub fn len() -> usize {
    TRANSLIT_TABLE.len()
}
