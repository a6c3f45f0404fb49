use std::fmt;

use serde::Serialize;

use crate::TranslitEntry;

/// Integrity problem found in a transliteration table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableError {
    Unsorted { index: usize, previous: u32, code_point: u32 },
    DuplicateCodePoint { index: usize, code_point: u32 },
    NonAsciiReplacement { code_point: u32, ascii: String },
    AsciiAlphanumericKey { code_point: u32 },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Unsorted {
                index,
                previous,
                code_point,
            } => {
                write!(
                    f,
                    "entry {index} (U+{code_point:04X}) sorts before its predecessor U+{previous:04X}"
                )
            },
            TableError::DuplicateCodePoint { index, code_point } => {
                write!(f, "entry {index} repeats U+{code_point:04X}")
            },
            TableError::NonAsciiReplacement { code_point, ascii } => {
                write!(f, "U+{code_point:04X} maps to non-ASCII replacement {ascii:?}")
            },
            TableError::AsciiAlphanumericKey { code_point } => {
                write!(f, "U+{code_point:04X} is an ASCII letter or digit and must not be remapped")
            },
        }
    }
}

impl std::error::Error for TableError {}

/// Check the invariants lookups depend on: strictly ascending keys, ASCII-only
/// replacements, and no remapping of plain ASCII letters or digits.
///
/// ```
/// use slugsmith_data::{TRANSLIT_TABLE, validate_table};
///
/// assert!(validate_table(&TRANSLIT_TABLE).is_empty());
/// ```
pub fn validate_table(entries: &[TranslitEntry]) -> Vec<TableError> {
    let mut errors = Vec::new();

    for (index, pair) in entries.windows(2).enumerate() {
        let (previous, current) = (pair[0].code_point, pair[1].code_point);
        if current == previous {
            errors.push(TableError::DuplicateCodePoint {
                index: index + 1,
                code_point: current,
            });
        } else if current < previous {
            errors.push(TableError::Unsorted {
                index: index + 1,
                previous,
                code_point: current,
            });
        }
    }

    for entry in entries {
        if !entry.ascii.is_ascii() {
            errors.push(TableError::NonAsciiReplacement {
                code_point: entry.code_point,
                ascii: entry.ascii.to_string(),
            });
        }
        if u8::try_from(entry.code_point).is_ok_and(|b| b.is_ascii_alphanumeric()) {
            errors.push(TableError::AsciiAlphanumericKey {
                code_point: entry.code_point,
            });
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_table_is_clean() {
        let errors = validate_table(&crate::TRANSLIT_TABLE);
        assert!(errors.is_empty(), "table errors: {errors:?}");
    }

    #[test]
    fn out_of_order_entries_are_reported() {
        let entries = [
            TranslitEntry::new(0xFDFC, "rial"),
            TranslitEntry::new(0xFDF5, "laa"),
        ];
        let errors = validate_table(&entries);
        assert_eq!(
            errors,
            vec![TableError::Unsorted {
                index: 1,
                previous: 0xFDFC,
                code_point: 0xFDF5,
            }]
        );
    }

    #[test]
    fn duplicate_keys_are_reported() {
        let entries = [TranslitEntry::new(0xE9, "e"), TranslitEntry::new(0xE9, "e")];
        let errors = validate_table(&entries);
        assert!(
            errors
                .iter()
                .any(|err| matches!(err, TableError::DuplicateCodePoint { code_point: 0xE9, .. }))
        );
    }

    #[test]
    fn non_ascii_replacements_are_reported() {
        let entries = [TranslitEntry::new(0xE9, "é")];
        let errors = validate_table(&entries);
        assert!(matches!(errors.as_slice(), [TableError::NonAsciiReplacement { .. }]));
    }

    #[test]
    fn ascii_letters_cannot_be_remapped() {
        let entries = [TranslitEntry::new(u32::from(b'q'), "queue")];
        let errors = validate_table(&entries);
        assert!(matches!(
            errors.as_slice(),
            [TableError::AsciiAlphanumericKey { code_point: 0x71 }]
        ));
    }

    #[test]
    fn errors_serialize_with_kind_tag() {
        let err = TableError::DuplicateCodePoint {
            index: 3,
            code_point: 0x24,
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "duplicate_code_point");
        assert_eq!(json["code_point"], 0x24);
        assert_eq!(err.to_string(), "entry 3 repeats U+0024");
    }
}
