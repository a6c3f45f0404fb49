/// Knobs for a single conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugOptions {
    /// Byte emitted between words: a space or ASCII punctuation. Symbols the
    /// table spells out (`$ % & < > |`) are refused, since slugs would no longer
    /// convert to themselves.
    pub separator: u8,
    /// Hard ceiling on output bytes; `0` means unbounded.
    pub max_length: usize,
    /// Keep ASCII case and copy non-ASCII characters through untouched.
    pub preserve_case: bool,
}

pub const DEFAULT_SEPARATOR: u8 = b'-';

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            max_length: 0,
            preserve_case: false,
        }
    }
}

impl SlugOptions {
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_preserve_case(mut self, preserve_case: bool) -> Self {
        self.preserve_case = preserve_case;
        self
    }

    /// True once `len` output bytes have used up the length budget.
    pub(crate) fn length_reached(&self, len: usize) -> bool {
        self.max_length > 0 && len >= self.max_length
    }

    pub(crate) fn fold(&self, byte: u8) -> u8 {
        if self.preserve_case {
            byte
        } else {
            byte.to_ascii_lowercase()
        }
    }
}
