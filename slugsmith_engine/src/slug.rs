//! Transliterating slug builder.
//!
//! Conversion runs in two passes over the same code point stream. The first
//! validates strictly and sizes the worst-case output; the second decodes with
//! the trusted decoder and writes into a buffer of exactly that size, so its
//! only failure modes are capacity and empty output.

use slugsmith_data::lookup;

use crate::buffer::SlugBuffer;
use crate::utf8::{self, CodePoints};
use crate::{SlugError, SlugOptions};

/// What a single input code point turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// ASCII letter or digit, case-folded on output.
    Literal(u8),
    /// Table replacement; may be empty.
    Replace(&'static str),
    /// Whitespace or punctuation without a table entry.
    Separator,
    /// Non-ASCII copied byte-for-byte (`preserve_case` only).
    Verbatim,
    Drop,
}

impl Token {
    /// Upper bound on the bytes this token can write.
    fn cost(self, encoded_len: usize) -> usize {
        match self {
            Token::Literal(_) | Token::Separator => 1,
            Token::Replace(ascii) => ascii.len(),
            Token::Verbatim => encoded_len,
            Token::Drop => 0,
        }
    }
}

fn is_separator_char(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r') || byte.is_ascii_punctuation()
}

fn classify(code_point: u32, options: &SlugOptions) -> Token {
    if let Ok(byte) = u8::try_from(code_point)
        && byte.is_ascii()
    {
        if byte.is_ascii_alphanumeric() {
            Token::Literal(byte)
        } else if let Some(ascii) = lookup(code_point) {
            Token::Replace(ascii)
        } else if is_separator_char(byte) {
            Token::Separator
        } else {
            Token::Drop
        }
    } else if options.preserve_case {
        Token::Verbatim
    } else {
        lookup(code_point).map_or(Token::Drop, Token::Replace)
    }
}

/// Punctuation with its own table entry (`$`, `&`, `|` ...) is spelled out
/// in slugs, so it cannot double as the separator.
fn check_separator(options: &SlugOptions) -> Result<(), SlugError> {
    let separator = options.separator;
    let usable = separator == b' ' || separator.is_ascii_punctuation();
    if usable && lookup(u32::from(separator)).is_none() {
        Ok(())
    } else {
        Err(SlugError::InvalidSeparator(separator))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

struct SlugWriter<'b> {
    buf: SlugBuffer<'b>,
    options: SlugOptions,
}

impl SlugWriter<'_> {
    fn full(&self) -> bool {
        self.options.length_reached(self.buf.len())
    }

    fn token(&mut self, token: Token, raw: &[u8]) -> Result<Flow, SlugError> {
        match token {
            Token::Literal(byte) => self.ascii(byte),
            Token::Separator => self.separator(),
            Token::Replace(ascii) => {
                for &byte in ascii.as_bytes() {
                    if self.ascii(byte)? == Flow::Stop {
                        return Ok(Flow::Stop);
                    }
                }
                Ok(Flow::Continue)
            },
            Token::Verbatim => self.verbatim(raw),
            Token::Drop => Ok(Flow::Continue),
        }
    }

    /// Replacement text can carry spaces and punctuation ("(c)", "french
    /// franc"); those go through the separator rule like input punctuation.
    fn ascii(&mut self, byte: u8) -> Result<Flow, SlugError> {
        if !byte.is_ascii_alphanumeric() {
            return self.separator();
        }
        if self.full() {
            return Ok(Flow::Stop);
        }
        self.buf.push(self.options.fold(byte))?;
        Ok(Flow::Continue)
    }

    /// Never leads, never doubles.
    fn separator(&mut self) -> Result<Flow, SlugError> {
        let separator = self.options.separator;
        if self.buf.is_empty() || self.buf.last() == Some(separator) {
            return Ok(Flow::Continue);
        }
        if self.full() {
            return Ok(Flow::Stop);
        }
        self.buf.push(separator)?;
        Ok(Flow::Continue)
    }

    /// A code point is never split, so one that would cross `max_length` ends the scan.
    fn verbatim(&mut self, raw: &[u8]) -> Result<Flow, SlugError> {
        let max = self.options.max_length;
        if max > 0 && self.buf.len() + raw.len() > max {
            return Ok(Flow::Stop);
        }
        self.buf.extend(raw)?;
        Ok(Flow::Continue)
    }

    fn finish(mut self) -> Result<usize, SlugError> {
        if self.buf.last() == Some(self.options.separator) {
            self.buf.pop();
        }
        if self.buf.is_empty() {
            return Err(SlugError::EmptyResult);
        }
        Ok(self.buf.finish())
    }
}

/// Writing pass. `input` must already have been validated.
fn write_validated(input: &[u8], out: &mut [u8], options: &SlugOptions) -> Result<usize, SlugError> {
    let mut writer = SlugWriter {
        buf: SlugBuffer::new(out),
        options: *options,
    };
    for (code_point, raw) in CodePoints::assume_valid(input) {
        if writer.full() {
            break;
        }
        if writer.token(classify(code_point, options), raw)? == Flow::Stop {
            break;
        }
    }
    writer.finish()
}

/// Validate `input` and return the buffer size a conversion needs, terminator
/// included.
///
/// ```
/// use slugsmith_engine::{SlugOptions, required_capacity};
///
/// let opts = SlugOptions::default();
/// assert_eq!(required_capacity(b"Hello", &opts), Ok(6));
/// assert_eq!(required_capacity("\u{20AC}5".as_bytes(), &opts), Ok(6));
/// assert!(required_capacity(&[0xC0, 0xAF], &opts).is_err());
/// ```
pub fn required_capacity(input: &[u8], options: &SlugOptions) -> Result<usize, SlugError> {
    check_separator(options)?;
    let mut total = 1;
    let mut offset = 0;
    while offset < input.len() {
        let (code_point, len) = utf8::decode_checked(input, offset)?;
        total += classify(code_point, options).cost(len);
        offset += len;
    }
    Ok(total)
}

/// Convert into a caller-supplied buffer.
///
/// On success the slug occupies `out[..len]` and `out[len]` is `0`. Nothing
/// is written when the input fails validation.
///
/// # Errors
/// `InvalidInput` for malformed input or a bad separator, `BufferExceeded`
/// when `out` is too small, `EmptyResult` when nothing survives conversion.
pub fn slugify_into(input: &[u8], out: &mut [u8], options: &SlugOptions) -> Result<usize, SlugError> {
    check_separator(options)?;
    utf8::validate(input)?;
    write_validated(input, out, options)
}

/// Convert `input` into a freshly allocated slug.
///
/// The buffer is sized from [`required_capacity`]; on any failure it is
/// dropped and only the error is returned.
///
/// ```
/// use slugsmith_engine::{SlugOptions, slugify};
///
/// let opts = SlugOptions::default();
/// assert_eq!(slugify("Crème Brûlée".as_bytes(), &opts).unwrap(), b"creme-brulee");
/// assert!(slugify(&[0xC1, 0x81], &opts).is_err());
/// ```
pub fn slugify(input: &[u8], options: &SlugOptions) -> Result<Vec<u8>, SlugError> {
    let capacity = required_capacity(input, options)?;
    let mut out = Vec::new();
    out.try_reserve_exact(capacity)
        .map_err(|_| SlugError::AllocationFailure)?;
    out.resize(capacity, 0);
    let len = write_validated(input, &mut out, options)?;
    out.truncate(len);
    Ok(out)
}

/// [`slugify`] for text that is already a `&str`.
pub fn slugify_str(text: &str, options: &SlugOptions) -> Result<String, SlugError> {
    let bytes = slugify(text.as_bytes(), options)?;
    String::from_utf8(bytes).map_err(|err| SlugError::InvalidInput(err.utf8_error().into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn slug(text: &str) -> String {
        slugify_str(text, &SlugOptions::default()).unwrap()
    }

    fn slug_with(input: &[u8], options: SlugOptions) -> Result<Vec<u8>, SlugError> {
        slugify(input, &options)
    }

    #[test]
    fn ascii_words_are_joined() {
        assert_eq!(slug("Hello World"), "hello-world");
        assert_eq!(slug("hello   world"), "hello-world");
        assert_eq!(slug("snake_case and-dashes"), "snake-case-and-dashes");
        assert_eq!(slug("tabs\tand\nnewlines"), "tabs-and-newlines");
    }

    #[test]
    fn trailing_separators_are_trimmed() {
        assert_eq!(slug("hello!!"), "hello");
        assert_eq!(slug("hello - "), "hello");
    }

    #[test]
    fn leading_separators_are_never_emitted() {
        assert_eq!(slug("  hello"), "hello");
        assert_eq!(slug("!?-_ hello"), "hello");
        assert_eq!(slug("\u{2026}hello"), "hello");
        assert_eq!(slug("\u{00A9} acme"), "c-acme");
    }

    #[test]
    fn case_folding_follows_preserve_case() {
        assert_eq!(slug("Hello"), "hello");
        let kept = slug_with(b"Hello", SlugOptions::default().with_preserve_case(true)).unwrap();
        assert_eq!(kept, b"Hello");
    }

    #[test]
    fn non_ascii_is_transliterated_or_copied() {
        assert_eq!(slug("caf\u{00E9}"), "cafe");
        let kept = slug_with("caf\u{00E9}".as_bytes(), SlugOptions::default().with_preserve_case(true)).unwrap();
        assert_eq!(kept, "caf\u{00E9}".as_bytes());
    }

    #[test]
    fn scripts_and_symbols_transliterate() {
        assert_eq!(slug("Gr\u{00F6}\u{00DF}e"), "grosse");
        assert_eq!(slug("\u{041F}\u{0440}\u{0438}\u{0432}\u{0435}\u{0442} \u{043C}\u{0438}\u{0440}"), "privet-mir");
        assert_eq!(slug("100\u{20AC}"), "100euro");
        assert_eq!(slug("Acme\u{2122}"), "acmetm");
        assert_eq!(slug("\u{20A3} rate"), "french-franc-rate");
    }

    #[test]
    fn ascii_symbols_use_the_table() {
        assert_eq!(slug("Tom & Jerry"), "tom-and-jerry");
        assert_eq!(slug("50% off"), "50percent-off");
        assert_eq!(slug("a|b"), "aorb");
    }

    #[test]
    fn empty_replacements_delete() {
        // soft sign between consonants vanishes
        assert_eq!(slug("\u{043C}\u{044C}\u{043C}"), "mm");
    }

    #[test]
    fn control_bytes_are_dropped_silently() {
        assert_eq!(slug("a\u{0001}b"), "ab");
    }

    #[test]
    fn max_length_is_a_hard_cut() {
        let opts = SlugOptions::default().with_max_length(3);
        assert_eq!(slug_with(b"Hello", opts).unwrap(), b"hel");
        assert_eq!(slug_with("\u{20AC}uro".as_bytes(), opts).unwrap(), b"eur");
        let opts = SlugOptions::default().with_max_length(6);
        assert_eq!(slug_with(b"hello world", opts).unwrap(), b"hello");
    }

    #[test]
    fn max_length_never_splits_verbatim_code_points() {
        let opts = SlugOptions::default().with_max_length(4).with_preserve_case(true);
        assert_eq!(slug_with("caf\u{00E9}".as_bytes(), opts).unwrap(), b"caf");
        let opts = opts.with_max_length(5);
        assert_eq!(slug_with("caf\u{00E9}".as_bytes(), opts).unwrap(), "caf\u{00E9}".as_bytes());
    }

    #[test]
    fn custom_separator() {
        let opts = SlugOptions::default().with_separator(b'_');
        assert_eq!(slug_with(b"Hello big-world", opts).unwrap(), b"hello_big_world");
        let opts = SlugOptions::default().with_separator(b'.');
        assert_eq!(slug_with(b"one two", opts).unwrap(), b"one.two");
    }

    #[test]
    fn spelled_out_symbols_cannot_be_separators() {
        for sep in [b'$', b'%', b'&', b'<', b'>', b'|'] {
            let err = slug_with(b"one two", SlugOptions::default().with_separator(sep)).unwrap_err();
            assert_eq!(err, SlugError::InvalidSeparator(sep));
        }
    }

    #[test]
    fn custom_separator_output_is_a_fixed_point() {
        for sep in [b'.', b'_', b'~', b'+'] {
            let opts = SlugOptions::default().with_separator(sep);
            let once = slug_with(b"Fish & Chips | 100% $5", opts).unwrap();
            assert_eq!(slug_with(&once, opts).unwrap(), once);
        }
    }

    #[test]
    fn unusable_separators_are_rejected() {
        for sep in [b'x', b'7', 0x00, 0xE9] {
            let err = slug_with(b"hello world", SlugOptions::default().with_separator(sep)).unwrap_err();
            assert_eq!(err, SlugError::InvalidSeparator(sep));
        }
    }

    #[test]
    fn empty_results_fail() {
        assert_eq!(slug_with(b"!!!", SlugOptions::default()), Err(SlugError::EmptyResult));
        assert_eq!(slug_with(b"", SlugOptions::default()), Err(SlugError::EmptyResult));
        let unmapped = "\u{1F600}\u{1F680}".as_bytes();
        assert_eq!(slug_with(unmapped, SlugOptions::default()), Err(SlugError::EmptyResult));
    }

    #[test]
    fn invalid_input_anywhere_rejects_everything() {
        let mixed = [0xC3, 0xB1, 0xC0, 0xAF, 0x41];
        let err = slug_with(&mixed, SlugOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let embedded = b"hello\xC0\x80world";
        assert!(slug_with(embedded, SlugOptions::default()).is_err());
    }

    #[test]
    fn overlong_rejection_ignores_options() {
        let variants = [
            SlugOptions::default().with_preserve_case(true),
            SlugOptions::default().with_separator(b'_'),
            SlugOptions::default().with_max_length(5),
            SlugOptions::default().with_separator(b'.').with_max_length(100).with_preserve_case(true),
        ];
        for opts in variants {
            assert!(slug_with(&[0xC1, 0x81], opts).is_err());
            assert!(slug_with(b"Hello\xC0\xAFWorld", opts).is_err());
        }
    }

    #[test]
    fn capacity_estimate_matches_costs() {
        let opts = SlugOptions::default();
        // 3 literals, 3 separators, "dollar", an unmapped emoji, the terminator
        assert_eq!(required_capacity("a b $ c\u{1F600}".as_bytes(), &opts), Ok(13));
        let opts = opts.with_preserve_case(true);
        assert_eq!(required_capacity("\u{00E9}".as_bytes(), &opts), Ok(3));
    }

    #[test]
    fn slugify_into_writes_terminator() {
        let mut out = [0xFFu8; 16];
        let len = slugify_into(b"Hi There", &mut out, &SlugOptions::default()).unwrap();
        assert_eq!(&out[..len], b"hi-there");
        assert_eq!(out[len], 0);
    }

    #[test]
    fn slugify_into_reports_small_buffers() {
        let mut out = [0u8; 4];
        let err = slugify_into(b"Hello", &mut out, &SlugOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BufferExceeded);

        // exactly content + terminator fits
        let mut out = [0u8; 6];
        assert_eq!(slugify_into(b"Hello", &mut out, &SlugOptions::default()), Ok(5));
    }

    #[test]
    fn slugify_into_leaves_buffer_untouched_on_invalid_input() {
        let mut out = [0x55u8; 8];
        assert!(slugify_into(b"ab\xED\xA0\x80", &mut out, &SlugOptions::default()).is_err());
        assert_eq!(out, [0x55u8; 8]);
    }
}
