//! Decimal text ↔ `i32` conversion with strict overflow detection.
//!
//! Transition fields arrive as plain text (`"300"`, `"  42px"`, `"-1"`).
//! The parser accepts the leading numeric run and ignores whatever
//! follows it; overflow saturates to the representable extreme but is
//! still reported as an error, so callers can distinguish a clean parse
//! from a clamped one.

use thiserror::Error;

/// Minimum buffer size for [`format_i32`]: `i32::MIN` renders as eleven
/// bytes, plus one spare for the historical terminator slot.
pub const MIN_FORMAT_BUF: usize = 12;

/// Failure modes of [`parse_i32`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseIntError {
    /// The input was empty.
    #[error("empty numeric text")]
    Empty,
    /// The first character after optional spaces and sign was not a digit.
    #[error("no leading digits in numeric text")]
    Malformed,
    /// Accumulation overflowed; `clamped` is the saturated value matching
    /// the sign of the input.
    #[error("numeric text overflows i32 (clamped to {clamped})")]
    Overflow { clamped: i32 },
}

/// Failure modes of [`format_i32`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The output buffer holds fewer than [`MIN_FORMAT_BUF`] bytes.
    #[error("format buffer too small: need {needed} bytes, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
}

/// Parse a decimal `i32` from text.
///
/// Leading ASCII spaces are skipped, a single `+`/`-` sign is accepted,
/// and parsing stops at the first non-digit after the digit run (trailing
/// garbage such as `"42px"` is not an error). On overflow the returned
/// error carries the value clamped to `i32::MIN`/`i32::MAX` according to
/// the sign.
pub fn parse_i32(text: &str) -> Result<i32, ParseIntError> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return Err(ParseIntError::Empty);
    }

    let mut i = 0;
    while i < bytes.len() && bytes[i] == b' ' {
        i += 1;
    }

    let mut negative = false;
    if i < bytes.len() {
        match bytes[i] {
            b'-' => {
                negative = true;
                i += 1;
            }
            b'+' => i += 1,
            _ => {}
        }
    }

    if i >= bytes.len() || !bytes[i].is_ascii_digit() {
        return Err(ParseIntError::Malformed);
    }

    // Magnitude accumulates in unsigned space so `i32::MIN` (whose
    // magnitude exceeds `i32::MAX`) parses without wrapping.
    let bound: u32 = if negative {
        i32::MAX as u32 + 1
    } else {
        i32::MAX as u32
    };

    let mut magnitude: u32 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        let digit = (bytes[i] - b'0') as u32;
        if magnitude > bound / 10 || (magnitude == bound / 10 && digit > bound % 10) {
            let clamped = if negative { i32::MIN } else { i32::MAX };
            return Err(ParseIntError::Overflow { clamped });
        }
        magnitude = magnitude * 10 + digit;
        i += 1;
    }

    Ok(if negative {
        (-(magnitude as i64)) as i32
    } else {
        magnitude as i32
    })
}

/// Parse a decimal `i32`, folding failures into a usable value.
///
/// Clean parses and clamped overflows yield their numeric value; empty or
/// malformed text yields `0`. This is the calling mode percent resolution
/// uses, where a bad percentage degrades to "0%" rather than erroring.
pub fn parse_i32_lossy(text: &str) -> i32 {
    match parse_i32(text) {
        Ok(value) => value,
        Err(ParseIntError::Overflow { clamped }) => clamped,
        Err(_) => 0,
    }
}

/// Render `value` as decimal text into `buf`, returning the byte count
/// written.
///
/// Requires `buf.len() >= MIN_FORMAT_BUF`. The `i32::MIN` edge case is
/// handled through its unsigned magnitude.
pub fn format_i32(value: i32, buf: &mut [u8]) -> Result<usize, FormatError> {
    if buf.len() < MIN_FORMAT_BUF {
        return Err(FormatError::BufferTooSmall {
            needed: MIN_FORMAT_BUF,
            got: buf.len(),
        });
    }

    let negative = value < 0;
    let mut magnitude = value.unsigned_abs();

    let mut len = 0;
    loop {
        buf[len] = b'0' + (magnitude % 10) as u8;
        magnitude /= 10;
        len += 1;
        if magnitude == 0 {
            break;
        }
    }
    if negative {
        buf[len] = b'-';
        len += 1;
    }
    buf[..len].reverse();

    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(value: i32) -> Result<i32, ParseIntError> {
        let mut buf = [0u8; MIN_FORMAT_BUF];
        let len = format_i32(value, &mut buf).unwrap();
        parse_i32(std::str::from_utf8(&buf[..len]).unwrap())
    }

    #[test]
    fn test_parse_simple() {
        assert_eq!(parse_i32("0"), Ok(0));
        assert_eq!(parse_i32("42"), Ok(42));
        assert_eq!(parse_i32("-42"), Ok(-42));
        assert_eq!(parse_i32("+7"), Ok(7));
    }

    #[test]
    fn test_parse_skips_leading_spaces_and_trailing_garbage() {
        assert_eq!(parse_i32("  42px"), Ok(42));
        assert_eq!(parse_i32(" -10%"), Ok(-10));
        assert_eq!(parse_i32("300ms"), Ok(300));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(parse_i32(""), Err(ParseIntError::Empty));
        assert_eq!(parse_i32("abc"), Err(ParseIntError::Malformed));
        assert_eq!(parse_i32("--5"), Err(ParseIntError::Malformed));
        assert_eq!(parse_i32("-"), Err(ParseIntError::Malformed));
        assert_eq!(parse_i32("   "), Err(ParseIntError::Malformed));
    }

    #[test]
    fn test_parse_boundaries() {
        assert_eq!(parse_i32("2147483647"), Ok(i32::MAX));
        assert_eq!(parse_i32("-2147483648"), Ok(i32::MIN));
    }

    #[test]
    fn test_parse_overflow_clamps() {
        assert_eq!(
            parse_i32("2147483648"),
            Err(ParseIntError::Overflow { clamped: i32::MAX })
        );
        assert_eq!(
            parse_i32("-2147483649"),
            Err(ParseIntError::Overflow { clamped: i32::MIN })
        );
        assert_eq!(
            parse_i32("99999999999"),
            Err(ParseIntError::Overflow { clamped: i32::MAX })
        );
    }

    #[test]
    fn test_parse_lossy() {
        assert_eq!(parse_i32_lossy("50"), 50);
        assert_eq!(parse_i32_lossy("2147483648"), i32::MAX);
        assert_eq!(parse_i32_lossy("-2147483649"), i32::MIN);
        assert_eq!(parse_i32_lossy("abc"), 0);
        assert_eq!(parse_i32_lossy(""), 0);
    }

    #[test]
    fn test_format_basic() {
        let mut buf = [0u8; MIN_FORMAT_BUF];
        let len = format_i32(0, &mut buf).unwrap();
        assert_eq!(&buf[..len], b"0");

        let len = format_i32(-7, &mut buf).unwrap();
        assert_eq!(&buf[..len], b"-7");

        let len = format_i32(1234, &mut buf).unwrap();
        assert_eq!(&buf[..len], b"1234");
    }

    #[test]
    fn test_format_extremes() {
        let mut buf = [0u8; MIN_FORMAT_BUF];
        let len = format_i32(i32::MIN, &mut buf).unwrap();
        assert_eq!(&buf[..len], b"-2147483648");

        let len = format_i32(i32::MAX, &mut buf).unwrap();
        assert_eq!(&buf[..len], b"2147483647");
    }

    #[test]
    fn test_format_buffer_too_small() {
        let mut buf = [0u8; 11];
        assert_eq!(
            format_i32(1, &mut buf),
            Err(FormatError::BufferTooSmall { needed: 12, got: 11 })
        );
    }

    #[test]
    fn test_roundtrip() {
        for value in [
            0,
            1,
            -1,
            42,
            -42,
            100,
            99_999,
            -123_456_789,
            123_456_789,
            i32::MAX,
            i32::MIN,
            i32::MAX - 1,
            i32::MIN + 1,
        ] {
            assert_eq!(roundtrip(value), Ok(value));
        }
    }
}
