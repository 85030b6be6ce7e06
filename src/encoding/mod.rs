//! Utilities for percent-encoding.

pub mod form;
pub mod table;

use crate::error::ParseErrorKind;
use alloc::{
    borrow::Cow,
    string::{String, ToString},
    vec::Vec,
};
use table::Table;

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xff; 256];
    let shift = (hi as u8) * 4;

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

static OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
static OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Decodes a percent-encoded octet.
fn decode_octet(mut hi: u8, mut lo: u8) -> Option<u8> {
    hi = OCTET_TABLE_HI[hi as usize];
    lo = OCTET_TABLE_LO[lo as usize];
    if hi & 1 == 0 && lo & 0x80 == 0 {
        Some(hi | lo)
    } else {
        None
    }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

fn push_pct_encoded(buf: &mut String, x: u8) {
    buf.push('%');
    buf.push(HEX_DIGITS[(x >> 4) as usize] as char);
    buf.push(HEX_DIGITS[(x & 0xf) as usize] as char);
}

/// Percent-encodes the bytes of a string that are not allowed by the table.
///
/// Returns the input unchanged when every byte is allowed.
///
/// # Examples
///
/// ```
/// use http_uri::encoding::{encode, table};
///
/// assert_eq!(encode("rfc2396.txt", table::PCHAR), "rfc2396.txt");
/// assert_eq!(encode("100% sure", table::PCHAR), "100%25%20sure");
/// ```
#[must_use]
pub fn encode(s: &str, table: Table) -> Cow<'_, str> {
    if s.bytes().all(|x| table.allows(x)) {
        return Cow::Borrowed(s);
    }
    let mut buf = String::with_capacity(s.len());
    for x in s.bytes() {
        if table.allows(x) {
            buf.push(x as char);
        } else {
            push_pct_encoded(&mut buf, x);
        }
    }
    Cow::Owned(buf)
}

/// Decodes the percent-encoded octets in a string.
///
/// Decoding is lenient and total: a `%` that is not followed by two
/// hexadecimal digits passes through unchanged, and decoded octets that
/// do not form valid UTF-8 are replaced with `U+FFFD`.
///
/// # Examples
///
/// ```
/// use http_uri::encoding::decode;
///
/// assert_eq!(decode("rfc2396.txt"), "rfc2396.txt");
/// assert_eq!(decode("100%25%20sure"), "100% sure");
/// ```
#[must_use]
pub fn decode(s: &str) -> Cow<'_, str> {
    decode_with(s, false)
}

/// Decodes percent-encoded octets, optionally mapping `+` to a space.
pub(crate) fn decode_with(s: &str, plus_as_space: bool) -> Cow<'_, str> {
    if !s.bytes().any(|x| x == b'%' || (plus_as_space && x == b'+')) {
        return Cow::Borrowed(s);
    }

    let bytes = s.as_bytes();
    let mut buf = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let x = bytes[i];
        if x == b'%' && i + 2 < bytes.len() {
            if let Some(octet) = decode_octet(bytes[i + 1], bytes[i + 2]) {
                buf.push(octet);
                i += 3;
                continue;
            }
        }
        if plus_as_space && x == b'+' {
            buf.push(b' ');
        } else {
            buf.push(x);
        }
        i += 1;
    }

    match String::from_utf8(buf) {
        Ok(s) => Cow::Owned(s),
        Err(e) => Cow::Owned(String::from_utf8_lossy(e.as_bytes()).to_string()),
    }
}

/// Validates a string against a table, tracking the index of the first
/// offending byte.
///
/// Percent-encoded octets are accepted only when the table allows them,
/// and must be complete hexadecimal pairs.
pub(crate) fn validate(s: &str, table: Table) -> Result<(), (usize, ParseErrorKind)> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let x = bytes[i];
        if x == b'%' && table.allows_pct_encoded() {
            if i + 2 >= bytes.len() || decode_octet(bytes[i + 1], bytes[i + 2]).is_none() {
                return Err((i, ParseErrorKind::InvalidOctet));
            }
            i += 3;
        } else if table.allows(x) {
            i += 1;
        } else {
            return Err((i, ParseErrorKind::UnexpectedChar));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::borrow::Cow;

    #[test]
    fn encode_borrows_when_clean() {
        assert!(matches!(encode("abc", table::PCHAR), Cow::Borrowed("abc")));
        assert!(matches!(encode("a c", table::PCHAR), Cow::Owned(_)));
    }

    #[test]
    fn decode_is_lenient() {
        assert_eq!(decode("100%"), "100%");
        assert_eq!(decode("a%2zb"), "a%2zb");
        assert_eq!(decode("%C3%A9"), "\u{e9}");
        // Invalid UTF-8 octets are replaced.
        assert_eq!(decode("%FF"), "\u{fffd}");
    }

    #[test]
    fn validate_tracks_index() {
        assert_eq!(validate("a b", table::PCHAR), Err((1, ParseErrorKind::UnexpectedChar)));
        assert_eq!(validate("ab%4", table::PCHAR), Err((2, ParseErrorKind::InvalidOctet)));
        assert_eq!(validate("ab%zz", table::PCHAR), Err((2, ParseErrorKind::InvalidOctet)));
        assert_eq!(validate("ab%41", table::PCHAR), Ok(()));
        // The scheme table does not allow percent-encoded octets at all.
        assert_eq!(validate("a%41", table::SCHEME), Err((1, ParseErrorKind::UnexpectedChar)));
    }
}
