//! Byte pattern tables from RFC 3986.
//!
//! The predefined table constants in this module are documented with
//! the ABNF notation of [RFC 5234].
//!
//! [RFC 5234]: https://datatracker.ietf.org/doc/html/rfc5234

const MASK_PCT_ENCODED: u64 = 1 << b'%';
const MASK_UNENCODED_ASCII: u64 = !MASK_PCT_ENCODED;

/// A table specifying the byte patterns allowed in a string.
#[derive(Clone, Copy, Debug)]
pub struct Table(u64, u64);

impl Table {
    /// Creates a table that only allows the given unencoded bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII or equals `b'%'`.
    #[must_use]
    pub const fn new(mut bytes: &[u8]) -> Self {
        let mut table = 0u128;
        while let [cur, rem @ ..] = bytes {
            let x = *cur;
            assert!(x != b'%' && x < 128, "cannot allow non-ASCII byte or %");
            table |= 1u128.wrapping_shl(x as u32);
            bytes = rem;
        }
        Self(table as u64, (table >> 64) as u64)
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the byte patterns allowed
    /// by `self` or by `other`.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0, self.1 | other.1)
    }

    /// Marks this table as allowing percent-encoded octets.
    #[must_use]
    pub const fn or_pct_encoded(self) -> Self {
        Self(self.0 | MASK_PCT_ENCODED, self.1)
    }

    /// Checks whether the given unencoded byte is allowed by the table.
    #[inline]
    #[must_use]
    pub const fn allows(self, x: u8) -> bool {
        let table = if x < 64 {
            self.0 & MASK_UNENCODED_ASCII
        } else if x < 128 {
            self.1
        } else {
            0
        };
        table & 1u64.wrapping_shl(x as u32) != 0
    }

    /// Checks whether percent-encoded octets are allowed by the table.
    #[inline]
    #[must_use]
    pub const fn allows_pct_encoded(self) -> bool {
        self.0 & MASK_PCT_ENCODED != 0
    }

    /// Validates a string that may not contain percent-encoded octets.
    pub(crate) const fn validate(self, s: &[u8]) -> bool {
        let mut i = 0;
        while i < s.len() {
            if !self.allows(s[i]) {
                return false;
            }
            i += 1;
        }
        true
    }
}

const fn new(bytes: &[u8]) -> Table {
    Table::new(bytes)
}

/// ALPHA = A-Z / a-z
pub const ALPHA: Table = new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// DIGIT = 0-9
pub const DIGIT: Table = new(b"0123456789");

/// HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"
pub const HEXDIG: Table = DIGIT.or(new(b"ABCDEFabcdef"));

/// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
pub const SCHEME: Table = ALPHA.or(DIGIT).or(new(b"+-."));

/// userinfo = *( unreserved / pct-encoded / sub-delims / ":" )
pub const USERINFO: Table = UNRESERVED.or(SUB_DELIMS).or(new(b":")).or_pct_encoded();

/// reg-name = *( unreserved / pct-encoded / sub-delims )
pub const REG_NAME: Table = UNRESERVED.or(SUB_DELIMS).or_pct_encoded();

/// pchar = unreserved / pct-encoded / sub-delims / ":" / "@"
pub const PCHAR: Table = UNRESERVED.or(SUB_DELIMS).or(new(b":@")).or_pct_encoded();

/// path = *( pchar / "/" )
pub const PATH: Table = PCHAR.or(new(b"/"));

/// query = *( pchar / "/" / "?" )
pub const QUERY: Table = PCHAR.or(new(b"/?"));

/// fragment = *( pchar / "/" / "?" )
pub const FRAGMENT: Table = QUERY;

/// unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
pub const UNRESERVED: Table = ALPHA.or(DIGIT).or(new(b"-._~"));

/// sub-delims = "!" / "$" / "&" / "'" / "(" / ")"
///            / "*" / "+" / "," / ";" / "="
pub const SUB_DELIMS: Table = new(b"!$&'()*+,;=");

/// The bytes allowed unencoded inside an IPv6 address literal.
pub(crate) const IPV6_ADDR: Table = HEXDIG.or(new(b":."));

/// The bytes emitted unencoded by the form-url codec.
///
/// The space character is special-cased as `+` and is not part of this table.
pub(crate) const FORM_UNENCODED: Table = ALPHA.or(DIGIT).or(new(b"-._~"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_expected_bytes() {
        assert!(SCHEME.allows(b'a'));
        assert!(SCHEME.allows(b'+'));
        assert!(!SCHEME.allows(b':'));
        assert!(!SCHEME.allows(b'%'));

        assert!(QUERY.allows(b'?'));
        assert!(QUERY.allows(b'/'));
        assert!(!QUERY.allows(b'#'));

        assert!(REG_NAME.allows_pct_encoded());
        assert!(!SCHEME.allows_pct_encoded());

        // The percent mask must not leak into the unencoded check.
        assert!(!REG_NAME.allows(b'%'));
    }

    #[test]
    fn validate_rejects_disallowed() {
        assert!(SCHEME.validate(b"http"));
        assert!(SCHEME.validate(b"svn+ssh"));
        assert!(!SCHEME.validate(b"ht tp"));
        assert!(!DIGIT.validate(b"80a"));
        assert!(DIGIT.validate(b""));
    }
}
