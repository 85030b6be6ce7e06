//! The `application/x-www-form-urlencoded` style query codec.
//!
//! [`encode_pairs`] and [`decode_pairs`] are mutually inverse for all
//! name/value pairs: every byte outside the unreserved set is
//! percent-encoded on the way in and decoded on the way out, with the
//! space character written as `+`.

use super::{decode_with, push_pct_encoded, table};
use alloc::{borrow::Cow, string::String};

fn push_form_encoded(buf: &mut String, s: &str) {
    for x in s.bytes() {
        if table::FORM_UNENCODED.allows(x) {
            buf.push(x as char);
        } else if x == b' ' {
            buf.push('+');
        } else {
            push_pct_encoded(buf, x);
        }
    }
}

/// Encodes an ordered sequence of name/value pairs into a query string.
///
/// Pairs are joined by `&` and name/value by `=`. A pair with an absent
/// value renders as the bare name, without a trailing `=`.
///
/// # Examples
///
/// ```
/// use http_uri::encoding::form::encode_pairs;
///
/// let query = encode_pairs([("q", Some("rust uri")), ("page", Some("4")), ("raw", None)]);
/// assert_eq!(query, "q=rust+uri&page=4&raw");
/// ```
pub fn encode_pairs<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut buf = String::new();
    for (i, (name, value)) in pairs.into_iter().enumerate() {
        if i > 0 {
            buf.push('&');
        }
        push_form_encoded(&mut buf, name.as_ref());
        if let Some(value) = value {
            buf.push('=');
            push_form_encoded(&mut buf, value.as_ref());
        }
    }
    buf
}

/// Decodes a query string as an ordered sequence of name/value pairs.
///
/// This function is the inverse of [`encode_pairs`]. An empty input yields
/// an empty iterator. A name is never absent but may be empty; a value is
/// absent if its pair contains no `=`, and may otherwise be empty.
///
/// # Examples
///
/// ```
/// use http_uri::encoding::form::decode_pairs;
///
/// let mut pairs = decode_pairs("q=rust+uri&raw&empty=");
/// assert_eq!(pairs.next(), Some(("q".into(), Some("rust uri".into()))));
/// assert_eq!(pairs.next(), Some(("raw".into(), None)));
/// assert_eq!(pairs.next(), Some(("empty".into(), Some("".into()))));
/// assert_eq!(pairs.next(), None);
///
/// assert_eq!(decode_pairs("").count(), 0);
/// ```
#[must_use]
pub fn decode_pairs(query: &str) -> QueryValues<'_> {
    QueryValues {
        rest: (!query.is_empty()).then_some(query),
    }
}

/// An iterator over the form-url-decoded name/value pairs of a query.
///
/// This struct is created by [`decode_pairs`] and by
/// [`HttpUri::query_values`].
///
/// [`HttpUri::query_values`]: crate::HttpUri::query_values
#[derive(Clone, Debug)]
pub struct QueryValues<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for QueryValues<'a> {
    type Item = (Cow<'a, str>, Option<Cow<'a, str>>);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        let pair = match rest.split_once('&') {
            Some((pair, rest)) => {
                self.rest = Some(rest);
                pair
            }
            None => {
                self.rest = None;
                rest
            }
        };
        Some(match pair.split_once('=') {
            Some((name, value)) => (
                decode_with(name, true),
                Some(decode_with(value, true)),
            ),
            None => (decode_with(pair, true), None),
        })
    }
}
