use crate::{builder::UriBuilder, component::Scheme, error::ParseError, parser};
use alloc::{string::String, vec::Vec};

/// A generic [URI] with typed, decoded components.
///
/// [URI]: https://datatracker.ietf.org/doc/html/rfc3986#section-3
///
/// A `Uri` is an immutable value holding a scheme, optional userinfo,
/// optional host, optional port, an ordered sequence of path segments,
/// optional query and optional fragment. It is created either by
/// [`parse`](Self::parse) or through a [`UriBuilder`], and renders its
/// canonical textual form through [`Display`](core::fmt::Display).
///
/// # Storage convention
///
/// Userinfo, host and path segments are stored *decoded*; they are
/// percent-encoded on render and percent-decoded on parse. Query and
/// fragment are stored in *wire form* (validated percent-encoded text)
/// and emitted verbatim, so that codecs such as
/// [`form`](crate::encoding::form) can re-tokenize them.
///
/// # Examples
///
/// ```
/// use http_uri::Uri;
///
/// let uri = Uri::parse("foo://example.com:8042/over/there?name=ferret#nose")?;
///
/// assert_eq!(uri.scheme().as_str(), "foo");
/// assert_eq!(uri.host(), Some("example.com"));
/// assert_eq!(uri.port(), Some("8042"));
/// assert_eq!(uri.path_segments(), ["", "over", "there"]);
/// assert_eq!(uri.query(), Some("name=ferret"));
/// assert_eq!(uri.fragment(), Some("nose"));
/// # Ok::<_, http_uri::error::ParseError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Uri {
    /// Lowercase, validated against the `scheme` ABNF rule.
    pub(crate) scheme: String,
    pub(crate) userinfo: Option<String>,
    /// Decoded reg-name or verbatim bracketed IP literal, ASCII-lowercased.
    pub(crate) host: Option<String>,
    /// Possibly empty digit string.
    pub(crate) port: Option<String>,
    pub(crate) path_segments: Vec<String>,
    /// Wire form.
    pub(crate) query: Option<String>,
    /// Wire form.
    pub(crate) fragment: Option<String>,
}

impl Uri {
    /// Parses an absolute URI from a string.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string does not match the
    /// `absolute-URI [ "#" fragment ]` grammar from RFC 3986.
    /// Relative references are not supported.
    pub fn parse(input: &str) -> Result<Uri, ParseError> {
        parser::parse(input)
    }

    /// Creates a new builder with no components set.
    #[inline]
    #[must_use]
    pub fn builder() -> UriBuilder {
        UriBuilder::new()
    }

    /// Creates a builder seeded with every component of this URI.
    ///
    /// Building the seeded builder unchanged reproduces `self` exactly.
    #[must_use]
    pub fn to_builder(&self) -> UriBuilder {
        UriBuilder::from_uri(self)
    }

    /// Returns the scheme component.
    #[must_use]
    pub fn scheme(&self) -> &Scheme {
        Scheme::new_validated(&self.scheme)
    }

    /// Returns the decoded userinfo subcomponent, if any.
    #[inline]
    #[must_use]
    pub fn userinfo(&self) -> Option<&str> {
        self.userinfo.as_deref()
    }

    /// Returns the host subcomponent, if any.
    ///
    /// Registered names are decoded; the square brackets enclosing an
    /// IPv6 address are included. The host may be the empty string.
    #[inline]
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Returns the port subcomponent, if any.
    ///
    /// The port is a possibly empty string of ASCII digits. It may have
    /// leading zeros or be larger than `u16::MAX`; interpretation is left
    /// to the caller.
    #[inline]
    #[must_use]
    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    /// Returns the decoded path segments.
    ///
    /// An absent path yields an empty slice. A path with a leading `/`
    /// yields an empty string as its first segment.
    #[inline]
    #[must_use]
    pub fn path_segments(&self) -> &[String] {
        &self.path_segments
    }

    /// Returns the query component in wire form, if any.
    #[inline]
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the fragment component in wire form, if any.
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Checks whether an authority (a host) is present.
    #[inline]
    #[must_use]
    pub fn has_authority(&self) -> bool {
        self.host.is_some()
    }
}

impl core::str::FromStr for Uri {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uri::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uri {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uri {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <&str as serde::Deserialize>::deserialize(deserializer)?;
        Uri::parse(s).map_err(serde::de::Error::custom)
    }
}
