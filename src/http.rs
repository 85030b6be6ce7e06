use crate::{
    builder::{AsHost, AsPort},
    component::Scheme,
    encoding::form::{self, QueryValues},
    error::{BuildError, HttpParseError},
    uri::Uri,
};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::{hash, marker::PhantomData};

mod private {
    pub trait Sealed {}
    impl Sealed for super::Http {}
    impl Sealed for super::Https {}
}

/// A marker trait for the schemes of the HTTP family.
///
/// This trait is sealed and implemented only by [`Http`] and [`Https`].
pub trait HttpScheme: private::Sealed + 'static {
    /// The scheme fixed by this variant.
    const SCHEME: &'static Scheme;
    /// The default port of this scheme, elided on build.
    const DEFAULT_PORT: &'static str;
}

/// The `http` scheme.
#[derive(Debug)]
pub struct Http(());

impl HttpScheme for Http {
    const SCHEME: &'static Scheme = Scheme::new_or_panic("http");
    const DEFAULT_PORT: &'static str = "80";
}

/// The `https` scheme.
#[derive(Debug)]
pub struct Https(());

impl HttpScheme for Https {
    const SCHEME: &'static Scheme = Scheme::new_or_panic("https");
    const DEFAULT_PORT: &'static str = "443";
}

/// An `https` URI.
pub type HttpsUri = HttpUri<Https>;

/// An `http` URI (or, through [`HttpsUri`], an `https` URI).
///
/// `HttpUri` wraps a generic [`Uri`] and constrains it to the rules of
/// RFC 7230: the scheme is fixed by the type, a host is always present,
/// userinfo is never present, the default port is elided, and the path
/// always renders with a leading `/`.
///
/// # Examples
///
/// ```
/// use http_uri::HttpUri;
///
/// let uri: HttpUri = HttpUri::builder()
///     .host("www.ietf.org")
///     .path_segments(["rfc", "rfc2396.txt"])
///     .build()?;
///
/// assert_eq!(uri.to_string(), "http://www.ietf.org/rfc/rfc2396.txt");
/// assert_eq!(uri.host(), "www.ietf.org");
/// assert_eq!(uri.path_segments(), ["", "rfc", "rfc2396.txt"]);
/// # Ok::<_, http_uri::error::BuildError>(())
/// ```
pub struct HttpUri<S: HttpScheme = Http> {
    uri: Uri,
    _marker: PhantomData<S>,
}

impl<S: HttpScheme> HttpUri<S> {
    /// Creates a new builder with no components set.
    #[inline]
    #[must_use]
    pub fn builder() -> HttpUriBuilder<S> {
        HttpUriBuilder::new()
    }

    /// Parses an HTTP(S) URI from a string.
    ///
    /// The input is parsed by the generic grammar first; its scheme is
    /// then checked against the scheme of this type, and the components
    /// are passed back through the builder so that construction-time
    /// normalization and constraints re-run.
    ///
    /// # Errors
    ///
    /// Returns [`HttpParseError::Syntax`] for malformed input,
    /// [`HttpParseError::SchemeMismatch`] if the input carries a
    /// different scheme, and [`HttpParseError::Build`] if the input
    /// violates an HTTP(S) constraint, such as carrying userinfo or
    /// lacking a host.
    ///
    /// # Examples
    ///
    /// ```
    /// use http_uri::{error::HttpParseError, Http, HttpUri};
    ///
    /// let uri: HttpUri = HttpUri::parse("http://www.ietf.org/rfc/rfc2396.txt")?;
    /// assert_eq!(uri.host(), "www.ietf.org");
    ///
    /// // Scheme mismatch is a usage error, not a syntax error.
    /// assert!(matches!(
    ///     HttpUri::<Http>::parse("https://www.example.com/"),
    ///     Err(HttpParseError::SchemeMismatch { .. })
    /// ));
    /// # Ok::<_, HttpParseError>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self, HttpParseError> {
        let uri = Uri::parse(input)?;
        if uri.scheme() != S::SCHEME {
            return Err(HttpParseError::SchemeMismatch {
                expected: S::SCHEME.as_str(),
                found: uri.scheme.clone(),
            });
        }
        let builder = HttpUriBuilder::<S> {
            host: uri.host.clone(),
            port: uri.port.clone(),
            path_segments: uri.path_segments.clone(),
            query: uri.query.clone(),
            fragment: uri.fragment.clone(),
            _marker: PhantomData,
        };
        let builder = builder.userinfo(uri.userinfo.as_deref())?;
        Ok(builder.build()?)
    }

    /// Returns the scheme fixed by this type.
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> &'static Scheme {
        S::SCHEME
    }

    /// Returns the host component.
    ///
    /// A host is always present on an HTTP(S) URI.
    #[must_use]
    pub fn host(&self) -> &str {
        self.uri.host.as_deref().unwrap()
    }

    /// Returns the port component, if any.
    ///
    /// The default port and the empty port are normalized to absent
    /// on build, so this never returns the scheme default.
    #[inline]
    #[must_use]
    pub fn port(&self) -> Option<&str> {
        self.uri.port()
    }

    /// Returns the normalized, decoded path segments.
    ///
    /// The first segment is always empty, so that the path renders with
    /// a leading `/`.
    #[inline]
    #[must_use]
    pub fn path_segments(&self) -> &[String] {
        self.uri.path_segments()
    }

    /// Returns the query component in wire form, if any.
    #[inline]
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.uri.query()
    }

    /// Returns the fragment component, if any.
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.uri.fragment()
    }

    /// Parses the query as an ordered sequence of form-url-decoded
    /// name/value pairs.
    ///
    /// Returns `None` if there is no query component; an empty query
    /// yields an empty iterator. A name is never absent but may be
    /// empty; a value is absent if its pair contains no `=`.
    ///
    /// # Examples
    ///
    /// ```
    /// use http_uri::HttpUri;
    ///
    /// let uri: HttpUri = HttpUri::parse("http://example.com/search?q=test&page=4")?;
    /// let values: Vec<_> = uri.query_values().unwrap().collect();
    /// assert_eq!(values[0], ("q".into(), Some("test".into())));
    /// assert_eq!(values[1], ("page".into(), Some("4".into())));
    ///
    /// let uri: HttpUri = HttpUri::parse("http://example.com/")?;
    /// assert!(uri.query_values().is_none());
    /// # Ok::<_, http_uri::error::HttpParseError>(())
    /// ```
    #[must_use]
    pub fn query_values(&self) -> Option<QueryValues<'_>> {
        self.uri.query().map(form::decode_pairs)
    }

    /// Creates a builder seeded with every component of this URI.
    ///
    /// Building the seeded builder unchanged reproduces `self` exactly.
    #[must_use]
    pub fn to_builder(&self) -> HttpUriBuilder<S> {
        HttpUriBuilder {
            host: self.uri.host.clone(),
            port: self.uri.port.clone(),
            path_segments: self.uri.path_segments.clone(),
            query: self.uri.query.clone(),
            fragment: self.uri.fragment.clone(),
            _marker: PhantomData,
        }
    }

    /// Returns a reference to the underlying generic URI.
    #[inline]
    #[must_use]
    pub fn as_uri(&self) -> &Uri {
        &self.uri
    }

    /// Converts into the underlying generic URI.
    #[inline]
    #[must_use]
    pub fn into_uri(self) -> Uri {
        self.uri
    }
}

impl<S: HttpScheme> Clone for HttpUri<S> {
    fn clone(&self) -> Self {
        Self {
            uri: self.uri.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S: HttpScheme> PartialEq for HttpUri<S> {
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri
    }
}

impl<S: HttpScheme> Eq for HttpUri<S> {}

impl<S: HttpScheme> hash::Hash for HttpUri<S> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.uri.hash(state);
    }
}

impl<S: HttpScheme> core::str::FromStr for HttpUri<S> {
    type Err = HttpParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpUri::parse(s)
    }
}

#[cfg(feature = "serde")]
impl<S: HttpScheme> serde::Serialize for HttpUri<S> {
    fn serialize<Se: serde::Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, S: HttpScheme> serde::Deserialize<'de> for HttpUri<S> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <&str as serde::Deserialize>::deserialize(deserializer)?;
        HttpUri::parse(s).map_err(serde::de::Error::custom)
    }
}

/// Stores `""` and the scheme default port as absent; any other port is
/// kept verbatim.
fn normalize_port(port: Option<&str>, default: &str) -> Option<String> {
    match port {
        Some(port) if port.is_empty() || port == default => None,
        Some(port) => Some(port.to_string()),
        None => None,
    }
}

/// Normalizes path segments in a single left-to-right pass.
///
/// A non-empty first segment gets an empty segment emitted before it,
/// forcing a leading `/` on render. An entirely empty input, or a lone
/// empty segment, normalizes to the root path `["", ""]`, which renders
/// as exactly `/`.
fn normalize_path_segments(segments: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(segments.len() + 1);
    if let Some((first, rest)) = segments.split_first() {
        if !first.is_empty() {
            out.push(String::new());
        }
        out.push(first.clone());
        out.extend(rest.iter().cloned());
    }
    if out.len() < 2 {
        out.clear();
        out.push(String::new());
        out.push(String::new());
    }
    out
}

/// A builder for [`HttpUri`] values.
///
/// This struct is created by [`HttpUri::builder`] and by
/// [`HttpUri::to_builder`]. Each component is independently settable, in
/// any order; [`build`](Self::build) borrows the builder, re-runs the
/// full construction-time normalization, and may be called any number of
/// times.
///
/// A builder is not thread-safe and is owned exclusively by its creator
/// for the duration of a build sequence.
#[derive(Debug)]
#[must_use]
pub struct HttpUriBuilder<S: HttpScheme = Http> {
    host: Option<String>,
    port: Option<String>,
    path_segments: Vec<String>,
    query: Option<String>,
    fragment: Option<String>,
    _marker: PhantomData<S>,
}

impl<S: HttpScheme> Default for HttpUriBuilder<S> {
    fn default() -> Self {
        Self {
            host: None,
            port: None,
            path_segments: Vec::new(),
            query: None,
            fragment: None,
            _marker: PhantomData,
        }
    }
}

impl<S: HttpScheme> Clone for HttpUriBuilder<S> {
    fn clone(&self) -> Self {
        Self {
            host: self.host.clone(),
            port: self.port.clone(),
            path_segments: self.path_segments.clone(),
            query: self.query.clone(),
            fragment: self.fragment.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S: HttpScheme> HttpUriBuilder<S> {
    /// Creates a builder with no components set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the userinfo component, which must be absent.
    ///
    /// HTTP and HTTPS URIs can no longer carry userinfo portions, as of
    /// RFC 7230. This method exists precisely to reject userinfo, not to
    /// support it: it fails for any present value and accepts `None`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UserinfoDisallowed`] if `userinfo` is present.
    pub fn userinfo(self, userinfo: Option<&str>) -> Result<Self, BuildError> {
        match userinfo {
            Some(_) => Err(BuildError::UserinfoDisallowed),
            None => Ok(self),
        }
    }

    /// Sets the host component, overwriting any existing host.
    ///
    /// Accepts strings, and IP addresses when the `net` feature is
    /// enabled: an IPv4 address is set in its dotted decimal form and an
    /// IPv6 address in its bracketed canonical form.
    pub fn host(mut self, host: impl AsHost) -> Self {
        let mut buf = String::new();
        host.push_to(&mut buf);
        self.host = Some(buf);
        self
    }

    /// Sets the port component.
    ///
    /// The empty port and the scheme default port normalize to absent
    /// on build.
    pub fn port(mut self, port: impl AsPort) -> Self {
        let mut buf = String::new();
        port.push_to(&mut buf);
        self.port = Some(buf);
        self
    }

    /// Sets the path segments, given in decoded form.
    ///
    /// The segments are normalized on build so that the path renders
    /// with a leading `/`.
    pub fn path_segments<I>(mut self, segments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.path_segments = segments.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the query component in wire form, overwriting any existing
    /// query.
    pub fn query(mut self, query: &str) -> Self {
        self.query = Some(query.to_string());
        self
    }

    /// Encodes an ordered sequence of name/value pairs into a
    /// form-url-encoded query, overwriting any existing query.
    ///
    /// A pair with an absent value renders as the bare name, without a
    /// trailing `=`.
    ///
    /// # Examples
    ///
    /// ```
    /// use http_uri::HttpUri;
    ///
    /// let uri: HttpUri = HttpUri::builder()
    ///     .host("example.com")
    ///     .query_values([("q", Some("100% sure")), ("raw", None)])
    ///     .build()?;
    ///
    /// assert_eq!(uri.to_string(), "http://example.com/?q=100%25+sure&raw");
    /// # Ok::<_, http_uri::error::BuildError>(())
    /// ```
    pub fn query_values<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.query = Some(form::encode_pairs(pairs));
        self
    }

    /// Sets the fragment component in wire form.
    pub fn fragment(mut self, fragment: &str) -> Self {
        self.fragment = Some(fragment.to_string());
        self
    }

    /// Optionally calls a builder method with a value.
    pub fn optional<F, V>(self, f: F, value: Option<V>) -> Self
    where
        F: FnOnce(Self, V) -> Self,
    {
        match value {
            Some(value) => f(self, value),
            None => self,
        }
    }

    /// Builds the URI, re-running the full construction-time
    /// normalization against the current field values.
    ///
    /// Building is side-effect-free on the builder; each call is
    /// independent.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingHost`] if no host was supplied and
    /// [`BuildError::EmptyHost`] if the empty string was supplied as the
    /// host; other [`BuildError`] values propagate from the generic
    /// layer, such as [`BuildError::InvalidPort`] for a non-digit port.
    pub fn build(&self) -> Result<HttpUri<S>, BuildError> {
        let host = self.host.as_deref().ok_or(BuildError::MissingHost)?;
        if host.is_empty() {
            return Err(BuildError::EmptyHost);
        }

        let port = normalize_port(self.port.as_deref(), S::DEFAULT_PORT);
        let path_segments = normalize_path_segments(&self.path_segments);

        let uri = Uri::builder()
            .scheme(S::SCHEME)
            .host(host)
            .optional(crate::UriBuilder::port, port)
            .path_segments(path_segments)
            .optional(crate::UriBuilder::query, self.query.as_deref())
            .optional(crate::UriBuilder::fragment, self.fragment.as_deref())
            .build()?;

        Ok(HttpUri {
            uri,
            _marker: PhantomData,
        })
    }
}
