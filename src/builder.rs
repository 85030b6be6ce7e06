use crate::{
    component::Scheme,
    encoding::{self, table},
    error::BuildError,
    uri::Uri,
};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Write;

#[cfg(feature = "net")]
use core::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// A trait for types whose value can be set as a host.
///
/// Implemented for strings, and for [`Ipv4Addr`], [`Ipv6Addr`] and
/// [`IpAddr`] when the `net` feature is enabled. An IPv4 address is
/// written in its dotted decimal form; an IPv6 address is written in its
/// canonical form wrapped in square brackets. Zone identifiers are not
/// supported.
pub trait AsHost {
    /// Appends the host text to the buffer.
    fn push_to(&self, buf: &mut String);
}

impl AsHost for &str {
    fn push_to(&self, buf: &mut String) {
        buf.push_str(self);
    }
}

impl AsHost for String {
    fn push_to(&self, buf: &mut String) {
        buf.push_str(self);
    }
}

#[cfg(feature = "net")]
impl AsHost for Ipv4Addr {
    fn push_to(&self, buf: &mut String) {
        write!(buf, "{self}").unwrap();
    }
}

#[cfg(feature = "net")]
impl AsHost for Ipv6Addr {
    fn push_to(&self, buf: &mut String) {
        write!(buf, "[{self}]").unwrap();
    }
}

#[cfg(feature = "net")]
impl AsHost for IpAddr {
    fn push_to(&self, buf: &mut String) {
        match self {
            IpAddr::V4(addr) => addr.push_to(buf),
            IpAddr::V6(addr) => addr.push_to(buf),
        }
    }
}

/// A trait for types whose value can be set as a port.
///
/// Implemented for `u16` and for strings.
pub trait AsPort {
    /// Appends the port text to the buffer.
    fn push_to(&self, buf: &mut String);
}

impl AsPort for u16 {
    fn push_to(&self, buf: &mut String) {
        write!(buf, "{self}").unwrap();
    }
}

impl AsPort for &str {
    fn push_to(&self, buf: &mut String) {
        buf.push_str(self);
    }
}

impl AsPort for String {
    fn push_to(&self, buf: &mut String) {
        buf.push_str(self);
    }
}

/// A builder for generic [`Uri`] values.
///
/// This struct is created by [`Uri::builder`]. Each component is
/// independently settable, in any order; [`build`](Self::build) borrows
/// the builder and may be called any number of times.
///
/// # Examples
///
/// ```
/// use http_uri::{component::Scheme, Uri};
///
/// let uri = Uri::builder()
///     .scheme(Scheme::new_or_panic("foo"))
///     .host("example.com")
///     .port(8042u16)
///     .path_segments(["", "over", "there"])
///     .query("name=ferret")
///     .fragment("nose")
///     .build()?;
///
/// assert_eq!(
///     uri.to_string(),
///     "foo://example.com:8042/over/there?name=ferret#nose"
/// );
/// # Ok::<_, http_uri::error::BuildError>(())
/// ```
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct UriBuilder {
    scheme: Option<String>,
    userinfo: Option<String>,
    host: Option<String>,
    port: Option<String>,
    path_segments: Vec<String>,
    query: Option<String>,
    fragment: Option<String>,
}

impl UriBuilder {
    /// Creates a builder with no components set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_uri(uri: &Uri) -> Self {
        Self {
            scheme: Some(uri.scheme.clone()),
            userinfo: uri.userinfo.clone(),
            host: uri.host.clone(),
            port: uri.port.clone(),
            path_segments: uri.path_segments.clone(),
            query: uri.query.clone(),
            fragment: uri.fragment.clone(),
        }
    }

    /// Sets the scheme component.
    ///
    /// The scheme is normalized to lowercase on build.
    pub fn scheme(mut self, scheme: &Scheme) -> Self {
        self.scheme = Some(scheme.as_str().to_string());
        self
    }

    /// Sets the userinfo subcomponent, given in decoded form.
    pub fn userinfo(mut self, userinfo: &str) -> Self {
        self.userinfo = Some(userinfo.to_string());
        self
    }

    /// Sets the host subcomponent.
    ///
    /// Registered names are given in decoded form and are normalized to
    /// lowercase on build; bracketed IP literals are kept verbatim.
    pub fn host(mut self, host: impl AsHost) -> Self {
        let mut buf = String::new();
        host.push_to(&mut buf);
        self.host = Some(buf);
        self
    }

    /// Sets the port subcomponent.
    ///
    /// A string port must consist of ASCII digits only, and may be empty.
    pub fn port(mut self, port: impl AsPort) -> Self {
        let mut buf = String::new();
        port.push_to(&mut buf);
        self.port = Some(buf);
        self
    }

    /// Sets the path segments, given in decoded form.
    ///
    /// An empty first segment renders as a leading `/`.
    pub fn path_segments<I>(mut self, segments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.path_segments = segments.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the query component, given in wire form.
    pub fn query(mut self, query: &str) -> Self {
        self.query = Some(query.to_string());
        self
    }

    /// Sets the fragment component, given in wire form.
    pub fn fragment(mut self, fragment: &str) -> Self {
        self.fragment = Some(fragment.to_string());
        self
    }

    /// Optionally calls a builder method with a value.
    ///
    /// ```
    /// use http_uri::{component::Scheme, Uri, UriBuilder};
    ///
    /// let uri = Uri::builder()
    ///     .scheme(Scheme::new_or_panic("foo"))
    ///     .host("example.com")
    ///     .optional(UriBuilder::query, Some("bar"))
    ///     .optional(UriBuilder::fragment, None)
    ///     .build()?;
    ///
    /// assert_eq!(uri.to_string(), "foo://example.com?bar");
    /// # Ok::<_, http_uri::error::BuildError>(())
    /// ```
    pub fn optional<F, V>(self, f: F, value: Option<V>) -> Self
    where
        F: FnOnce(Self, V) -> Self,
    {
        match value {
            Some(value) => f(self, value),
            None => self,
        }
    }

    /// Builds the URI, re-running all validation against the current
    /// field values.
    ///
    /// Building is side-effect-free on the builder; each call is
    /// independent.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any of the following conditions is not met.
    ///
    /// - A valid scheme must be set.
    /// - Userinfo and port may only be set together with a host.
    /// - A bracketed host must be a well-formed IP literal.
    /// - The port must consist of ASCII digits only.
    /// - Query and fragment must be valid percent-encoded text.
    /// - When a host is present, the path must be empty or start with an
    ///   empty segment; otherwise it must not start with two empty segments.
    pub fn build(&self) -> Result<Uri, BuildError> {
        let scheme = self
            .scheme
            .as_deref()
            .ok_or(BuildError::MissingScheme)?
            .to_ascii_lowercase();

        if self.host.is_none() && (self.userinfo.is_some() || self.port.is_some()) {
            return Err(BuildError::AuthorityPartsWithoutHost);
        }

        let host = match &self.host {
            Some(host) if host.starts_with('[') => {
                let well_formed = host.len() > 2
                    && host.ends_with(']')
                    && table::IPV6_ADDR.validate(host[1..host.len() - 1].as_bytes());
                if !well_formed {
                    return Err(BuildError::InvalidHost);
                }
                Some(host.to_ascii_lowercase())
            }
            Some(host) => Some(host.to_ascii_lowercase()),
            None => None,
        };

        if let Some(port) = &self.port {
            if !table::DIGIT.validate(port.as_bytes()) {
                return Err(BuildError::InvalidPort);
            }
        }
        if let Some(query) = &self.query {
            if encoding::validate(query, table::QUERY).is_err() {
                return Err(BuildError::InvalidQuery);
            }
        }
        if let Some(fragment) = &self.fragment {
            if encoding::validate(fragment, table::FRAGMENT).is_err() {
                return Err(BuildError::InvalidFragment);
            }
        }

        if host.is_some() {
            if self.path_segments.first().is_some_and(|s| !s.is_empty()) {
                return Err(BuildError::NonemptyRootlessPath);
            }
        } else if self.path_segments.len() >= 2
            && self.path_segments[0].is_empty()
            && self.path_segments[1].is_empty()
        {
            return Err(BuildError::PathStartsWithDoubleSlash);
        }

        Ok(Uri {
            scheme,
            userinfo: self.userinfo.clone(),
            host,
            port: self.port.clone(),
            path_segments: self.path_segments.clone(),
            query: self.query.clone(),
            fragment: self.fragment.clone(),
        })
    }
}
