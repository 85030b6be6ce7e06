//! Error types.

use alloc::string::String;
use core::fmt;

/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input does not start with a scheme followed by a colon.
    NoScheme,
    /// Invalid percent-encoded octet that is either non-hexadecimal or incomplete.
    ///
    /// The error index points to the percent character "%" of the octet.
    InvalidOctet,
    /// Unexpected character that is not allowed by the URI syntax.
    ///
    /// The error index points to the character.
    UnexpectedChar,
    /// Invalid IP literal address.
    ///
    /// The error index points to the preceding left square bracket "[".
    InvalidIpLiteral,
}

/// An error occurred when parsing a URI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub(crate) index: usize,
    pub(crate) kind: ParseErrorKind,
}

impl ParseError {
    /// Returns the index where the error occurred in the input string.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseErrorKind::NoScheme => "expected a scheme at index ",
            ParseErrorKind::InvalidOctet => "invalid percent-encoded octet at index ",
            ParseErrorKind::UnexpectedChar => "unexpected character at index ",
            ParseErrorKind::InvalidIpLiteral => "invalid IP literal at index ",
        };
        write!(f, "{}{}", msg, self.index)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// An error occurred when building a URI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// No scheme was supplied.
    MissingScheme,
    /// The host is a bracketed IP literal that is not well-formed.
    InvalidHost,
    /// The port contains a character other than an ASCII digit.
    InvalidPort,
    /// The query is not valid percent-encoded query text.
    InvalidQuery,
    /// The fragment is not valid percent-encoded fragment text.
    InvalidFragment,
    /// Userinfo or port was supplied without a host.
    AuthorityPartsWithoutHost,
    /// A host is present, but the path is not empty and does not start
    /// with an empty segment.
    NonemptyRootlessPath,
    /// No host is present, but the path starts with two empty segments,
    /// which would render as `"//"`.
    PathStartsWithDoubleSlash,
    /// No host was supplied for an HTTP(S) URI, which always carries one.
    MissingHost,
    /// The empty string was supplied as the host of an HTTP(S) URI.
    ///
    /// An empty host is valid in the generic grammar but not for the
    /// HTTP and HTTPS schemes.
    EmptyHost,
    /// Userinfo was supplied for an HTTP(S) URI.
    ///
    /// HTTP and HTTPS URIs cannot carry a userinfo portion, as of RFC 7230.
    UserinfoDisallowed,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::MissingScheme => "no scheme was supplied",
            Self::InvalidHost => "invalid bracketed host",
            Self::InvalidPort => "port should contain only ASCII digits",
            Self::InvalidQuery => "invalid percent-encoded query text",
            Self::InvalidFragment => "invalid percent-encoded fragment text",
            Self::AuthorityPartsWithoutHost => {
                "userinfo and port cannot be set without a host"
            }
            Self::NonemptyRootlessPath => {
                "when a host is present, the path should either be empty or start with an empty segment"
            }
            Self::PathStartsWithDoubleSlash => {
                "when no host is present, the path should not start with two empty segments"
            }
            Self::MissingHost => "HTTP(S) URIs always carry a host",
            Self::EmptyHost => "HTTP(S) URIs cannot have an empty host",
            Self::UserinfoDisallowed => {
                "HTTP(S) URIs can no longer have userinfo portions, as of RFC 7230"
            }
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BuildError {}

/// An error occurred when parsing an HTTP(S) URI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HttpParseError {
    /// Malformed URI syntax, propagated unchanged from the generic parser.
    Syntax(ParseError),
    /// The input parsed as a URI of a different scheme.
    ///
    /// This is a usage error on the caller's side, distinct from the
    /// syntax errors raised by the generic parser.
    SchemeMismatch {
        /// The scheme expected by the concrete type.
        expected: &'static str,
        /// The scheme found in the input.
        found: String,
    },
    /// The input parsed as a generic URI but violates an HTTP(S)
    /// constraint, such as carrying userinfo or lacking a host.
    Build(BuildError),
}

impl From<ParseError> for HttpParseError {
    fn from(e: ParseError) -> Self {
        Self::Syntax(e)
    }
}

impl From<BuildError> for HttpParseError {
    fn from(e: BuildError) -> Self {
        Self::Build(e)
    }
}

impl fmt::Display for HttpParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(e) => fmt::Display::fmt(e, f),
            Self::SchemeMismatch { expected, found } => {
                write!(f, "expected scheme \"{expected}\", found \"{found}\"")
            }
            Self::Build(e) => fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HttpParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Build(e) => Some(e),
            Self::SchemeMismatch { .. } => None,
        }
    }
}
