#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![cfg_attr(not(feature = "std"), no_std)]

//! A correctness-focused HTTP/HTTPS URI library compliant with
//! IETF [RFC 3986] and [RFC 7230].
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//! [RFC 7230]: https://datatracker.ietf.org/doc/html/rfc7230/
//!
//! This crate produces a single canonical, round-trippable textual form
//! of an HTTP(S) URI from typed components, and parses a textual URI
//! back into those components without loss:
//!
//! - [`Uri`] is a generic URI value holding decoded, typed components,
//!   with a [`UriBuilder`] exposing every RFC 3986 field.
//! - [`HttpUri`] and [`HttpsUri`] constrain a [`Uri`] to the rules of
//!   the HTTP family: the scheme is fixed by the type, a host is always
//!   present, userinfo is rejected, the default port is elided, and the
//!   path always renders with a leading `/`.
//! - [`encoding`] holds the percent-encoding primitives and the
//!   form-url-encoded query codec.
//!
//! # Examples
//!
//! ```
//! use http_uri::HttpUri;
//!
//! let uri: HttpUri = HttpUri::builder()
//!     .host("www.ietf.org")
//!     .path_segments(["rfc", "rfc2396.txt"])
//!     .build()?;
//! assert_eq!(uri.to_string(), "http://www.ietf.org/rfc/rfc2396.txt");
//!
//! let parsed = HttpUri::parse(&uri.to_string()).unwrap();
//! assert_eq!(parsed, uri);
//! # Ok::<_, http_uri::error::BuildError>(())
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): `Error` trait implementations for the error types.
//! - `net`: host conveniences for `Ipv4Addr`, `Ipv6Addr` and `IpAddr`
//!   from `core::net`.
//! - `serde`: `Serialize` and `Deserialize` implementations that treat
//!   URI values as strings.

extern crate alloc;

pub mod component;
pub mod encoding;
pub mod error;

mod builder;
mod fmt;
mod http;
mod parser;
mod uri;

pub use builder::{AsHost, AsPort, UriBuilder};
pub use http::{Http, HttpScheme, HttpUri, HttpUriBuilder, Https, HttpsUri};
pub use uri::Uri;
