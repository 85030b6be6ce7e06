use crate::{
    encoding::{self, table},
    error::{ParseError, ParseErrorKind},
    uri::Uri,
};
use alloc::string::{String, ToString};
use alloc::vec::Vec;

fn err(index: usize, kind: ParseErrorKind) -> ParseError {
    ParseError { index, kind }
}

fn validate_at(s: &str, offset: usize, table: table::Table) -> Result<(), ParseError> {
    encoding::validate(s, table).map_err(|(i, kind)| err(offset + i, kind))
}

/// Parses an absolute URI with optional fragment:
/// `scheme ":" hier-part [ "?" query ] [ "#" fragment ]`.
///
/// Relative references are not supported and fail with `NoScheme`.
pub(crate) fn parse(input: &str) -> Result<Uri, ParseError> {
    let colon = input
        .find(':')
        .ok_or_else(|| err(0, ParseErrorKind::NoScheme))?;
    let scheme = &input[..colon];
    match scheme.as_bytes() {
        [first, ..] if first.is_ascii_alphabetic() => {}
        _ => return Err(err(0, ParseErrorKind::NoScheme)),
    }
    if let Some(i) = scheme.bytes().position(|x| !table::SCHEME.allows(x)) {
        return Err(err(i, ParseErrorKind::UnexpectedChar));
    }
    let scheme = scheme.to_ascii_lowercase();

    let mut pos = colon + 1;
    let rest = &input[pos..];

    let (userinfo, host, port) = if let Some(auth_rest) = rest.strip_prefix("//") {
        pos += 2;
        let auth_end = auth_rest.find(['/', '?', '#']).unwrap_or(auth_rest.len());
        let auth = &auth_rest[..auth_end];
        let parsed = parse_authority(auth, pos)?;
        pos += auth_end;
        (parsed.0, Some(parsed.1), parsed.2)
    } else {
        (None, None, None)
    };

    let rest = &input[pos..];
    let path_end = rest.find(['?', '#']).unwrap_or(rest.len());
    let path = &rest[..path_end];
    validate_at(path, pos, table::PATH)?;
    let path_segments: Vec<String> = if path.is_empty() {
        Vec::new()
    } else {
        path.split('/')
            .map(|seg| encoding::decode(seg).into_owned())
            .collect()
    };
    pos += path_end;

    let mut query = None;
    if input[pos..].starts_with('?') {
        let start = pos + 1;
        let end = input[start..].find('#').map_or(input.len(), |i| start + i);
        let q = &input[start..end];
        validate_at(q, start, table::QUERY)?;
        query = Some(q.to_string());
        pos = end;
    }

    let mut fragment = None;
    if input[pos..].starts_with('#') {
        let f = &input[pos + 1..];
        validate_at(f, pos + 1, table::FRAGMENT)?;
        fragment = Some(f.to_string());
    }

    Ok(Uri {
        scheme,
        userinfo,
        host,
        port,
        path_segments,
        query,
        fragment,
    })
}

/// Splits an authority into decoded userinfo, host and port.
///
/// `offset` is the index of the authority within the full input, used
/// for error reporting.
fn parse_authority(
    auth: &str,
    offset: usize,
) -> Result<(Option<String>, String, Option<String>), ParseError> {
    let (userinfo, host_port, hp_off) = match auth.rfind('@') {
        Some(at) => {
            let userinfo = &auth[..at];
            validate_at(userinfo, offset, table::USERINFO)?;
            (
                Some(encoding::decode(userinfo).into_owned()),
                &auth[at + 1..],
                offset + at + 1,
            )
        }
        None => (None, auth, offset),
    };

    let (host, port) = if host_port.starts_with('[') {
        let close = host_port
            .find(']')
            .ok_or_else(|| err(hp_off, ParseErrorKind::InvalidIpLiteral))?;
        let addr = &host_port[1..close];
        if addr.is_empty() || !table::IPV6_ADDR.validate(addr.as_bytes()) {
            return Err(err(hp_off, ParseErrorKind::InvalidIpLiteral));
        }
        let host = host_port[..=close].to_ascii_lowercase();
        let rest = &host_port[close + 1..];
        let port = match rest.strip_prefix(':') {
            Some(port) => Some((port, hp_off + close + 2)),
            None if rest.is_empty() => None,
            None => return Err(err(hp_off + close + 1, ParseErrorKind::UnexpectedChar)),
        };
        (host, port)
    } else {
        match host_port.split_once(':') {
            Some((host, port)) => {
                validate_at(host, hp_off, table::REG_NAME)?;
                (
                    encoding::decode(host).to_ascii_lowercase(),
                    Some((port, hp_off + host.len() + 1)),
                )
            }
            None => {
                validate_at(host_port, hp_off, table::REG_NAME)?;
                (encoding::decode(host_port).to_ascii_lowercase(), None)
            }
        }
    };

    let port = match port {
        Some((port, port_off)) => {
            if let Some(i) = port.bytes().position(|x| !x.is_ascii_digit()) {
                return Err(err(port_off + i, ParseErrorKind::UnexpectedChar));
            }
            Some(port.to_string())
        }
        None => None,
    };

    Ok((userinfo, host, port))
}
