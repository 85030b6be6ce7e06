use crate::{
    component::Scheme,
    encoding::{encode, table},
    http::{HttpScheme, HttpUri},
    uri::Uri,
};
use core::fmt;

impl fmt::Display for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Debug for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.scheme)?;

        if let Some(host) = &self.host {
            f.write_str("//")?;
            if let Some(userinfo) = &self.userinfo {
                write!(f, "{}@", encode(userinfo, table::USERINFO))?;
            }
            if host.starts_with('[') {
                f.write_str(host)?;
            } else {
                f.write_str(&encode(host, table::REG_NAME))?;
            }
            if let Some(port) = &self.port {
                write!(f, ":{port}")?;
            }
        }

        for (i, segment) in self.path_segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(&encode(segment, table::PCHAR))?;
        }

        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uri")
            .field("scheme", &self.scheme)
            .field("userinfo", &self.userinfo)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("path_segments", &self.path_segments)
            .field("query", &self.query)
            .field("fragment", &self.fragment)
            .finish()
    }
}

impl<S: HttpScheme> fmt::Display for HttpUri<S> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_uri(), f)
    }
}

impl<S: HttpScheme> fmt::Debug for HttpUri<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpUri")
            .field("scheme", &self.scheme())
            .field("host", &self.host())
            .field("port", &self.port())
            .field("path_segments", &self.path_segments())
            .field("query", &self.query())
            .field("fragment", &self.fragment())
            .finish()
    }
}
