use http_uri::{
    error::{BuildError, HttpParseError},
    Http, HttpUri, HttpsUri,
};

#[cfg(feature = "net")]
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

#[test]
fn round_trip_formatting() {
    let uri: HttpUri = HttpUri::builder()
        .host("www.ietf.org")
        .path_segments(["", "rfc", "rfc2396.txt"])
        .build()
        .unwrap();
    assert_eq!(uri.to_string(), "http://www.ietf.org/rfc/rfc2396.txt");

    let parsed = HttpUri::<Http>::parse(&uri.to_string()).unwrap();
    assert_eq!(parsed.scheme().as_str(), "http");
    assert_eq!(parsed.as_uri().userinfo(), None);
    assert_eq!(parsed.host(), "www.ietf.org");
    assert_eq!(parsed.port(), None);
    assert_eq!(parsed.path_segments(), ["", "rfc", "rfc2396.txt"]);
    assert_eq!(parsed.query(), None);
    assert_eq!(parsed.fragment(), None);
    assert_eq!(parsed, uri);

    let deconstructed = uri.to_builder().build().unwrap();
    assert_eq!(deconstructed, uri);
    assert_eq!(deconstructed.to_string(), uri.to_string());
}

#[test]
fn round_trip_with_all_components() {
    let uri: HttpUri = HttpUri::builder()
        .host("example.com")
        .port(8042u16)
        .path_segments(["over", "there"])
        .query("name=ferret")
        .fragment("nose")
        .build()
        .unwrap();
    assert_eq!(
        uri.to_string(),
        "http://example.com:8042/over/there?name=ferret#nose"
    );

    let parsed = HttpUri::<Http>::parse(&uri.to_string()).unwrap();
    assert_eq!(parsed.host(), "example.com");
    assert_eq!(parsed.port(), Some("8042"));
    assert_eq!(parsed.path_segments(), ["", "over", "there"]);
    assert_eq!(parsed.query(), Some("name=ferret"));
    assert_eq!(parsed.fragment(), Some("nose"));
    assert_eq!(parsed, uri);
}

#[test]
fn port_elision() {
    let uri: HttpUri = HttpUri::builder().host("h").port("80").build().unwrap();
    assert_eq!(uri.to_string(), "http://h/");
    assert_eq!(uri.port(), None);
    assert_eq!(uri.to_builder().build().unwrap().port(), None);

    let uri: HttpUri = HttpUri::builder().host("h").port("").build().unwrap();
    assert_eq!(uri.to_string(), "http://h/");
    assert_eq!(uri.port(), None);

    let uri: HttpUri = HttpUri::builder().host("h").port("8080").build().unwrap();
    assert_eq!(uri.to_string(), "http://h:8080/");
    assert_eq!(uri.port(), Some("8080"));

    // Parsing the default port also normalizes it away.
    let uri = HttpUri::<Http>::parse("http://h:80/x").unwrap();
    assert_eq!(uri.port(), None);
    assert_eq!(uri.to_string(), "http://h/x");
}

#[test]
fn https_default_port_elision() {
    let uri = HttpsUri::builder().host("h").port(443u16).build().unwrap();
    assert_eq!(uri.to_string(), "https://h/");
    assert_eq!(uri.port(), None);

    // Port 80 is not the https default and is preserved.
    let uri = HttpsUri::builder().host("h").port(80u16).build().unwrap();
    assert_eq!(uri.to_string(), "https://h:80/");
    assert_eq!(uri.port(), Some("80"));

    let parsed = HttpsUri::parse("https://h:80/").unwrap();
    assert_eq!(parsed, uri);
}

#[test]
fn path_leading_slash_invariant() {
    let uri: HttpUri = HttpUri::builder().host("h").build().unwrap();
    assert_eq!(uri.to_string(), "http://h/");

    let uri: HttpUri = HttpUri::builder()
        .host("h")
        .path_segments(["rfc", "rfc2396.txt"])
        .build()
        .unwrap();
    assert_eq!(uri.to_string(), "http://h/rfc/rfc2396.txt");
    assert_eq!(uri.path_segments(), ["", "rfc", "rfc2396.txt"]);

    // A parsed bare authority renders with the canonical root path.
    let uri = HttpUri::<Http>::parse("http://h").unwrap();
    assert_eq!(uri.to_string(), "http://h/");
    assert_eq!(uri.path_segments(), ["", ""]);
    assert_eq!(HttpUri::<Http>::parse("http://h/").unwrap(), uri);
}

#[test]
fn query_absence_vs_emptiness() {
    let uri: HttpUri = HttpUri::builder().host("h").build().unwrap();
    assert_eq!(uri.query(), None);
    assert!(uri.query_values().is_none());

    let uri: HttpUri = HttpUri::builder().host("h").query("").build().unwrap();
    assert_eq!(uri.query(), Some(""));
    assert_eq!(uri.query_values().unwrap().count(), 0);
    assert_eq!(uri.to_string(), "http://h/?");

    let parsed = HttpUri::<Http>::parse("http://h/?").unwrap();
    assert_eq!(parsed.query(), Some(""));
    assert_eq!(parsed, uri);
}

#[test]
fn query_values_decoding() {
    let uri = HttpUri::<Http>::parse("http://h/search?q=test&page=4").unwrap();
    let values: Vec<_> = uri.query_values().unwrap().collect();
    assert_eq!(
        values,
        [
            ("q".into(), Some("test".into())),
            ("page".into(), Some("4".into()))
        ]
    );
}

#[test]
fn query_values_round_trip() {
    let pairs = [
        ("a name", Some("a value & more")),
        ("flag", None),
        ("empty", Some("")),
        ("50%", Some("=")),
    ];
    let uri: HttpUri = HttpUri::builder()
        .host("h")
        .query_values(pairs)
        .build()
        .unwrap();

    let decoded: Vec<_> = uri.query_values().unwrap().collect();
    let expected: Vec<_> = pairs
        .iter()
        .map(|&(n, v)| (n.into(), v.map(Into::into)))
        .collect();
    assert_eq!(decoded, expected);

    // The rendered form survives a full parse round trip too.
    let parsed = HttpUri::<Http>::parse(&uri.to_string()).unwrap();
    let decoded: Vec<_> = parsed.query_values().unwrap().collect();
    assert_eq!(decoded, expected);
}

#[test]
fn query_values_overwrite_prior_query() {
    let uri: HttpUri = HttpUri::builder()
        .host("h")
        .query("old=1")
        .query_values([("new", Some("2"))])
        .build()
        .unwrap();
    assert_eq!(uri.query(), Some("new=2"));
}

#[test]
fn userinfo_rejection() {
    let builder = HttpUri::<Http>::builder().host("h");
    assert_eq!(
        builder.clone().userinfo(Some("user")).unwrap_err(),
        BuildError::UserinfoDisallowed
    );
    assert_eq!(
        builder.clone().userinfo(Some("")).unwrap_err(),
        BuildError::UserinfoDisallowed
    );

    // Absent userinfo is the one accepted value.
    let uri = builder.userinfo(None).unwrap().build().unwrap();
    assert_eq!(uri.as_uri().userinfo(), None);
}

#[test]
fn parse_rejects_userinfo() {
    assert_eq!(
        HttpUri::<Http>::parse("http://user@example.com/").unwrap_err(),
        HttpParseError::Build(BuildError::UserinfoDisallowed)
    );
    assert_eq!(
        HttpUri::<Http>::parse("http://@example.com/").unwrap_err(),
        HttpParseError::Build(BuildError::UserinfoDisallowed)
    );
}

#[test]
fn scheme_mismatch_rejection() {
    match HttpUri::<Http>::parse("https://www.example.com/").unwrap_err() {
        HttpParseError::SchemeMismatch { expected, found } => {
            assert_eq!(expected, "http");
            assert_eq!(found, "https");
        }
        e => panic!("unexpected error: {e:?}"),
    }

    assert!(matches!(
        HttpsUri::parse("http://www.example.com/").unwrap_err(),
        HttpParseError::SchemeMismatch { .. }
    ));

    // The scheme comparison is case-insensitive on the parsed side.
    assert!(HttpUri::<Http>::parse("HTTP://example.com/").is_ok());
}

#[test]
fn malformed_input_propagates_syntax_errors() {
    assert!(matches!(
        HttpUri::<Http>::parse("http://exa mple.com/"),
        Err(HttpParseError::Syntax(_))
    ));
    assert!(matches!(
        HttpUri::<Http>::parse("not a uri"),
        Err(HttpParseError::Syntax(_))
    ));
}

#[test]
fn host_absence_vs_emptiness() {
    // No host at all is an absence error.
    assert_eq!(
        HttpUri::<Http>::builder().build().unwrap_err(),
        BuildError::MissingHost
    );
    // The empty string is a valid generic host but not an HTTP(S) one,
    // so it fails with a distinct validation error.
    assert_eq!(
        HttpUri::<Http>::builder().host("").build().unwrap_err(),
        BuildError::EmptyHost
    );
    // Note the asymmetry with ports, where empty means absent.
    let uri: HttpUri = HttpUri::builder().host("h").port("").build().unwrap();
    assert_eq!(uri.port(), None);

    assert_eq!(
        HttpUri::<Http>::parse("http:///x").unwrap_err(),
        HttpParseError::Build(BuildError::EmptyHost)
    );
    assert_eq!(
        HttpUri::<Http>::parse("http:/x").unwrap_err(),
        HttpParseError::Build(BuildError::MissingHost)
    );
}

#[test]
fn invalid_port_rejection() {
    assert_eq!(
        HttpUri::<Http>::builder()
            .host("h")
            .port("80a")
            .build()
            .unwrap_err(),
        BuildError::InvalidPort
    );
}

#[test]
fn percent_encoded_path_segments() {
    let uri: HttpUri = HttpUri::builder()
        .host("h")
        .path_segments(["a b", "c/d"])
        .build()
        .unwrap();
    assert_eq!(uri.to_string(), "http://h/a%20b/c%2Fd");

    let parsed = HttpUri::<Http>::parse(&uri.to_string()).unwrap();
    assert_eq!(parsed.path_segments(), ["", "a b", "c/d"]);
}

#[test]
fn repeatable_build_is_side_effect_free() {
    let builder = HttpUri::<Http>::builder()
        .host("h")
        .port(8080u16)
        .path_segments(["x"]);
    let a = builder.build().unwrap();
    let b = builder.build().unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string(), "http://h:8080/x");
}

#[cfg(feature = "net")]
#[test]
fn ip_address_hosts() {
    let uri: HttpUri = HttpUri::builder()
        .host(Ipv4Addr::new(127, 0, 0, 1))
        .build()
        .unwrap();
    assert_eq!(uri.to_string(), "http://127.0.0.1/");

    let uri: HttpUri = HttpUri::builder()
        .host(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 7))
        .port(8080u16)
        .build()
        .unwrap();
    assert_eq!(uri.to_string(), "http://[2001:db8::7]:8080/");
    assert_eq!(uri.host(), "[2001:db8::7]");

    let uri: HttpUri = HttpUri::builder()
        .host(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)))
        .build()
        .unwrap();
    assert_eq!(uri.host(), "192.0.2.1");

    let parsed = HttpUri::<Http>::parse("http://[2001:db8::7]:8080/").unwrap();
    assert_eq!(parsed.host(), "[2001:db8::7]");
    assert_eq!(parsed.port(), Some("8080"));
}

#[test]
fn host_is_lowercased() {
    let uri: HttpUri = HttpUri::builder().host("WWW.IETF.ORG").build().unwrap();
    assert_eq!(uri.host(), "www.ietf.org");

    let parsed = HttpUri::<Http>::parse("http://WWW.IETF.ORG/").unwrap();
    assert_eq!(parsed.host(), "www.ietf.org");
}
