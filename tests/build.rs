use http_uri::{component::Scheme, error::BuildError, Uri, UriBuilder};

const FOO: &Scheme = Scheme::new_or_panic("foo");

#[test]
fn build_full_uri() {
    let uri = Uri::builder()
        .scheme(FOO)
        .userinfo("us er")
        .host("ex ample.com")
        .port(8042u16)
        .path_segments(["", "over", "there"])
        .query("name=ferret")
        .fragment("nose")
        .build()
        .unwrap();
    assert_eq!(
        uri.to_string(),
        "foo://us%20er@ex%20ample.com:8042/over/there?name=ferret#nose"
    );
    assert_eq!(uri.userinfo(), Some("us er"));
    assert_eq!(uri.host(), Some("ex ample.com"));
}

#[test]
fn build_without_authority() {
    let uri = Uri::builder()
        .scheme(FOO)
        .path_segments(["a", "b"])
        .build()
        .unwrap();
    assert!(!uri.has_authority());
    assert_eq!(uri.to_string(), "foo:a/b");

    let uri = Uri::builder().scheme(FOO).build().unwrap();
    assert_eq!(uri.to_string(), "foo:");
}

#[test]
fn scheme_and_host_lowercased_on_build() {
    let uri = Uri::builder()
        .scheme(Scheme::new_or_panic("FOO"))
        .host("EXAMPLE.com")
        .build()
        .unwrap();
    assert_eq!(uri.scheme().as_str(), "foo");
    assert_eq!(uri.host(), Some("example.com"));

    let uri = Uri::builder()
        .scheme(FOO)
        .host("[2001:DB8::7]")
        .build()
        .unwrap();
    assert_eq!(uri.host(), Some("[2001:db8::7]"));
}

#[test]
fn missing_scheme() {
    assert_eq!(
        Uri::builder().host("h").build().unwrap_err(),
        BuildError::MissingScheme
    );
}

#[test]
fn authority_parts_require_a_host() {
    assert_eq!(
        Uri::builder().scheme(FOO).port(80u16).build().unwrap_err(),
        BuildError::AuthorityPartsWithoutHost
    );
    assert_eq!(
        Uri::builder().scheme(FOO).userinfo("u").build().unwrap_err(),
        BuildError::AuthorityPartsWithoutHost
    );
}

#[test]
fn malformed_bracketed_host() {
    for host in ["[::1", "[]", "[x]"] {
        assert_eq!(
            Uri::builder().scheme(FOO).host(host).build().unwrap_err(),
            BuildError::InvalidHost,
            "host: {host:?}"
        );
    }
}

#[test]
fn port_must_be_digits() {
    assert_eq!(
        Uri::builder().scheme(FOO).host("h").port("80a").build().unwrap_err(),
        BuildError::InvalidPort
    );

    // The empty port is valid in the generic grammar and renders as a
    // bare colon.
    let uri = Uri::builder().scheme(FOO).host("h").port("").build().unwrap();
    assert_eq!(uri.port(), Some(""));
    assert_eq!(uri.to_string(), "foo://h:");
}

#[test]
fn query_and_fragment_validated_as_wire_form() {
    assert_eq!(
        Uri::builder().scheme(FOO).query("a b").build().unwrap_err(),
        BuildError::InvalidQuery
    );
    assert_eq!(
        Uri::builder().scheme(FOO).query("%ZZ").build().unwrap_err(),
        BuildError::InvalidQuery
    );
    assert_eq!(
        Uri::builder().scheme(FOO).fragment("a#b").build().unwrap_err(),
        BuildError::InvalidFragment
    );
}

#[test]
fn rootless_path_with_host() {
    assert_eq!(
        Uri::builder()
            .scheme(FOO)
            .host("h")
            .path_segments(["x"])
            .build()
            .unwrap_err(),
        BuildError::NonemptyRootlessPath
    );

    // The same segments are fine without a host.
    let uri = Uri::builder().scheme(FOO).path_segments(["x"]).build().unwrap();
    assert_eq!(uri.to_string(), "foo:x");
}

#[test]
fn double_slash_path_without_host() {
    assert_eq!(
        Uri::builder()
            .scheme(FOO)
            .path_segments(["", "", "x"])
            .build()
            .unwrap_err(),
        BuildError::PathStartsWithDoubleSlash
    );

    // With a host, a double slash in the path is unambiguous.
    let uri = Uri::builder()
        .scheme(FOO)
        .host("h")
        .path_segments(["", "", "x"])
        .build()
        .unwrap();
    assert_eq!(uri.to_string(), "foo://h//x");
}

#[test]
fn optional_combinator() {
    let uri = Uri::builder()
        .scheme(FOO)
        .host("h")
        .optional(UriBuilder::port, Some(8042u16))
        .optional(UriBuilder::query, None::<&str>)
        .build()
        .unwrap();
    assert_eq!(uri.to_string(), "foo://h:8042");
}

#[test]
fn to_builder_round_trip() {
    let uri = Uri::parse("foo://u@h:123/a/b?q#f").unwrap();
    assert_eq!(uri.to_builder().build().unwrap(), uri);

    // The seeded builder can be modified before rebuilding.
    let moved = uri.to_builder().fragment("elsewhere").build().unwrap();
    assert_eq!(moved.to_string(), "foo://u@h:123/a/b?q#elsewhere");
}

#[test]
fn build_is_repeatable() {
    let builder = Uri::builder().scheme(FOO).host("h").query("q");
    let a = builder.build().unwrap();
    let b = builder.build().unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string(), "foo://h?q");
}
