use filestash::http::parser::{ParseError, parse_request_head};

#[test]
fn test_parse_simple_get_request() {
    let req = parse_request_head(b"GET / HTTP/1.1\r\nHost: example.com").unwrap();

    assert_eq!(req.method, "GET");
    assert_eq!(req.target, "/");
    assert_eq!(req.version, "HTTP/1.1");
    assert_eq!(req.headers.get("Host").unwrap(), "example.com");
}

#[test]
fn test_parse_request_line_only() {
    let req = parse_request_head(b"GET /a.txt HTTP/1.1").unwrap();

    assert_eq!(req.target, "/a.txt");
    assert!(req.headers.is_empty());
}

#[test]
fn test_parse_multiple_headers() {
    let head = b"GET /path HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*";
    let req = parse_request_head(head).unwrap();

    assert_eq!(req.headers.get("Host").unwrap(), "example.com");
    assert_eq!(req.headers.get("User-Agent").unwrap(), "test-client");
    assert_eq!(req.headers.get("Accept").unwrap(), "*/*");
}

#[test]
fn test_parse_two_tokens_is_enough() {
    let req = parse_request_head(b"GET /b.png").unwrap();

    assert_eq!(req.target, "/b.png");
    assert_eq!(req.version, "");
}

#[test]
fn test_parse_method_is_not_validated() {
    let req = parse_request_head(b"BREW /pot HTTP/1.1").unwrap();

    assert_eq!(req.method, "BREW");
    assert_eq!(req.target, "/pot");
}

#[test]
fn test_parse_target_taken_verbatim() {
    let req = parse_request_head(b"GET /../etc/passwd%20x?q=1 HTTP/1.1").unwrap();

    assert_eq!(req.target, "/../etc/passwd%20x?q=1");
}

#[test]
fn test_parse_splits_on_single_spaces() {
    let req = parse_request_head(b"GET  /a.txt HTTP/1.1").unwrap();

    assert_eq!(req.target, "");
}

#[test]
fn test_parse_single_token_is_malformed() {
    let result = parse_request_head(b"GET\r\nHost: example.com");

    assert_eq!(result.unwrap_err(), ParseError::MalformedRequest);
}

#[test]
fn test_parse_empty_head_is_malformed() {
    assert_eq!(
        parse_request_head(b"").unwrap_err(),
        ParseError::MalformedRequest
    );
}

#[test]
fn test_parse_header_without_colon_is_ignored() {
    let req = parse_request_head(b"GET / HTTP/1.1\r\nBrokenHeader\r\nHost: h").unwrap();

    assert_eq!(req.headers.len(), 1);
    assert_eq!(req.header("Host"), Some("h"));
}

#[test]
fn test_parse_invalid_utf8_is_tolerated() {
    let req = parse_request_head(b"GET /caf\xe9.txt HTTP/1.1").unwrap();

    assert_eq!(req.target, "/caf\u{FFFD}.txt");
}
