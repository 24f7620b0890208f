use pico::http::request::{Method, Request, RequestBuilder};
use std::collections::HashMap;

#[test]
fn test_request_header_retrieval() {
    let mut headers = HashMap::new();
    headers.insert("Host".to_string(), "example.com".to_string());
    headers.insert("Content-Type".to_string(), "application/json".to_string());

    let req = Request {
        method: Method::GET,
        target: "/".to_string(),
        version: Some("HTTP/1.1".to_string()),
        headers,
    };

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
    // Lookups are exact
    assert_eq!(req.header("host"), None);
}

#[test]
fn test_request_line_with_version() {
    let req = RequestBuilder::new()
        .method(Method::HEAD)
        .target("/about.html")
        .version("HTTP/1.1")
        .build()
        .unwrap();

    assert_eq!(req.request_line(), "HEAD /about.html HTTP/1.1");
}

#[test]
fn test_request_line_without_version() {
    let req = RequestBuilder::new()
        .method(Method::Extension("BREW".to_string()))
        .target("/pot")
        .build()
        .unwrap();

    assert_eq!(req.request_line(), "BREW /pot");
}

#[test]
fn test_request_builder_requires_method_and_target() {
    assert!(RequestBuilder::new().target("/").build().is_err());
    assert!(RequestBuilder::new().method(Method::GET).build().is_err());
}

#[test]
fn test_request_builder_headers_last_wins() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .target("/")
        .header("Accept", "text/plain")
        .header("Accept", "text/html")
        .build()
        .unwrap();

    assert_eq!(req.header("Accept"), Some("text/html"));
}

#[test]
fn test_request_method_equality() {
    assert_eq!(Method::GET, Method::GET);
    assert_ne!(Method::GET, Method::POST);
}

#[test]
fn test_request_method_from_string() {
    assert_eq!(Method::parse("GET"), Method::GET);
    assert_eq!(Method::parse("POST"), Method::POST);
    assert_eq!(Method::parse("INVALID"), Method::Extension("INVALID".to_string()));
    // Case-sensitive
    assert_eq!(Method::parse("get"), Method::Extension("get".to_string()));
}

#[test]
fn test_request_method_display() {
    assert_eq!(Method::PUT.to_string(), "PUT");
    assert_eq!(Method::Extension("BREW".to_string()).to_string(), "BREW");
}
