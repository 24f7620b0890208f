use pico::http::response::{Response, ResponseBuilder, ResponseHeaders, StatusCode};
use pico::http::writer::{header_block, status_line, ResponseWriter};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::Forbidden.as_u16(), 403);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::Forbidden.reason_phrase(), "Forbidden");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::MethodNotAllowed.reason_phrase(),
        "Method Not Allowed"
    );
}

#[test]
fn test_status_line_format() {
    assert_eq!(status_line(StatusCode::Ok), "HTTP/1.1 200 OK\r\n");
    assert_eq!(
        status_line(StatusCode::MethodNotAllowed),
        "HTTP/1.1 405 Method Not Allowed\r\n"
    );
}

#[test]
fn test_default_headers_in_order() {
    let headers = ResponseHeaders::defaults();
    let entries: Vec<_> = headers.iter().collect();

    assert_eq!(
        entries,
        vec![
            ("Content-Type", "text/html"),
            ("Content-Length", "0"),
            ("Connection", "close"),
        ]
    );
}

#[test]
fn test_header_override_keeps_position() {
    let headers = ResponseHeaders::defaults()
        .with("Content-Length", 42)
        .with("X-Extra", "yes");

    assert_eq!(
        header_block(&headers),
        "Content-Type: text/html\r\nContent-Length: 42\r\nConnection: close\r\nX-Extra: yes\r\n\r\n"
    );
}

#[test]
fn test_override_does_not_touch_defaults() {
    let _overridden = ResponseHeaders::defaults().with("Content-Length", 99);

    assert_eq!(ResponseHeaders::defaults().get("Content-Length"), Some("0"));
}

#[test]
fn test_response_builder_auto_content_length() {
    let body = b"This is the body".to_vec();
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(body.clone())
        .build();

    assert_eq!(
        response.headers.get("Content-Length"),
        Some(body.len().to_string().as_str())
    );
}

#[test]
fn test_response_builder_preserves_explicit_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Length", 999)
        .body(b"test".to_vec())
        .build();

    assert_eq!(response.headers.get("Content-Length"), Some("999"));
}

#[test]
fn test_response_head_has_length_but_no_body() {
    let response = Response::head(42);

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.headers.get("Content-Length"), Some("42"));
    assert!(response.body.is_empty());
}

#[test]
fn test_response_empty_uses_defaults() {
    let response = Response::empty(StatusCode::NotFound);

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.headers, ResponseHeaders::defaults());
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_writer_serializes_full_response() {
    let response = Response::ok(b"hi".to_vec());
    let mut out: Vec<u8> = Vec::new();

    ResponseWriter::new(&response)
        .write_to_stream(&mut out)
        .await
        .unwrap();

    assert_eq!(
        out,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 2\r\nConnection: close\r\n\r\nhi".to_vec()
    );
}

#[tokio::test]
async fn test_writer_serializes_error_response() {
    let response = Response::empty(StatusCode::Forbidden);
    let mut out: Vec<u8> = Vec::new();

    ResponseWriter::new(&response)
        .write_to_stream(&mut out)
        .await
        .unwrap();

    assert_eq!(
        out,
        b"HTTP/1.1 403 Forbidden\r\nContent-Type: text/html\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_vec()
    );
}
