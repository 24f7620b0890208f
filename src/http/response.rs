use bytes::Bytes;

/// HTTP status codes the server can answer with.
///
/// - `Ok` (200): Resource served
/// - `BadRequest` (400): Malformed request head
/// - `Forbidden` (403): POST requests
/// - `NotFound` (404): Target does not resolve to a file
/// - `MethodNotAllowed` (405): Anything other than GET, HEAD or POST
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use pico::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use pico::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::Forbidden.reason_phrase(), "Forbidden");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

/// Response header block.
///
/// Starts from the fixed defaults (`Content-Type: text/html`,
/// `Content-Length: 0`, `Connection: close`) and is only changed through
/// [`ResponseHeaders::with`], which replaces a value in place and keeps the
/// original order. A fresh block is built for every response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHeaders {
    entries: Vec<(String, String)>,
}

impl ResponseHeaders {
    pub fn defaults() -> Self {
        Self {
            entries: vec![
                ("Content-Type".to_string(), "text/html".to_string()),
                ("Content-Length".to_string(), "0".to_string()),
                ("Connection".to_string(), "close".to_string()),
            ],
        }
    }

    /// Returns the block with `name` set to `value`. Existing names keep their
    /// position, new names are appended.
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        let name = name.into();
        let value = value.to_string();

        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ResponseHeaders {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Header block, defaults plus overrides
    pub headers: ResponseHeaders,
    /// Response body as bytes; empty for HEAD and error responses
    pub body: Bytes,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Length", 42)
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: ResponseHeaders,
    content_length_set: bool,
    body: Bytes,
}

impl ResponseBuilder {
    /// Creates a new response builder with the default header block.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: ResponseHeaders::defaults(),
            content_length_set: false,
            body: Bytes::new(),
        }
    }

    /// Overrides or adds a header.
    pub fn header(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        let key = key.into();
        if key == "Content-Length" {
            self.content_length_set = true;
        }
        self.headers = self.headers.with(key, value);
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds the final Response.
    ///
    /// `Content-Length` follows the body size unless it was set explicitly,
    /// which is how HEAD advertises a length without sending the bytes.
    pub fn build(mut self) -> Response {
        if !self.content_length_set {
            self.headers = self.headers.with("Content-Length", self.body.len());
        }

        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// 200 OK carrying `body`.
    pub fn ok(body: impl Into<Bytes>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .body(body)
            .build()
    }

    /// 200 OK with headers only, advertising `content_length`.
    pub fn head(content_length: u64) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Length", content_length)
            .build()
    }

    /// Bodiless response with the default headers (`Content-Length: 0`).
    pub fn empty(status: StatusCode) -> Self {
        ResponseBuilder::new(status).build()
    }
}
