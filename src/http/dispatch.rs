//! Method dispatch.
//!
//! Maps a parsed method and the outcome of path resolution to the one action
//! the connection will take. Kept free of I/O so the decision table can be
//! tested without sockets or files.

use crate::http::request::Method;
use crate::http::response::StatusCode;

/// What to answer a request with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// 200 with headers and the resource bytes
    Get,
    /// 200 with headers only
    Head,
    /// 403, sent for every POST to an existing resource
    Forbidden,
    /// 405, any method other than GET, HEAD and POST
    NotAllowed,
    /// 404, the target did not resolve
    NotFound,
    /// 400, the request head could not be parsed
    BadRequest,
}

impl Action {
    pub fn status(&self) -> StatusCode {
        match self {
            Action::Get | Action::Head => StatusCode::Ok,
            Action::Forbidden => StatusCode::Forbidden,
            Action::NotAllowed => StatusCode::MethodNotAllowed,
            Action::NotFound => StatusCode::NotFound,
            Action::BadRequest => StatusCode::BadRequest,
        }
    }
}

/// First match wins: a missing resource beats any method check, then POST is
/// refused before the generic method filter.
pub fn dispatch(method: &Method, found: bool) -> Action {
    if !found {
        return Action::NotFound;
    }

    match method {
        Method::POST => Action::Forbidden,
        Method::GET => Action::Get,
        Method::HEAD => Action::Head,
        _ => Action::NotAllowed,
    }
}
