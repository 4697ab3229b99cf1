//! Plain-data HTTP request and response types.
//!
//! # Design
//! These types describe HTTP traffic as plain data so the transport seam
//! stays explicit: `HeroClient` builds `HttpRequest` values and interprets
//! `HttpResponse` values, while the injected [`Transport`](crate::Transport)
//! performs the actual network I/O. Request building and response parsing
//! are testable without a network, and any HTTP library can sit behind the
//! trait.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved into
//! transport implementations without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `HeroClient` for each operation; `path` is the full URL
/// including any query string.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a [`Transport`](crate::Transport) implementation after
/// executing an `HttpRequest`. Non-2xx statuses are carried as data, not
/// errors; interpreting the status is the client's job.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
