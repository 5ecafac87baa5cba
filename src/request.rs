//! Incoming HTTP request type.

use bytes::Bytes;
use http::request::Parts;
use http::{HeaderMap, Method, Uri};

/// An incoming HTTP request, with its body already collected.
///
/// The server layer reads the full body before dispatch, so handlers see a
/// plain byte slice rather than a stream. vhoster does not touch the bytes —
/// parse them with whatever your backend uses.
pub struct Request {
    parts: Parts,
    body: Bytes,
}

impl Request {
    pub(crate) fn new(parts: Parts, body: Bytes) -> Self {
        Self { parts, body }
    }

    pub fn method(&self) -> &Method { &self.parts.method }
    pub fn uri(&self) -> &Uri { &self.parts.uri }
    pub fn path(&self) -> &str { self.parts.uri.path() }
    pub fn headers(&self) -> &HeaderMap { &self.parts.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup.
    ///
    /// Returns the first value for `name`. Values that are not valid UTF-8
    /// read as absent — the router treats such a `Host` header the same as a
    /// missing one.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.parts.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_header(name: &str, value: &[u8]) -> Request {
        let (parts, ()) = http::Request::builder()
            .uri("/index.html")
            .header(name, value)
            .body(())
            .unwrap()
            .into_parts();
        Request::new(parts, Bytes::from_static(b"payload"))
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = request_with_header("Host", b"example.org");
        assert_eq!(req.header("host"), Some("example.org"));
        assert_eq!(req.header("HOST"), Some("example.org"));
        assert_eq!(req.header("x-missing"), None);
    }

    #[test]
    fn non_utf8_header_reads_as_absent() {
        let req = request_with_header("host", b"\xffexample.org");
        assert_eq!(req.header("host"), None);
    }

    #[test]
    fn accessors_expose_parts_and_body() {
        let req = request_with_header("host", b"example.org");
        assert_eq!(req.method(), http::Method::GET);
        assert_eq!(req.path(), "/index.html");
        assert_eq!(req.body(), b"payload");
    }
}
