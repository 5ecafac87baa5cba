//! Built-in canonical-host redirect handler.
//!
//! Every virtual-host deployment accumulates legacy names — `www.` variants,
//! old domains, typo squats you own. Register them all against one redirect
//! to the name you actually serve:
//!
//! ```rust,no_run
//! use vhoster::{Request, Response, Router, redirect};
//!
//! # async fn main_site(_: Request) -> Response { Response::text("") }
//! let app = Router::new()
//!     .host("example.org",     main_site)
//!     .host("www.example.org", redirect::to_host("https://example.org"))
//!     .host("example.net",     redirect::to_host("https://example.org"));
//! ```

use http::StatusCode;

use crate::handler::Handler;
use crate::request::Request;
use crate::response::Response;

/// Returns a handler that answers every request with a `301 Moved
/// Permanently` to the same path and query on `authority`.
///
/// `authority` is the scheme plus host of the canonical site, without a
/// trailing slash — e.g. `"https://example.org"`.
pub fn to_host(authority: impl Into<String>) -> impl Handler {
    let authority = authority.into();
    move |req: Request| {
        let target = req
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        let location = format!("{authority}{target}");
        async move {
            Response::builder()
                .status(StatusCode::MOVED_PERMANENTLY)
                .header("location", &location)
                .no_body()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::ErasedHandler;
    use bytes::Bytes;

    fn request(path_and_query: &str) -> Request {
        let (parts, ()) = http::Request::builder()
            .uri(path_and_query)
            .header("host", "www.example.org")
            .body(())
            .unwrap()
            .into_parts();
        Request::new(parts, Bytes::new())
    }

    #[tokio::test]
    async fn redirects_preserve_path_and_query() {
        let handler = to_host("https://example.org").into_boxed_handler();
        let response = handler.call(request("/docs?page=2")).await;
        assert_eq!(response.status_code(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.header("location"), Some("https://example.org/docs?page=2"));
        assert!(response.body().is_empty());
    }

    #[tokio::test]
    async fn bare_root_redirects_to_root() {
        let handler = to_host("https://example.org").into_boxed_handler();
        let response = handler.call(request("/")).await;
        assert_eq!(response.header("location"), Some("https://example.org/"));
    }
}
