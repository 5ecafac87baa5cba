//! Name-based virtual host router.
//!
//! One map from exact hostname to handler, plus an optional fallback. You
//! register a hostname, you get a handler. That is all — no wildcards, no
//! pattern matching, no case folding.

use std::collections::HashMap;
use std::sync::Arc;

use http::StatusCode;
use tracing::debug;

use crate::handler::{BoxFuture, BoxedHandler, ErasedHandler, Handler};
use crate::request::Request;
use crate::response::Response;

/// The virtual host router.
///
/// Holds the hostname registry and the optional fallback handler. Build it
/// once at startup; pass it to [`Server::serve`](crate::Server::serve), which
/// shares it behind an `Arc` and only reads it from then on. Each
/// [`Router::host`] call returns `self` so registrations chain naturally.
///
/// Dispatch is a pure function of the registry and the `Host` header: the
/// same header value against the same registrations always selects the same
/// handler.
pub struct Router {
    hosts: HashMap<String, BoxedHandler>,
    fallback: Option<BoxedHandler>,
}

impl Router {
    pub fn new() -> Self {
        Self { hosts: HashMap::new(), fallback: None }
    }

    /// Register a handler for an exact hostname. Returns `self` for chaining.
    ///
    /// Matching is byte-for-byte equality against the `Host` header after its
    /// `:port` suffix is stripped — no case folding is applied, so register
    /// lowercase names (`Host` values are lowercase in practice). Registering
    /// the same hostname twice silently replaces the earlier handler.
    ///
    /// ```rust,no_run
    /// # use vhoster::{Request, Response, Router};
    /// # async fn main_site(_: Request) -> Response { Response::text("") }
    /// # async fn api(_: Request) -> Response { Response::text("") }
    /// Router::new()
    ///     .host("example.org",     main_site)
    ///     .host("api.example.org", api);
    /// ```
    pub fn host(mut self, hostname: &str, handler: impl Handler) -> Self {
        self.hosts.insert(hostname.to_owned(), handler.into_boxed_handler());
        self
    }

    /// Remove a hostname registration. No-op if the hostname was never added.
    ///
    /// Takes `&mut self`: removal is a configuration-time operation, and the
    /// router must not be mutated once [`Server::serve`](crate::Server::serve)
    /// has started sharing it across connections.
    pub fn remove_host(&mut self, hostname: &str) {
        self.hosts.remove(hostname);
    }

    /// Set the fallback handler, used when the `Host` header is missing or
    /// names no registered host. Returns `self` for chaining.
    ///
    /// Without a fallback those requests get an empty `404 Not Found` from
    /// the router itself. Setting a fallback twice keeps the last one.
    pub fn fallback(mut self, handler: impl Handler) -> Self {
        self.fallback = Some(handler.into_boxed_handler());
        self
    }

    /// Dispatch one request to its virtual host.
    ///
    /// The lookup is synchronous and delegates at most once; any asynchrony
    /// in the returned future comes from the selected handler. Missing and
    /// unmatched `Host` headers are deliberately indistinguishable — both
    /// fall through to the fallback, or to a ready `404` future when none is
    /// set. This never fails; a panicking handler unwinds through the caller
    /// untouched.
    pub fn route(&self, req: Request) -> BoxFuture {
        match self.select(req.header("host")) {
            Some(handler) => handler.call(req),
            None => {
                debug!(path = req.path(), "no virtual host matched and no fallback set");
                Box::pin(std::future::ready(Response::status(StatusCode::NOT_FOUND)))
            }
        }
    }

    /// Resolves a raw `Host` header value to a handler. Clones the `Arc` so
    /// the caller holds the handler independently of the request borrow.
    fn select(&self, host: Option<&str>) -> Option<BoxedHandler> {
        let named = host.and_then(|value| self.hosts.get(bare_hostname(value)));
        named.or(self.fallback.as_ref()).map(Arc::clone)
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}

/// Strips the `:port` suffix from a `Host` header value.
///
/// Everything from the first `:` on is discarded, unconditionally. Bracketed
/// IPv6 literals therefore never match a named registration; they fall
/// through to the fallback like any other unknown host.
fn bare_hostname(value: &str) -> &str {
    match value.split_once(':') {
        Some((name, _port)) => name,
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn request(host: Option<&str>) -> Request {
        let mut builder = http::Request::builder().uri("/");
        if let Some(host) = host {
            builder = builder.header("host", host);
        }
        let (parts, ()) = builder.body(()).unwrap().into_parts();
        Request::new(parts, Bytes::new())
    }

    async fn body_of(router: &Router, host: Option<&str>) -> Vec<u8> {
        router.route(request(host)).await.body().to_vec()
    }

    #[tokio::test]
    async fn missing_host_uses_fallback() {
        let router = Router::new()
            .fallback(|_req: Request| async { Response::text("correct result") });
        assert_eq!(body_of(&router, None).await, b"correct result");
    }

    #[tokio::test]
    async fn missing_host_without_fallback_is_not_found() {
        let router = Router::new();
        let response = router.route(request(None)).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert!(response.body().is_empty());
    }

    #[tokio::test]
    async fn exact_host_match_wins() {
        let router = Router::new()
            .host("example.org", |_req: Request| async { Response::text("winner") })
            .fallback(|_req: Request| async { Response::text("loser") });
        assert_eq!(body_of(&router, Some("example.org")).await, b"winner");
    }

    #[tokio::test]
    async fn port_suffix_is_ignored() {
        let router = Router::new()
            .host("example.org", |_req: Request| async { Response::text("winner") });
        assert_eq!(body_of(&router, Some("example.org:8000")).await, b"winner");
    }

    #[tokio::test]
    async fn unknown_host_uses_fallback() {
        let router = Router::new()
            .fallback(|_req: Request| async { Response::text("correct data") });
        assert_eq!(body_of(&router, Some("example.com")).await, b"correct data");
    }

    #[tokio::test]
    async fn unknown_host_without_fallback_is_not_found() {
        let router = Router::new();
        let response = router.route(request(Some("example.com"))).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn matching_is_case_sensitive() {
        let router = Router::new()
            .host("example.org", |_req: Request| async { Response::text("lower") });
        let response = router.route(request(Some("EXAMPLE.ORG"))).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn last_registration_wins() {
        let router = Router::new()
            .host("example.org", |_req: Request| async { Response::text("first") })
            .host("example.org", |_req: Request| async { Response::text("second") });
        assert_eq!(body_of(&router, Some("example.org")).await, b"second");
    }

    #[tokio::test]
    async fn removed_host_falls_through() {
        let mut router = Router::new()
            .host("example.org", |_req: Request| async { Response::text("gone") })
            .fallback(|_req: Request| async { Response::text("fallback") });
        router.remove_host("example.org");
        assert_eq!(body_of(&router, Some("example.org")).await, b"fallback");
    }

    #[tokio::test]
    async fn dispatch_is_idempotent() {
        let router = Router::new()
            .host("example.org", |_req: Request| async { Response::text("stable") })
            .fallback(|_req: Request| async { Response::text("other") });
        for _ in 0..3 {
            assert_eq!(body_of(&router, Some("example.org")).await, b"stable");
            assert_eq!(body_of(&router, Some("example.com")).await, b"other");
        }
    }

    #[tokio::test]
    async fn handler_asynchrony_is_forwarded() {
        let router = Router::new().host("slow.example.org", |_req: Request| async {
            tokio::task::yield_now().await;
            Response::text("eventually")
        });
        assert_eq!(body_of(&router, Some("slow.example.org")).await, b"eventually");
    }

    #[test]
    fn bare_hostname_strips_from_first_colon() {
        assert_eq!(bare_hostname("example.org"), "example.org");
        assert_eq!(bare_hostname("example.org:8000"), "example.org");
        assert_eq!(bare_hostname("example.org:8000:junk"), "example.org");
        assert_eq!(bare_hostname(""), "");
    }
}
