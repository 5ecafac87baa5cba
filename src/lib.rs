//! # vhoster
//!
//! Name-based virtual host dispatch for Rust services sharing one listener.
//! Nothing more. Nothing less.
//!
//! ## The contract
//!
//! Several logical sites share one socket. The `Host` header on each incoming
//! request decides which registered backend renders the response. vhoster owns
//! exactly that decision — everything around it stays someone else's job:
//!
//! - **Path routing** — the handler you register per host does its own
//! - **TLS / SNI** — terminate in front (nginx, k8s ingress, rustls layer)
//! - **Load balancing** — one handler per hostname, by design
//! - **Wildcard matching** — register the exact names you serve
//!
//! What's left for vhoster — the only part that changes between deployments:
//!
//! - Exact-hostname lookup, port suffix stripped (`example.org:8000` matches
//!   a registration for `example.org`)
//! - A single fallback handler for unknown or absent `Host` headers, and a
//!   bare `404 Not Found` when none is set
//! - Async I/O — tokio + hyper, HTTP/1.1 and HTTP/2, graceful shutdown
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use vhoster::{Request, Response, Router, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = Router::new()
//!         .host("example.org",     main_site)
//!         .host("api.example.org", api)
//!         .fallback(unknown_host);
//!
//!     Server::bind("0.0.0.0:3000").serve(app).await.unwrap();
//! }
//!
//! async fn main_site(_req: Request) -> Response {
//!     Response::text("welcome")
//! }
//!
//! async fn api(req: Request) -> Response {
//!     // vhoster sends bytes — it doesn't care how you build them:
//!     //   serde_json::to_vec(&payload).unwrap()
//!     //   format!(r#"{{"path":"{}"}}"#, req.path()).into_bytes()
//!     Response::json(format!(r#"{{"path":"{}"}}"#, req.path()).into_bytes())
//! }
//!
//! async fn unknown_host(_req: Request) -> Response {
//!     Response::text("no such site here")
//! }
//! ```

mod error;
mod handler;
mod request;
mod response;
mod router;
mod server;

pub mod redirect;

pub use error::Error;
pub use handler::Handler;
pub use http::StatusCode;
pub use request::Request;
pub use response::{ContentType, IntoResponse, Response};
pub use router::Router;
pub use server::Server;
