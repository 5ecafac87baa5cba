//! Minimal vhoster example — two named sites, a legacy redirect, a fallback.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example vhosts
//!
//! Try:
//!   curl -H 'host: example.org'          http://localhost:3000/
//!   curl -H 'host: api.example.org'      http://localhost:3000/status
//!   curl -H 'host: api.example.org:3000' http://localhost:3000/status
//!   curl -i -H 'host: www.example.org'   http://localhost:3000/docs
//!   curl -H 'host: nobody.example'       http://localhost:3000/

use vhoster::{Request, Response, Router, Server, redirect};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let app = Router::new()
        .host("example.org",     main_site)
        .host("api.example.org", api)
        .host("www.example.org", redirect::to_host("http://example.org"))
        .fallback(unknown_host);

    Server::bind("0.0.0.0:3000")
        .serve(app)
        .await
        .expect("server error");
}

// The per-host handler owns everything after the host decision — path
// routing included. Plug in whatever router your backend already uses.
async fn main_site(req: Request) -> Response {
    match req.path() {
        "/" => Response::text("welcome to example.org"),
        _   => Response::status(vhoster::StatusCode::NOT_FOUND),
    }
}

// Response::json takes Vec<u8> — pass bytes from your serialiser:
//   serde_json:  Response::json(serde_json::to_vec(&payload).unwrap())
//   hand-built:  Response::json(format!(...).into_bytes())  ← zero-cost, no copy
async fn api(req: Request) -> Response {
    Response::json(format!(r#"{{"path":"{}","ok":true}}"#, req.path()).into_bytes())
}

// Fallback: seen for absent Host headers and hosts nobody registered.
async fn unknown_host(req: Request) -> Response {
    let host = req.header("host").unwrap_or("<none>");
    Response::text(format!("no site configured for {host}"))
}
