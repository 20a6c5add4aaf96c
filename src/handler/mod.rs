//! Request handler module
//!
//! Every GET receives the diagnostic page, whatever the path. HEAD gets the
//! same headers, anything else is answered with 501.

use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::page::{self, PageContext};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: &AppState,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    // Origin-form targets keep their query string
    let target = req.uri().to_string();

    let resp = if *method == Method::GET || *method == Method::HEAD {
        let ctx = PageContext::now(state.port, target.as_str());
        http::build_page_response(page::render(&ctx))
    } else {
        http::build_501_response(method)
    };

    if state.config.logging.access_log {
        let entry = access_entry(&req, &resp, target, peer_addr);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(resp)
}

fn access_entry<B>(
    req: &Request<B>,
    resp: &Response<Full<Bytes>>,
    target: String,
    peer_addr: SocketAddr,
) -> AccessLogEntry {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        target,
    );
    entry.http_version = version_label(req.version()).to_string();
    entry.status = resp.status().as_u16();
    entry.body_bytes = if *req.method() == Method::HEAD {
        0
    } else {
        resp.headers()
            .get("content-length")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    };
    entry.referer = header("referer");
    entry.user_agent = header("user-agent");
    entry
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
