//! HTTP response building module
//!
//! Provides builders for the responses the diagnostic server sends.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response, StatusCode};

/// Content type of every response body
pub const CONTENT_TYPE_HTML: &str = "text/html";

/// Build 200 OK response carrying the diagnostic page
pub fn build_page_response(html: String) -> Response<Full<Bytes>> {
    let content_length = html.len();

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", CONTENT_TYPE_HTML)
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(html)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 501 Not Implemented response for methods other than GET and HEAD
pub fn build_501_response(method: &Method) -> Response<Full<Bytes>> {
    let body = format!(
        "<html>\n<head><title>Error response</title></head>\n<body>\n\
         <h1>Error response</h1>\n<p>Error code: 501</p>\n\
         <p>Message: Unsupported method ('{method}').</p>\n</body>\n</html>\n"
    );
    let content_length = body.len();

    Response::builder()
        .status(StatusCode::NOT_IMPLEMENTED)
        .header("Content-Type", CONTENT_TYPE_HTML)
        .header("Content-Length", content_length)
        .header("Allow", "GET, HEAD")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("501", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_response_headers() {
        let resp = build_page_response("<html></html>".to_string());
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["content-type"], "text/html");
        assert_eq!(resp.headers()["content-length"], "13");
    }

    #[test]
    fn test_501_names_method() {
        let resp = build_501_response(&Method::POST);
        assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
        assert_eq!(resp.headers()["content-type"], "text/html");
        assert_eq!(resp.headers()["allow"], "GET, HEAD");
    }
}
