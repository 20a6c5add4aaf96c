//! Diagnostic page template
//!
//! The page is the same for every request, apart from the three
//! interpolated values.

use chrono::Local;

/// Timestamp layout shown on the page
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Values interpolated into the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub port: u16,
    pub timestamp: String,
    /// Request target as received, inserted verbatim
    pub path: String,
}

impl PageContext {
    /// Capture the current local time for a response
    pub fn now(port: u16, path: impl Into<String>) -> Self {
        Self {
            port,
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            path: path.into(),
        }
    }
}

/// Render the diagnostic HTML page
pub fn render(ctx: &PageContext) -> String {
    format!(
        r#"
<html>
<body style="font-family: Arial; text-align: center; padding: 50px;">
    <h1>DIAGNOSTIC SERVER RUNNING</h1>
    <p><strong>Port:</strong> {port}</p>
    <p><strong>Timestamp:</strong> {timestamp}</p>
    <p><strong>URL:</strong> {path}</p>
    <div style="background: #10b981; color: white; padding: 20px; margin: 20px; border-radius: 10px;">
        If you can see this page, the port is reachable and the problem lies with the other server.
    </div>
    <p>Now try the other server on the same port to compare.</p>
</body>
</html>
"#,
        port = ctx.port,
        timestamp = ctx.timestamp,
        path = ctx.path,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(path: &str) -> PageContext {
        PageContext {
            port: 3000,
            timestamp: "2026-10-14 09:30:00".to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn test_render_interpolates_values() {
        let html = render(&ctx("/foo"));
        assert!(html.contains("<p><strong>Port:</strong> 3000</p>"));
        assert!(html.contains("<p><strong>Timestamp:</strong> 2026-10-14 09:30:00</p>"));
        assert!(html.contains("<p><strong>URL:</strong> /foo</p>"));
    }

    #[test]
    fn test_path_is_not_escaped() {
        let path = "/a?b=<c>&d=\"e\"";
        let html = render(&ctx(path));
        assert!(html.contains(&format!("<p><strong>URL:</strong> {path}</p>")));
    }

    #[test]
    fn test_now_timestamp_layout() {
        let ctx = PageContext::now(3000, "/");
        assert!(chrono::NaiveDateTime::parse_from_str(&ctx.timestamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(ctx.path, "/");
    }
}
