//! Logger module
//!
//! Provides logging utilities for the diagnostic server including:
//! - Server lifecycle logging (always stdout)
//! - Access logging (stderr unless a file is configured)
//! - Error and warning logging (stderr unless a file is configured)

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to access log
fn write_access(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => eprintln!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

/// Lifecycle lines bypass the writer and always go to stdout
pub fn log_server_start(addr: &SocketAddr) {
    for line in server_start_lines(addr) {
        println!("{line}");
    }
}

fn server_start_lines(addr: &SocketAddr) -> [String; 3] {
    [
        format!("Diagnostic server started on http://localhost:{}", addr.port()),
        format!("Listening on: {addr}"),
        "Press Ctrl+C to stop".to_string(),
    ]
}

pub fn log_signal(name: &str) {
    println!("\n[SIGNAL] {name} received, shutting down");
}

pub fn log_server_stopped() {
    println!("Server stopped");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}
