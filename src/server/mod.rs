// Server module entry point
// Listener creation, the sequential serve loop and shutdown signals

pub mod connection;
pub mod listener;
pub mod serve;
pub mod signal;

// Re-export commonly used items
pub use listener::create_listener;
pub use serve::serve;
pub use signal::ShutdownSignal;
