use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod page;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;
    logger::init(&cfg)?;

    // One connection at a time, so a single thread is enough
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config::listen_addr();

    let listener = server::create_listener(addr).map_err(|e| {
        logger::log_error(&format!("Failed to bind {addr}: {e}"));
        e
    })?;
    let shutdown = server::ShutdownSignal::register()?;

    let port = listener.local_addr()?.port();
    let state = Arc::new(config::AppState::new(cfg, port));

    logger::log_server_start(&addr);

    server::serve(listener, state, async move {
        logger::log_signal(shutdown.recv().await);
    })
    .await;

    logger::log_server_stopped();
    Ok(())
}
