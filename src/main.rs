#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod clock;
mod command;
mod config;
mod error;
mod fetch;
mod parse;
mod signature;

use std::{env, net::SocketAddr, str::FromStr, sync::Arc};

use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;

use crate::{
    clock::SystemClock,
    command::{Dispatcher, Envelope, SlashRequest},
    config::Config,
    error::Error,
    fetch::{make_client, HttpMenuSource},
};

pub use error::Result;

type Bot = Arc<Dispatcher<HttpMenuSource, SystemClock>>;

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

async fn lunch(State(bot): State<Bot>, headers: HeaderMap, body: String) -> Envelope {
    let request = SlashRequest::from_parts(&headers, body);
    bot.handle(&request).await
}

async fn health() -> &'static str {
    "ok"
}

fn init_logging(config: &Config) {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(config.log_level());
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("shutting down");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config);
    log::info!("{config:?}");
    if config.signing_secret.is_empty() {
        log::warn!("signing_secret not set, every request will be rejected");
    }

    let source = HttpMenuSource::new(make_client(config.fetch_timeout)?, config.menu_url.clone());
    let bot: Bot = Arc::new(Dispatcher::new(&config, source, SystemClock));

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))
        .map_err(|e| Error::Config(format!("invalid listen address: {e}")))?;
    let app = Router::new()
        .route("/lunch-bot", post(lunch))
        .route("/health", get(health))
        .with_state(bot);

    let listener = TcpListener::bind(addr).await?;
    log::info!("listening on http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
