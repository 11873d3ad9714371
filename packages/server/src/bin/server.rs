//! Chat fan-out server.
//!
//! Accepts WebSocket connections, binds identities from `init` frames and
//! fans every chat line out to all connected clients through the message bus.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin chatline-server
//! cargo run --bin chatline-server -- --host 0.0.0.0 --port 3000
//! cargo run --bin chatline-server -- --backend redis --identity redis --redis-url redis://127.0.0.1:6379
//! ```

use std::{sync::Arc, time::Duration};

use chatline_server::{
    config::{
        BackendKind, DEFAULT_BUS_RETRY_MS, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_REDIS_URL,
        IdentityMode, ServerConfig,
    },
    domain::ConnectionRegistry,
    infrastructure::{
        Backends, redis_connection::RedisSettings, registry::InMemoryConnectionRegistry,
    },
    ui::{AppState, Server},
    usecase::FanOutListener,
};
use chatline_shared::{logger::setup_logger, time::SystemClock};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chatline-server")]
#[command(about = "WebSocket chat server with pub/sub fan-out", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "CHATLINE_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "CHATLINE_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Where history and the message bus live
    #[arg(long, env = "CHATLINE_BACKEND", value_enum, default_value_t = BackendKind::Memory)]
    backend: BackendKind,

    /// Redis connection URL (redis backend only)
    #[arg(long, env = "REDIS_URL", default_value = DEFAULT_REDIS_URL)]
    redis_url: String,

    /// Redis username, overrides the one in the URL
    #[arg(long, env = "REDIS_USERNAME")]
    redis_username: Option<String>,

    /// Redis password, overrides the one in the URL
    #[arg(long, env = "REDIS_PASSWORD", hide_env_values = true)]
    redis_password: Option<String>,

    /// How init frames are turned into display names
    #[arg(long, env = "CHATLINE_IDENTITY", value_enum, default_value_t = IdentityMode::Frame)]
    identity: IdentityMode,

    /// Keep at most this many history lines
    #[arg(long, env = "CHATLINE_HISTORY_LIMIT")]
    history_limit: Option<usize>,

    /// Pause of the fan-out listener after a bus error, in milliseconds
    #[arg(long, env = "CHATLINE_BUS_RETRY_MS", default_value_t = DEFAULT_BUS_RETRY_MS)]
    bus_retry_ms: u64,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            backend: args.backend,
            redis: RedisSettings {
                url: args.redis_url,
                username: args.redis_username,
                password: args.redis_password,
            },
            identity: args.identity,
            history_limit: args.history_limit,
            bus_retry_delay: Duration::from_millis(args.bus_retry_ms),
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let config = ServerConfig::from(Args::parse());
    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    // Initialize dependencies in order:
    // 1. Backends (history, bus, identity)
    // 2. Connection registry
    // 3. Fan-out listener
    // 4. AppState (use cases)
    // 5. Server

    // 1. Create backends
    let backends = match Backends::from_config(&config).await {
        Ok(backends) => backends,
        Err(e) => {
            tracing::error!("Failed to connect backends: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Backend: {:?}, identity: {:?}, history limit: {:?}",
        config.backend,
        config.identity,
        config.history_limit
    );

    // 2. Create registry
    let registry: Arc<dyn ConnectionRegistry> = Arc::new(InMemoryConnectionRegistry::new());

    // 3. Start the fan-out listener (runs until the process exits)
    FanOutListener::new(backends.bus.clone(), registry.clone(), config.bus_retry_delay)
        .spawn()
        .await;

    // 4. Create AppState
    let app_state = AppState::new(registry, backends, Arc::new(SystemClock));

    // 5. Create and run the server
    let server = Server::new(app_state);
    if let Err(e) = server.run(config.host, config.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
