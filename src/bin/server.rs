use std::{
    fs::OpenOptions,
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    process::ExitCode,
    sync::Arc,
    time::Duration,
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{EnvFilter, Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use home_finance_web::{
    AppConfig, AppState, DEFAULT_API_URL, PaginationConfig, build_router, graceful_shutdown,
};

/// The web front-end for the home finance API.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The base URL of the finance API.
    #[arg(long, env = "FINANCE_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// The address to serve the web app from.
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// The port to serve the web app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// The number of transactions shown per page.
    #[arg(long, default_value_t = 20)]
    page_size: u64,

    /// The number of transactions shown on the dashboard.
    #[arg(long, default_value_t = 5)]
    recent_count: u64,

    /// Seconds to wait for the finance API before giving up.
    #[arg(long)]
    request_timeout_secs: Option<u64>,

    /// The directory with the stylesheets and scripts.
    #[arg(long, default_value = "static/")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();

    let config = AppConfig {
        api_url: args.api_url,
        request_timeout: args.request_timeout_secs.map(Duration::from_secs),
        pagination: PaginationConfig {
            page_size: args.page_size,
            recent_transactions: args.recent_count,
        },
    };

    let api = match config.finance_api() {
        Ok(api) => api,
        Err(error) => {
            tracing::error!("Could not configure the finance API client: {error}");
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(api, &config);

    if let Err(error) = state.app.load_initial_data().await {
        tracing::error!("Erro ao carregar dados iniciais: {error}");
    }

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state, &args.static_dir));

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    let addr = SocketAddr::from((args.host, args.port));
    tracing::info!(
        "HTTP server listening on {addr}, using the finance API at {}",
        config.api_url
    );

    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server error: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn setup_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let stdout_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_filter(filter::LevelFilter::INFO);

    let debug_log = match OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")
    {
        Ok(log_file) => Some(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_writer(Arc::new(log_file))
                .with_filter(filter::LevelFilter::DEBUG),
        ),
        Err(error) => {
            eprintln!("Could not open debug.log, logging to stdout only: {error}");
            None
        }
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_log)
        .with(debug_log)
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // Errors are logged by the handlers.
        .on_failure(());

    router.layer(tracing_layer)
}
