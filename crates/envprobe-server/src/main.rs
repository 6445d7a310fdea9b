//! envprobe server
//!
//! - `GET /` answers with the exposed slice of the process environment
//! - Mode (`pod` / `public`) and listen address come from config + env

use tracing_subscriber::{fmt, EnvFilter};

use envprobe_core::env::ProcessEnv;
use envprobe_core::error::{EnvProbeError, Result};
use envprobe_server::{app_state, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cfg = config::load(&ProcessEnv)?;
    let listen = cfg.server.listen_addr()?;
    let mode = cfg.probe.mode;

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, %mode, "envprobe-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| EnvProbeError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| EnvProbeError::Internal(format!("server failed: {e}")))
}
