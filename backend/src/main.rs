//! Bookshelf entry-point: loads settings and the seed catalogue, then serves
//! the REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use bookshelf::inbound::http::health::HealthState;
use server::{BuildMode, ServerConfig, ServerSettings, create_server, load_session_key};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let key = load_session_key(
        &settings.session_key_file(),
        settings.session_allow_ephemeral,
        BuildMode::from_debug_assertions(),
    )?;
    let bind_addr = settings.bind_addr()?;
    let seed = settings.load_seed()?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(key, settings.cookie_secure, bind_addr, seed);
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "listening");
    server.await
}
