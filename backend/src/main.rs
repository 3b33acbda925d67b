//! Backend entry-point: loads the area registry and serves the REST API.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::domain::ports::MarkStore;
use backend::inbound::http::health::HealthState;
use backend::outbound::InMemoryMarkStore;
use backend::server::{ServerConfig, create_server};
use geodata::parse_area_features;

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

    let config = ServerConfig::from_env().map_err(std::io::Error::other)?;

    let payload = std::fs::read_to_string(&config.geojson_path).map_err(|e| {
        std::io::Error::other(format!(
            "failed to read area registry at {}: {e}",
            config.geojson_path.display()
        ))
    })?;
    let features = parse_area_features(&payload).map_err(std::io::Error::other)?;

    let store = InMemoryMarkStore::new();
    for feature in &features {
        store
            .register_area(&feature.code, &feature.name)
            .await
            .map_err(std::io::Error::other)?;
    }
    info!(areas = features.len(), addr = %config.bind_addr, "area registry loaded");

    let health_state = web::Data::new(HealthState::new());
    let store: Arc<dyn MarkStore> = Arc::new(store);
    create_server(health_state, store, config.bind_addr)?.await
}
