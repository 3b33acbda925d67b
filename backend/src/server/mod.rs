//! Server construction and middleware wiring.

mod config;

pub use config::{ConfigError, DEFAULT_BIND_ADDR, DEFAULT_GEOJSON_PATH, ServerConfig};

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use crate::domain::ports::MarkStore;
use crate::inbound::http::areas::list_area_tallies;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::marks::submit_mark;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::list_attendees;
use crate::middleware::trace::Trace;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let api = web::scope("/api")
        .service(list_area_tallies)
        .service(list_attendees)
        .service(submit_mark);

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live)
}

/// Construct an Actix HTTP server around the provided store.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    store: Arc<dyn MarkStore>,
    bind_addr: SocketAddr,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(HttpState::new(store));

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(feature = "test-support")]
pub use test_support::start_test_server;

#[cfg(feature = "test-support")]
mod test_support {
    //! Ephemeral-port server used by end-to-end tests.

    use super::*;
    use crate::outbound::InMemoryMarkStore;

    /// Start a server on an ephemeral localhost port, seeded with the given
    /// `(id, name)` areas, and return the bound address with the running
    /// server handle.
    ///
    /// # Errors
    ///
    /// Propagates [`std::io::Error`] when binding fails or no address was
    /// assigned.
    pub async fn start_test_server(areas: &[(&str, &str)]) -> std::io::Result<(SocketAddr, Server)> {
        let store = InMemoryMarkStore::new();
        for (id, name) in areas {
            store
                .register_area(id, name)
                .await
                .map_err(|error| std::io::Error::other(error.to_string()))?;
        }

        let health_state = web::Data::new(HealthState::new());
        let http_state = web::Data::new(HttpState::new(Arc::new(store) as Arc<dyn MarkStore>));

        let server = HttpServer::new(move || {
            build_app(AppDependencies {
                health_state: health_state.clone(),
                http_state: http_state.clone(),
            })
        })
        .workers(1)
        .bind(("127.0.0.1", 0))?;
        let addr = server
            .addrs()
            .first()
            .copied()
            .ok_or_else(|| std::io::Error::other("no bound address"))?;
        Ok((addr, server.run()))
    }
}
