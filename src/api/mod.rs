pub mod config;
pub mod handlers;
pub mod models;

use actix_web::{web, App, HttpServer};
use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::api::config::AppConfig;
use crate::api::handlers::{index, shorten};
use crate::render::{StaticRenderer, ViewRenderer};

/// Starts the portal server with the given configuration.
///
/// Wires the two inbound actions:
/// * `GET /` - landing page
/// * `POST /shorten` - validate, proxy to the shortening service, render
///
/// # Arguments
/// * `config` - Bind address and shortening service settings
///
/// # Returns
/// * `Result<()>` - Success or an error
#[instrument(skip(config))]
pub async fn start_server(config: AppConfig) -> Result<()> {
    info!(
        "Starting shortener portal on {}:{}",
        config.bind_host, config.bind_port
    );

    let service_data = web::Data::new(config.service.clone());
    let renderer: Arc<dyn ViewRenderer> = Arc::new(StaticRenderer);
    let renderer_data = web::Data::new(renderer);

    HttpServer::new(move || {
        App::new()
            .app_data(service_data.clone())
            .app_data(renderer_data.clone())
            .service(web::resource("/").route(web::get().to(index)))
            .service(web::resource("/shorten").route(web::post().to(shorten)))
    })
    .bind((config.bind_host.as_str(), config.bind_port))
    .map_err(|e| {
        error!(
            "Failed to bind to {}:{}: {}",
            config.bind_host, config.bind_port, e
        );
        e
    })?
    .run()
    .await?;

    info!("Server shutdown complete");
    Ok(())
}
