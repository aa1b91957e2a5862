use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use crate::api::config::ServiceConfig;
use crate::api::models::ShortenRequest;
use crate::proxy;
use crate::render::{ViewContext, ViewRenderer, INDEX_VIEW, SUCCESS_VIEW};
use crate::validator::validate_url;

/// Fixed body for rejected input
const INVALID_URL_BODY: &str = "Invalid URL";
/// Fixed body when the backend call fails
const SERVICE_FAILURE_BODY: &str = "Shortening service unavailable";

/// Landing page: renders the index view with an empty context.
pub async fn index(renderer: web::Data<Arc<dyn ViewRenderer>>) -> impl Responder {
    debug!("Rendering index view");
    match renderer.render(INDEX_VIEW, &ViewContext::new()) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            error!("Failed to render index view: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// HTTP handler for the shorten action.
///
/// Validates the submitted URL, forwards it to the shortening service and
/// renders the enriched result. Rejected input gets a fixed 400; a backend
/// failure gets a fixed 502 rather than a partial success.
///
/// # Arguments
/// * `form` - URL-encoded form containing the `url` field
/// * `config` - Shortening service connection details
/// * `renderer` - View rendering collaborator
///
/// # Returns
/// * HTTP response with the rendered result page or a fixed error body
#[instrument(skip(form, config, renderer))]
pub async fn shorten(
    form: web::Form<ShortenRequest>,
    config: web::Data<ServiceConfig>,
    renderer: web::Data<Arc<dyn ViewRenderer>>,
) -> impl Responder {
    info!("Received shorten request for URL: {}", form.url);

    if validate_url(&form.url).is_err() {
        warn!("Rejected invalid URL: {}", form.url);
        return HttpResponse::BadRequest()
            .content_type("text/plain; charset=utf-8")
            .body(INVALID_URL_BODY);
    }
    debug!("URL validation passed: {}", form.url);

    let context = match proxy::shorten(&form.url, &config).await {
        Ok(context) => context,
        Err(e) => {
            error!("Shortening proxy call failed: {}", e);
            return HttpResponse::BadGateway()
                .content_type("text/plain; charset=utf-8")
                .body(SERVICE_FAILURE_BODY);
        }
    };

    debug!("Rendering success view with {} context fields", context.len());
    match renderer.render(SUCCESS_VIEW, &context) {
        Ok(body) => {
            info!("Shorten request completed successfully");
            HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(body)
        }
        Err(e) => {
            error!("Failed to render success view: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
