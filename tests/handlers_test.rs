use actix_web::{test, web, App};
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use shortener_portal::api::config::ServiceConfig;
use shortener_portal::api::handlers::{index, shorten};
use shortener_portal::render::{ViewContext, ViewRenderer};

/// Renderer that records every render call so tests can assert on the
/// exact context handed across the seam.
struct RecordingRenderer {
    calls: Arc<Mutex<Vec<(String, ViewContext)>>>,
}

impl ViewRenderer for RecordingRenderer {
    fn render(&self, view: &str, context: &ViewContext) -> anyhow::Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((view.to_string(), context.clone()));
        Ok(format!("rendered {}", view))
    }
}

type RenderCalls = Arc<Mutex<Vec<(String, ViewContext)>>>;

fn test_state(host: &str) -> (web::Data<ServiceConfig>, web::Data<Arc<dyn ViewRenderer>>, RenderCalls) {
    let calls: RenderCalls = Arc::new(Mutex::new(Vec::new()));
    let renderer: Arc<dyn ViewRenderer> = Arc::new(RecordingRenderer {
        calls: calls.clone(),
    });
    let config = ServiceConfig {
        host: host.to_string(),
        api_key: "test-key".to_string(),
        request_timeout: Duration::from_secs(5),
    };
    (web::Data::new(config), web::Data::new(renderer), calls)
}

#[actix_web::test]
async fn invalid_url_gets_the_fixed_400() {
    let (config, renderer, calls) = test_state("http://127.0.0.1:9");
    let app = test::init_service(
        App::new()
            .app_data(config)
            .app_data(renderer)
            .service(web::resource("/shorten").route(web::post().to(shorten))),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/shorten")
        .set_form([("url", "not a url")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"Invalid URL");

    // Rejection happens before any rendering
    assert!(calls.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn backend_failure_gets_a_502_not_a_success_page() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/set")
        .with_status(503)
        .create_async()
        .await;

    let (config, renderer, calls) = test_state(&server.url());
    let app = test::init_service(
        App::new()
            .app_data(config)
            .app_data(renderer)
            .service(web::resource("/shorten").route(web::post().to(shorten))),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/shorten")
        .set_form([("url", "https://example.com")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 502);
    assert!(calls.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn success_renders_the_enriched_context() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/set")
        .with_status(200)
        .with_body(r#"{"short":"abc123","duration":90}"#)
        .create_async()
        .await;

    let (config, renderer, calls) = test_state(&server.url());
    let app = test::init_service(
        App::new()
            .app_data(config)
            .app_data(renderer)
            .service(web::resource("/shorten").route(web::post().to(shorten))),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/shorten")
        .set_form([("url", "https://example.com/path?q=1")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"rendered success");

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (view, context) = &calls[0];
    assert_eq!(view, "success");
    assert_eq!(context["short"], json!("abc123"));
    assert_eq!(context["duration"], json!("1.5 minutes"));
    assert_eq!(context["SERVICE_HOST"], json!(server.url()));
}

#[actix_web::test]
async fn index_renders_with_an_empty_context() {
    let (config, renderer, calls) = test_state("http://127.0.0.1:9");
    let app = test::init_service(
        App::new()
            .app_data(config)
            .app_data(renderer)
            .service(web::resource("/").route(web::get().to(index))),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (view, context) = &calls[0];
    assert_eq!(view, "index");
    assert!(context.is_empty());
}
