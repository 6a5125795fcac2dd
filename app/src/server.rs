//! HTTP service exposing the landing page and the platform metadata.

use std::sync::Arc;

use actix_web::{
    dev::ServerHandle,
    get,
    web::Data,
    App, HttpResponse, HttpServer, Responder,
};
use anyhow::{Context, Result};
use log::info;
use tokio::sync::Mutex;

use presale_common::{
    config::VERSION,
    frame::{self, FrameConfig},
};

use crate::{config::ServerConfig, page};

pub type SharedAppServer = Arc<AppServer>;

pub struct AppServer {
    handle: Mutex<Option<ServerHandle>>,
}

impl AppServer {
    /// Bind and start serving. The returned server can be stopped later
    /// through [`AppServer::stop`].
    pub async fn new(config: ServerConfig, frame_config: FrameConfig) -> Result<SharedAppServer> {
        let server = Arc::new(Self {
            handle: Mutex::new(None),
        });

        if log::log_enabled!(log::Level::Info) {
            info!("Starting HTTP server on {}", config.bind_address);
        }

        let data = Data::new(frame_config);
        let http_server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .service(index)
                .service(manifest)
                .service(health)
        })
        .disable_signals()
        .bind(&config.bind_address)
        .with_context(|| format!("Failed to bind {}", config.bind_address))?
        .workers(config.threads)
        .run();

        {
            // save the server handle to be able to stop it later
            let handle = http_server.handle();
            let mut lock = server.handle.lock().await;
            *lock = Some(handle);
        }
        tokio::spawn(http_server);

        Ok(server)
    }

    pub async fn stop(&self, graceful: bool) {
        info!("Stopping HTTP server");
        let handle = self.handle.lock().await.take();
        if let Some(handle) = handle {
            handle.stop(graceful).await;
        }
    }
}

#[get("/")]
async fn index(config: Data<FrameConfig>) -> impl Responder {
    let metadata = frame::page_metadata(&config);
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page::render_page(&metadata))
}

#[get("/.well-known/farcaster.json")]
async fn manifest(config: Data<FrameConfig>) -> impl Responder {
    HttpResponse::Ok().json(frame::manifest(&config))
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().body(format!("Presale mini app\nRunning on: {}", VERSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, test};
    use serde_json::Value;

    fn frame_config() -> FrameConfig {
        FrameConfig {
            base_url: "https://presale.example".to_owned(),
            name: Some("Token Presale".to_owned()),
            subtitle: Some("".to_owned()),
            ..Default::default()
        }
    }

    #[actix_web::test]
    async fn manifest_endpoint_serves_filtered_document() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(frame_config()))
                .service(manifest),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/.well-known/farcaster.json")
            .to_request();
        let document: Value = test::call_and_read_body_json(&app, request).await;

        assert!(document["accountAssociation"]["signature"].is_string());
        let frame = document["frame"].as_object().unwrap();
        assert_eq!(frame["name"], "Token Presale");
        assert_eq!(frame["homeUrl"], "https://presale.example");
        // the empty subtitle is dropped, not emitted as ""
        assert!(!frame.contains_key("subtitle"));
    }

    #[actix_web::test]
    async fn index_serves_the_page() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(frame_config()))
                .service(index),
        )
        .await;

        let request = test::TestRequest::get().uri("/").to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_success());

        let body = to_bytes(response.into_body()).await.unwrap();
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("TOKEN PRESALE"));
        assert!(html.contains("fc:frame"));
    }

    #[actix_web::test]
    async fn health_reports_version() {
        let app = test::init_service(App::new().service(health)).await;
        let request = test::TestRequest::get().uri("/health").to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_success());

        let body = to_bytes(response.into_body()).await.unwrap();
        assert!(std::str::from_utf8(&body).unwrap().contains(VERSION));
    }
}
