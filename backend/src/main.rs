mod config;
mod services;
mod workflow;

use crate::config::ServerConfig;
use crate::services::generate::UploadLimit;
use crate::workflow::{ContentWorkflow, UnconfiguredWorkflow, UpstreamWorkflow};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

fn build_workflow(config: &ServerConfig) -> io::Result<Arc<dyn ContentWorkflow>> {
    match &config.workflow_url {
        Some(url) => {
            let upstream = UpstreamWorkflow::new(url.clone(), config.workflow_timeout)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            info!("Forwarding generation requests to {}", url);
            Ok(Arc::new(upstream))
        }
        None => {
            warn!("WORKFLOW_URL is not set; /generate will answer 500");
            Ok(Arc::new(UnconfiguredWorkflow))
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config =
        ServerConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let url = config.url();

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    let workflow = web::Data::from(build_workflow(&config)?);
    let upload_limit = UploadLimit(config.upload_limit_bytes);

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .app_data(workflow.clone())
            .app_data(web::Data::new(upload_limit))
            .service(services::generate::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
