mod config;
mod dataset;
mod services;
mod stats;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info, warn};
use mime_guess::from_path;
use std::path::Path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded dashboard page; unknown paths fall back to
/// `index.html` so the page owns everything that is not an API route.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR
        .get_file(file_path)
        .or_else(|| STATIC_DIR.get_file("index.html"))
    {
        Some(file) => {
            let mime = from_path(file.path()).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    // The table is the only state the process has; refuse to start without it.
    let dataset = dataset::loader::load(Path::new(config::DATA_FILE)).map_err(|e| {
        error!("Failed to load dataset from {}: {}", config::DATA_FILE, e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;
    if dataset.is_empty() {
        warn!("{} contains no subnational rows", config::DATA_FILE);
    }
    info!(
        "Loaded {} subnational records covering {} countries",
        dataset.len(),
        dataset.countries().len()
    );

    let url = format!("http://127.0.0.1:{}", config::PORT);
    {
        let _url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&_url_clone);
        });
    }

    let dataset = web::Data::new(dataset);
    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .app_data(dataset.clone())
            .service(services::dashboard::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind((config::HOST, config::PORT))?
    .run()
    .await
}
