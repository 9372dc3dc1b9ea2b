use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use doctor_finder::config::{LogFormat, Settings};
use doctor_finder::core::DoctorMatcher;
use doctor_finder::routes::{self, handle_json_payload_error, AppState};
use doctor_finder::services::ReferenceData;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match settings.logging.log_format() {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Compact => subscriber.compact().init(),
    }

    info!("Starting Doctor Finder service...");

    // Reference data is loaded once; the server never starts without it
    let data = match ReferenceData::load(
        &settings.data.symptom_map_path,
        &settings.data.doctors_path,
    ) {
        Ok(data) => Arc::new(data),
        Err(e) => {
            error!("Failed to load reference data: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = AppState {
        matcher: DoctorMatcher::new(data),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
