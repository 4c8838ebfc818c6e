mod api;
mod config;
mod error;
mod handlers;
mod services;

use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use config::Config;
use services::{CompletionClient, OpenAiClient};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/* ---------- Shared State ---------- */
pub struct AppState {
    pub client: Arc<dyn CompletionClient>,
}

fn cors(config: &Config) -> Cors {
    match &config.cors_allowed_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::CONTENT_TYPE])
            .max_age(3600),
        None => Cors::default(),
    }
}

/* ---------- main ---------- */
#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "relay_chat=info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Fail before binding if the credential or any setting is unusable.
    let config = Config::from_env().inspect_err(|e| tracing::error!("{e}"))?;
    tracing::info!(?config, "configuration loaded");

    let client: Arc<dyn CompletionClient> = Arc::new(OpenAiClient::new(&config));
    let app_state = web::Data::new(AppState { client });

    tracing::info!("Server starting at http://{}:{}", config.host, config.port);

    let server_config = config.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(cors(&server_config))
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(handlers::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;
    Ok(())
}
