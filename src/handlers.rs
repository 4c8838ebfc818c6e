// src/handlers.rs

use super::api::ChatForm;
use super::error::ServiceError;
use super::services;
use super::AppState;
use actix_web::{
    error::{PayloadError, UrlencodedError},
    get,
    http::header::ContentType,
    route, web, HttpResponse, Responder,
};

const CHAT_PAGE: &str = include_str!("../templates/chat.html");

/// Largest urlencoded `/get` body accepted.
pub const MAX_FORM_BYTES: usize = 1024 * 1024;

pub fn configure(cfg: &mut web::ServiceConfig) {
    let form_config = web::FormConfig::default()
        .limit(MAX_FORM_BYTES)
        .error_handler(|err, _req| form_error(err).into());

    cfg.app_data(form_config)
        .service(index)
        .service(chat)
        .service(health);
}

// Oversize bodies get their own status; anything else unreadable counts as a missing `msg`.
fn form_error(err: UrlencodedError) -> ServiceError {
    tracing::debug!(error = %err, "rejecting unreadable form body");
    match err {
        UrlencodedError::Overflow { .. } | UrlencodedError::Payload(PayloadError::Overflow) => {
            ServiceError::PayloadTooLarge {
                limit: MAX_FORM_BYTES,
            }
        }
        _ => ServiceError::MissingInput,
    }
}

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(CHAT_PAGE)
}

#[route("/get", method = "GET", method = "POST")]
pub async fn chat(
    state: web::Data<AppState>,
    form: web::Form<ChatForm>,
) -> Result<impl Responder, ServiceError> {
    let msg = form
        .into_inner()
        .msg
        .filter(|msg| !msg.is_empty())
        .ok_or(ServiceError::MissingInput)?;

    let reply = services::get_response(state.client.as_ref(), &msg)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "completion relay failed"))?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(reply))
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
