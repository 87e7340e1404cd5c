use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::services::email::Mailer;
use crate::services::validation::valid_email;

#[derive(Deserialize)]
pub struct NotifyRequest {
    pub email: Option<String>,
    pub hp: Option<String>,
}

pub async fn notify(
    req: web::Json<NotifyRequest>,
    mailer: web::Data<Arc<dyn Mailer>>,
) -> impl Responder {
    let req = req.into_inner();

    // Honeypot: a filled hidden field marks a bot. Answer success and
    // drop the submission without contacting the provider.
    if req.hp.as_deref().is_some_and(|hp| !hp.is_empty()) {
        return HttpResponse::Ok().body("OK");
    }

    let email = match req.email.as_deref().and_then(valid_email) {
        Some(email) => email.to_string(),
        None => return HttpResponse::BadRequest().body("Invalid email"),
    };

    match mailer.send(&email).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "ok": true })),
        Err(e) => {
            error!("Failed to relay signup for {}: {:?}", email, e);
            HttpResponse::InternalServerError().body("Server error")
        }
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.route("/notify", web::post().to(notify));
}
