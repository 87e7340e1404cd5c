mod config;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use log::info;

use crate::config::Config;
use crate::services::email::build_mailer;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;
    let mailer = build_mailer(&config)?;

    info!("Listening on {}", config.bind_addr);

    let bind_addr = config.bind_addr.clone();
    HttpServer::new(move || {
        App::new()
            // The signup form posts from the static site host.
            .wrap(Cors::permissive())
            .app_data(web::Data::new(mailer.clone()))
            .configure(routes::init)
    })
    .bind(bind_addr.as_str())?
    .run()
    .await?;

    Ok(())
}
