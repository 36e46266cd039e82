use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, middleware, web};
use serde_json::json;

use crate::db::{establish_connection_pool, run_migrations};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::contact::{
    create_contact, delete_contact, get_contact, list_contacts, update_contact, upcoming_birthdays,
};

pub mod db;
pub mod domain;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// JSON extractor configuration reporting malformed bodies as 422 with the
/// `{"detail": ...}` error shape used everywhere else.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::UnprocessableEntity().json(json!({ "detail": detail })),
        )
        .into()
    })
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    run_migrations(&pool)
        .map_err(|e| std::io::Error::other(format!("Failed to run migrations: {e}")))?;

    let repo = DieselRepository::new(pool);

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(json_config())
            .app_data(web::Data::new(repo.clone()))
            .service(create_contact)
            .service(list_contacts)
            .service(upcoming_birthdays)
            .service(get_contact)
            .service(update_contact)
            .service(delete_contact)
    })
    .bind(bind_address)?
    .run()
    .await
}
