// Route exports
pub mod auth;
pub mod dogs;
pub mod errors;
pub mod extractor;

use actix_web::web;

use crate::core::{AuthService, DogService};

pub use errors::{handle_json_payload_error, handle_path_error, handle_query_payload_error};
pub use extractor::AuthenticatedUser;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub dogs: DogService,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(dogs: DogService, auth: AuthService) -> Self {
        Self { dogs, auth }
    }
}

/// Extractor configs that turn malformed input into 400 responses
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
        .app_data(web::PathConfig::default().error_handler(handle_path_error));
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(auth::configure)
            .configure(dogs::configure),
    );
}
