use crate::types::error::AppError;
use actix_web::web;

pub mod account;
pub mod health;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );

    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/register").service(account::register::register)
    );
}
