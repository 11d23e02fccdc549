pub mod advice_handler;
pub mod health_handler;

use actix_web::web;

use crate::errors::AppError;

pub use advice_handler::{
    banking_literacy, career_pathfinder, digital_services, disaster_alerts, doubt_solver,
    farming_advisory, generate_learning_plan, generate_quiz, government_schemes, legal_advice,
    log_sos, planning_tools,
};
pub use health_handler::health_check;

/// Unparseable bodies get the same `{"error": ...}` 400 as missing fields.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("rejecting request body: {}", err);
        AppError::BadRequest(format!("Invalid request body: {}", err)).into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(generate_learning_plan)
        .service(generate_quiz)
        .service(farming_advisory)
        .service(legal_advice)
        .service(government_schemes)
        .service(log_sos)
        .service(disaster_alerts)
        .service(banking_literacy)
        .service(planning_tools)
        .service(digital_services)
        .service(career_pathfinder)
        .service(doubt_solver)
        .service(health_check);
}
