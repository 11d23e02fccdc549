use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use advice_server::{
    app_state::AppState, config::Config, handlers::configure, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    config.validate_for_production();

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    log::info!(
        "starting HTTP server on {}:{} (model {})",
        host,
        port,
        config.llm_model
    );

    let state = web::Data::new(AppState::new(config));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .wrap(Cors::permissive())
            .configure(configure)
    })
    .bind((host, port))?
    .run()
    .await
}
