use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use user_service::config::EnvConfig;
use user_service::db::memory_service::MemoryService;
use user_service::routes::{configure_routes, configure_static};
use user_service::utils::webutils::recover;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let config = EnvConfig::from_env();
    let addr = config.addr();

    let memory_service = Arc::new(MemoryService::new());

    log::info!("Server running -----> {}", addr);

    HttpServer::new(move || {
        let public_dir = config.public_dir.clone();

        App::new()
            .wrap(middleware::from_fn(recover))
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(Arc::clone(&memory_service)))
            .app_data(web::Data::new(config.clone()))
            .configure(configure_routes)
            .configure(|cfg| configure_static(cfg, &public_dir))
    })
    .bind(addr)?
    .run()
    .await
}
