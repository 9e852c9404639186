use std::path::Path;

use actix_files::Files;
use actix_web::web;

pub mod index;
pub mod upload;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index::index);
    cfg.service(
        web::scope("/users")
            .service(user::list::list)
            .service(user::create::create)
            .service(user::get::get)
            .service(user::update::update)
            .service(user::delete::delete),
    );
    cfg.service(web::scope("/upload").service(upload::upload));
}

/// Serves `public_dir` for any GET that no route above claimed. Must be
/// registered after `configure_routes`.
pub fn configure_static(cfg: &mut web::ServiceConfig, public_dir: &Path) {
    cfg.service(Files::new("/", public_dir));
}
