use actix_web::{middleware, web, App};
use std::sync::Arc;
use user_service::{
    config::EnvConfig,
    db::memory_service::MemoryService,
    routes::{configure_routes, configure_static},
    types::user::User,
    utils::webutils::recover,
};

pub struct TestClient {
    pub db: Arc<MemoryService>,
    pub config: EnvConfig,
}

impl TestClient {
    pub fn new(db: Arc<MemoryService>, config: EnvConfig) -> Self {
        TestClient { db, config }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        self.create_app_with(|_| {})
    }

    /// Same app as `main`, with `extra` routes registered ahead of the
    /// static file fallback.
    pub fn create_app_with<F>(&self, extra: F) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    >
    where
        F: FnOnce(&mut web::ServiceConfig),
    {
        let public_dir = self.config.public_dir.clone();

        App::new()
            .wrap(middleware::from_fn(recover))
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(self.config.clone()))
            .configure(configure_routes)
            .configure(extra)
            .configure(|cfg| configure_static(cfg, &public_dir))
    }

    #[allow(dead_code)]
    pub fn seed_user(&self, email: &str, password: &str) -> User {
        self.db.create_user(User::new(email, password))
    }
}
