use actix_web::{web, App};
use apex_api::db::service::DbService;
use std::sync::Arc;

pub struct TestClient {
    pub db: Arc<DbService>,
}

impl TestClient {
    pub fn new(db: Arc<DbService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(apex_api::routes::configure_routes)
    }
}
