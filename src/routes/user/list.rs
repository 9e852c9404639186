use crate::db::memory_service::MemoryService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::User;
use actix_web::{get, web};
use log::info;
use std::sync::Arc;

#[get("")]
async fn list(db: web::Data<Arc<MemoryService>>) -> ApiResult<Vec<User>> {
    let users = db.list();
    info!("List: {}", users.len());
    Ok(ApiResponse::Ok(users))
}
