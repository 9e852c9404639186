use crate::db::memory_service::MemoryService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::User;
use actix_web::{get, web};
use std::sync::Arc;

#[get("/{email}")]
async fn get(
    db: web::Data<Arc<MemoryService>>,
    email: web::Path<String>,
) -> ApiResult<User> {
    Ok(ApiResponse::Ok(db.get_user_by_email(&email)?))
}
