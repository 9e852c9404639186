use crate::db::memory_service::MemoryService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::User;
use actix_web::{delete, web};
use log::info;
use std::collections::HashMap;
use std::sync::Arc;

#[delete("/{email}")]
async fn delete(
    db: web::Data<Arc<MemoryService>>,
    email: web::Path<String>,
) -> ApiResult<HashMap<String, User>> {
    info!("Deleting user: {}", email.as_str());
    let remaining = db.delete_user(&email)?;
    Ok(ApiResponse::Ok(remaining))
}
