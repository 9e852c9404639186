use crate::db::memory_service::MemoryService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::User;
use crate::utils::webutils::Bind;
use actix_web::{put, web};
use log::info;
use std::sync::Arc;

#[put("/{email}")]
async fn update(
    db: web::Data<Arc<MemoryService>>,
    email: web::Path<String>,
    body: Bind<User>,
) -> ApiResult<User> {
    info!("Updating user: {}", email.as_str());
    let user = db.update_user(&email, body.into_inner())?;
    Ok(ApiResponse::Ok(user))
}
