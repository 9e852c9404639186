use crate::db::memory_service::MemoryService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::User;
use crate::utils::webutils::Bind;
use actix_web::{post, web};
use std::sync::Arc;

#[post("")]
async fn create(
    db: web::Data<Arc<MemoryService>>,
    body: Bind<User>,
) -> ApiResult<User> {
    let user = db.create_user(body.into_inner());
    Ok(ApiResponse::Created(user))
}
