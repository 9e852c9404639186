use actix_web::get;

use crate::types::response::{ApiResponse, ApiResult};

#[get("/")]
async fn index() -> ApiResult<()> {
    Ok(ApiResponse::Text("Hello world!".to_string()))
}
