use actix_web::{get, web};
use serde::Serialize;
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize)]
pub struct HealthRes {}

/// Ready once the database answers.
#[get("")]
async fn health(
    db: web::Data<Arc<DbService>>,
) -> ApiResult<HealthRes> {
    db.ping().await?;
    Ok(ApiResponse::EmptyOk)
}
