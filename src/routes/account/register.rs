use crate::db::service::DbService;
use crate::types::account::{RAccountRegister, RegisterRes};
use crate::types::error::{AppError, FieldErrors};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{post, web};
use std::sync::Arc;
use tracing::debug;

pub const CREATED_MESSAGE: &str = "Created Successfully!";

#[post("")]
async fn register(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    body: web::Json<RAccountRegister>,
) -> ApiResult<RegisterRes> {
    let new_account = body.into_inner().validated().map_err(|errors| {
        debug!("registration rejected: {errors}");
        AppError::Fields(errors)
    })?;

    if db.account_exists_by_email(&new_account.email).await? {
        let mut errors = FieldErrors::default();
        errors.add("email", "account with this email already exists.");
        return Err(errors.into());
    }

    db.create_user(new_account).await?;

    Ok(ApiResponse::Created(RegisterRes {
        data: CREATED_MESSAGE.to_string(),
    }))
}
