use actix_web::{put, web};

use crate::state::AppState;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{ResetPasswordReq, ResetSummary};

#[put("/reset_password")]
async fn reset_password(
    state: web::Data<AppState>,
    body: web::Json<ResetPasswordReq>,
) -> ApiResult<ResetSummary> {
    let summary = state
        .reset
        .complete_reset(&body.update_password_token, &body.password)
        .await?;
    Ok(ApiResponse::Ok(summary))
}
