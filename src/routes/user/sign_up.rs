use actix_web::{post, web};

use crate::state::AppState;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{SignUpReq, UserSummary};

#[post("/sign_up")]
async fn sign_up(
    state: web::Data<AppState>,
    body: web::Json<SignUpReq>,
) -> ApiResult<UserSummary> {
    let summary = state.auth.sign_up(body.into_inner()).await?;
    Ok(ApiResponse::Ok(summary))
}
