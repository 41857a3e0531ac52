use actix_web::{post, web};

use crate::state::AppState;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{LogInReq, UserSummary};

#[post("/log_in")]
async fn log_in(state: web::Data<AppState>, body: web::Json<LogInReq>) -> ApiResult<UserSummary> {
    let summary = state.auth.log_in(body.into_inner()).await?;
    Ok(ApiResponse::Ok(summary))
}
