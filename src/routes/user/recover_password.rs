use actix_web::{put, web};

use crate::state::AppState;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{MessageRes, RecoverPasswordReq};

#[put("/recover_password")]
async fn recover_password(
    state: web::Data<AppState>,
    body: web::Json<RecoverPasswordReq>,
) -> ApiResult<MessageRes> {
    let res = state.reset.request_reset(&body.email).await?;
    Ok(ApiResponse::Ok(res))
}
