use actix_web::{put, web};

use crate::state::AppState;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{UpdatePasswordReq, UserSummary};
use crate::utils::webutils::AuthedUser;

#[put("/update_password")]
async fn update_password(
    state: web::Data<AppState>,
    auth: AuthedUser,
    body: web::Json<UpdatePasswordReq>,
) -> ApiResult<UserSummary> {
    let summary = state.auth.change_password(auth.0, body.into_inner()).await?;
    Ok(ApiResponse::Ok(summary))
}
