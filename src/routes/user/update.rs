use actix_web::{put, web};

use crate::state::AppState;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{UpdateProfileReq, UserSummary};
use crate::utils::webutils::AuthedUser;

#[put("/update")]
async fn update_profile(
    state: web::Data<AppState>,
    auth: AuthedUser,
    body: web::Json<UpdateProfileReq>,
) -> ApiResult<UserSummary> {
    let summary = state
        .accounts
        .update_profile(&auth.0, body.into_inner())
        .await?;
    Ok(ApiResponse::Ok(summary))
}
