use actix_web::{delete, web};

use crate::state::AppState;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::MessageRes;
use crate::utils::webutils::AuthedUser;

#[delete("/delete")]
async fn delete_account(state: web::Data<AppState>, auth: AuthedUser) -> ApiResult<MessageRes> {
    let res = state.accounts.delete_account(&auth.0).await?;
    Ok(ApiResponse::Ok(res))
}
