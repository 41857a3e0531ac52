use actix_web::{get, web};
use uuid::Uuid;

use crate::state::AppState;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::PublicProfileRes;

#[get("/users/{id}")]
async fn profile(state: web::Data<AppState>, path: web::Path<Uuid>) -> ApiResult<PublicProfileRes> {
    let res = state.accounts.profile(&path.into_inner()).await?;
    Ok(ApiResponse::Ok(res))
}
