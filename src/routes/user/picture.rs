use actix_web::{delete, put, web};
use uuid::Uuid;

use crate::state::AppState;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{PublicProfileRes, SetPictureReq};
use crate::utils::webutils::AuthedUser;

// The binary lives in the external asset store; these routes manage the
// reference on the profile, owner-only.

#[put("/picture/{id}")]
async fn set_picture(
    state: web::Data<AppState>,
    auth: AuthedUser,
    path: web::Path<Uuid>,
    body: web::Json<SetPictureReq>,
) -> ApiResult<PublicProfileRes> {
    let res = state
        .accounts
        .set_picture(&auth.0, &path.into_inner(), body.into_inner())
        .await?;
    Ok(ApiResponse::Ok(res))
}

#[delete("/picture/{id}")]
async fn delete_picture(
    state: web::Data<AppState>,
    auth: AuthedUser,
    path: web::Path<Uuid>,
) -> ApiResult<PublicProfileRes> {
    let res = state
        .accounts
        .delete_picture(&auth.0, &path.into_inner())
        .await?;
    Ok(ApiResponse::Ok(res))
}
