use std::future::{ready, Ready};

use actix_web::{
    dev::{Payload, ServiceRequest},
    web, FromRequest, HttpMessage, HttpRequest,
};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use uuid::Uuid;

use crate::state::AppState;
use crate::types::{error::AppError, user::Identity};

/// Identity resolved by the session validator, parked in the request
/// extensions for the rest of the request.
#[derive(Clone)]
pub struct AuthedUser(pub Identity);

impl FromRequest for AuthedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthedUser>()
                .cloned()
                .ok_or_else(|| AppError::Unauthorized.into()),
        )
    }
}

/// Bearer middleware hook. A token is valid iff some record currently
/// stores it as its session token; anything else is a 401 before the
/// handler runs.
pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let state = match req.app_data::<web::Data<AppState>>() {
        Some(state) => state.clone(),
        None => {
            return Err((
                AppError::Internal("app state not configured".to_string()).into(),
                req,
            ))
        }
    };

    match state.store.find_by_session_token(credentials.token()).await {
        Ok(Some(identity)) => {
            req.extensions_mut().insert(AuthedUser(identity));
            Ok(req)
        }
        Ok(None) => Err((AppError::Unauthorized.into(), req)),
        Err(e) => Err((e.into(), req)),
    }
}

/// Ownership guard: only the owning identity may mutate or delete an owned
/// resource.
pub fn authorize_owner(identity: &Identity, resource_owner: &Uuid) -> Result<(), AppError> {
    if identity.id != *resource_owner {
        return Err(AppError::Forbidden);
    }
    Ok(())
}
