use std::sync::Arc;

use chrono::Utc;
use log::info;
use uuid::Uuid;

use crate::db::IdentityStore;
use crate::services::auth::normalize_email;
use crate::types::{
    error::AppError,
    user::{
        Identity, MessageRes, PhotoRef, PublicProfileRes, SetPictureReq, UpdateProfileReq,
        UserSummary,
    },
};
use crate::utils::webutils::authorize_owner;

/// Profile reads, photo-reference mutation and account deletion. The photo
/// binary itself lives in the external asset store; only the reference is
/// managed here.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn IdentityStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn IdentityStore>) -> Self {
        Self { store }
    }

    pub async fn profile(&self, id: &Uuid) -> Result<PublicProfileRes, AppError> {
        let identity = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        Ok(identity.public_profile())
    }

    /// Partial profile update. Submitted email/username are re-checked for
    /// uniqueness against everyone but the caller; absent or empty fields
    /// keep their stored value.
    pub async fn update_profile(
        &self,
        caller: &Identity,
        req: UpdateProfileReq,
    ) -> Result<UserSummary, AppError> {
        let email = req
            .email
            .as_deref()
            .map(normalize_email)
            .filter(|s| !s.is_empty());
        let username = req
            .username
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let name = req
            .name
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let description = req
            .description
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        if email.is_none() && username.is_none() && name.is_none() && description.is_none() {
            return Err(AppError::Validation("Missing parameter(s)".to_string()));
        }

        if let Some(email) = &email {
            if let Some(holder) = self.store.find_by_email(email).await? {
                if holder.id != caller.id {
                    return Err(AppError::Conflict("this email is already used.".to_string()));
                }
            }
        }
        if let Some(username) = &username {
            if let Some(holder) = self.store.find_by_username(username).await? {
                if holder.id != caller.id {
                    return Err(AppError::Conflict(
                        "this username is already used.".to_string(),
                    ));
                }
            }
        }

        let mut identity = self
            .store
            .find_by_id(&caller.id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        if let Some(email) = email {
            identity.email = email;
        }
        if let Some(username) = username {
            identity.profile.username = username;
        }
        if let Some(name) = name {
            identity.profile.name = name;
        }
        if let Some(description) = description {
            identity.profile.description = description;
        }
        identity.updated_at = Utc::now();
        self.store.update(&identity).await?;
        Ok(identity.summary())
    }

    pub async fn set_picture(
        &self,
        caller: &Identity,
        target: &Uuid,
        req: SetPictureReq,
    ) -> Result<PublicProfileRes, AppError> {
        authorize_owner(caller, target)?;
        if req.url.trim().is_empty() || req.picture_id.trim().is_empty() {
            return Err(AppError::Validation("Missing photo".to_string()));
        }

        let mut identity = self
            .store
            .find_by_id(target)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        identity.profile.photo = Some(PhotoRef {
            url: req.url,
            picture_id: req.picture_id,
        });
        identity.updated_at = Utc::now();
        self.store.update(&identity).await?;
        Ok(identity.public_profile())
    }

    pub async fn delete_picture(
        &self,
        caller: &Identity,
        target: &Uuid,
    ) -> Result<PublicProfileRes, AppError> {
        authorize_owner(caller, target)?;

        let mut identity = self
            .store
            .find_by_id(target)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        identity.profile.photo = None;
        identity.updated_at = Utc::now();
        self.store.update(&identity).await?;
        Ok(identity.public_profile())
    }

    /// Removes the caller's own record. Removal of owned listings and their
    /// assets is the resource collaborators' job and happens out of band.
    pub async fn delete_account(&self, caller: &Identity) -> Result<MessageRes, AppError> {
        self.store.delete(&caller.id).await?;
        info!("deleted account {}", caller.id);
        Ok(MessageRes {
            message: "User deleted".to_string(),
        })
    }
}
