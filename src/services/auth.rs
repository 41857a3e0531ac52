use std::sync::Arc;

use chrono::Utc;
use log::warn;

use crate::db::IdentityStore;
use crate::types::{
    error::AppError,
    mail::SendEmail,
    user::{Identity, LogInReq, Profile, SignUpReq, UpdatePasswordReq, UserSummary},
};
use crate::utils::{
    hash::{hash, verify},
    mail::Mailer,
    token::{new_id, new_salt, new_token, TOKEN_BYTES},
};

/// Casing policy: emails are compared lowercased, usernames as-is.
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn IdentityStore>,
    mailer: Arc<dyn Mailer>,
    mail_from: String,
}

impl AuthService {
    pub fn new(store: Arc<dyn IdentityStore>, mailer: Arc<dyn Mailer>, mail_from: String) -> Self {
        Self {
            store,
            mailer,
            mail_from,
        }
    }

    pub async fn sign_up(&self, req: SignUpReq) -> Result<UserSummary, AppError> {
        let email = normalize_email(&req.email);
        let username = req.username.trim().to_string();
        let name = req.name.trim().to_string();
        let description = req.description.trim().to_string();

        if email.is_empty()
            || req.password.is_empty()
            || username.is_empty()
            || name.is_empty()
            || description.is_empty()
        {
            return Err(AppError::Validation("Missing parameter(s)".to_string()));
        }

        // Friendly pre-check; the store's unique indexes are what actually
        // holds under concurrent signups.
        if self.store.find_by_email(&email).await?.is_some()
            || self.store.find_by_username(&username).await?.is_some()
        {
            return Err(AppError::Conflict(
                "Email or username is already used".to_string(),
            ));
        }

        let salt = new_salt();
        let now = Utc::now();
        let identity = Identity {
            id: new_id(),
            password_hash: hash(&salt, &req.password),
            salt,
            email,
            session_token: new_token(TOKEN_BYTES),
            profile: Profile {
                username,
                name,
                description,
                photo: None,
            },
            reset_token: None,
            reset_token_issued_at: None,
            created_at: now,
            updated_at: now,
        };

        self.store.insert(&identity).await?;
        Ok(identity.summary())
    }

    pub async fn log_in(&self, req: LogInReq) -> Result<UserSummary, AppError> {
        let email = normalize_email(&req.email);
        if email.is_empty() || req.password.is_empty() {
            return Err(AppError::Validation("Missing parameter(s)".to_string()));
        }

        let identity = self
            .store
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !verify(&identity.salt, &req.password, &identity.password_hash) {
            return Err(AppError::Authentication(
                "Password isn't correct".to_string(),
            ));
        }

        // The stored session token is returned as-is; login does not rotate.
        Ok(identity.summary())
    }

    pub async fn change_password(
        &self,
        mut identity: Identity,
        req: UpdatePasswordReq,
    ) -> Result<UserSummary, AppError> {
        if req.previous_password.is_empty() || req.new_password.is_empty() {
            return Err(AppError::Validation("Missing parameter(s)".to_string()));
        }

        if !verify(&identity.salt, &req.previous_password, &identity.password_hash) {
            return Err(AppError::Authentication(
                "Password isn't correct".to_string(),
            ));
        }

        // The candidate is hashed under the current salt on purpose: this is
        // the observable "same password" check of the source API.
        if hash(&identity.salt, &req.new_password) == identity.password_hash {
            return Err(AppError::Validation(
                "Password must be different".to_string(),
            ));
        }

        let salt = new_salt();
        identity.password_hash = hash(&salt, &req.new_password);
        identity.salt = salt;
        identity.session_token = new_token(TOKEN_BYTES);
        identity.updated_at = Utc::now();
        self.store.update(&identity).await?;

        // Notification is best-effort; the rotation above is committed
        // whether or not the mail goes out.
        let notice = SendEmail {
            from: self.mail_from.clone(),
            to: vec![identity.email.clone()],
            subject: "Your password was changed".to_string(),
            text: Some(format!(
                "The password of {} has been modified.",
                identity.profile.username
            )),
        };
        if let Err(e) = self.mailer.send(notice).await {
            warn!("password change notification failed: {e}");
        }

        Ok(identity.summary())
    }
}
