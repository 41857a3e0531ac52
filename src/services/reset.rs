use std::sync::Arc;

use chrono::Utc;

use crate::db::IdentityStore;
use crate::services::auth::normalize_email;
use crate::types::{
    error::AppError,
    mail::SendEmail,
    user::{MessageRes, ResetSummary},
};
use crate::utils::{
    hash::hash,
    mail::Mailer,
    token::{new_salt, new_token, TOKEN_BYTES},
};

/// How long a reset token can be redeemed after issuance, in milliseconds.
/// `now - issued_at >= WINDOW` means expired.
pub const RESET_TOKEN_WINDOW_MS: i64 = 9_000_000;

#[derive(Clone)]
pub struct PasswordResetService {
    store: Arc<dyn IdentityStore>,
    mailer: Arc<dyn Mailer>,
    mail_from: String,
    reset_url: String,
}

impl PasswordResetService {
    pub fn new(
        store: Arc<dyn IdentityStore>,
        mailer: Arc<dyn Mailer>,
        mail_from: String,
        reset_url: String,
    ) -> Self {
        Self {
            store,
            mailer,
            mail_from,
            reset_url,
        }
    }

    /// Issues a reset token for the account behind `email` and mails a
    /// redemption link. A pending token is simply overwritten.
    pub async fn request_reset(&self, email: &str) -> Result<MessageRes, AppError> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(AppError::Validation("Missing email".to_string()));
        }

        let mut identity = self
            .store
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let reset_token = new_token(TOKEN_BYTES);
        identity.reset_token = Some(reset_token.clone());
        identity.reset_token_issued_at = Some(Utc::now());
        identity.updated_at = Utc::now();
        self.store.update(&identity).await?;

        // Unlike the password-change notice, a failure here is surfaced: the
        // caller has no other way to obtain the link.
        self.mailer
            .send(SendEmail {
                from: self.mail_from.clone(),
                to: vec![identity.email],
                subject: "Reset your password".to_string(),
                text: Some(format!(
                    "Please follow this link to set a new password: {}?token={}. \
                     The link is only valid for a limited time.",
                    self.reset_url, reset_token
                )),
            })
            .await?;

        Ok(MessageRes {
            message: "A link has been sent to the user".to_string(),
        })
    }

    /// Redeems a reset token within the validity window. On success the
    /// credentials rotate and the token is consumed; an expired token is
    /// left in place untouched.
    pub async fn complete_reset(
        &self,
        reset_token: &str,
        new_password: &str,
    ) -> Result<ResetSummary, AppError> {
        if reset_token.is_empty() || new_password.is_empty() {
            return Err(AppError::Validation("Missing parameter(s)".to_string()));
        }

        let mut identity = self
            .store
            .find_by_reset_token(reset_token)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let issued_at = identity.reset_token_issued_at.ok_or_else(|| {
            AppError::Internal("reset token stored without issue time".to_string())
        })?;

        let age_ms = (Utc::now() - issued_at).num_milliseconds();
        if age_ms >= RESET_TOKEN_WINDOW_MS {
            return Err(AppError::Expired);
        }

        let salt = new_salt();
        identity.password_hash = hash(&salt, new_password);
        identity.salt = salt;
        identity.session_token = new_token(TOKEN_BYTES);
        identity.reset_token = None;
        identity.reset_token_issued_at = None;
        identity.updated_at = Utc::now();
        self.store.update(&identity).await?;

        Ok(identity.reset_summary())
    }
}
