use async_trait::async_trait;
use log::debug;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

use crate::types::{error::AppError, mail::SendEmail};

const RESEND_API: &str = "https://api.resend.com/emails";

/// Mail collaborator. The reset flow and the password-change notification
/// both go through this seam; tests swap in a recording implementation.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: SendEmail) -> Result<(), AppError>;
}

pub struct ResendMailer {
    client: Client,
    api_key: String,
}

impl ResendMailer {
    pub fn new(api_key: String) -> Result<Self, AppError> {
        let client = ClientBuilder::new()
            .user_agent("stay-auth/0.1 (+reqwest)")
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::Internal(format!("build mail client failed: {e}")))?;
        Ok(Self { client, api_key })
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: SendEmail) -> Result<(), AppError> {
        debug!("[mail] -> POST {RESEND_API} to={:?} subject={}", email.to, email.subject);

        let res = self
            .client
            .post(RESEND_API)
            .bearer_auth(&self.api_key)
            .json(&email)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("mail send failed: {e}")))?;

        let status = res.status();
        if status.is_success() {
            debug!("[mail] <- status: {status}");
            Ok(())
        } else {
            let body = res.text().await.unwrap_or_default();
            Err(AppError::Internal(format!(
                "Resend API error: HTTP {status}: {body}"
            )))
        }
    }
}
