use serde::Serialize;

/// Payload for the mail collaborator, shaped for the Resend API.
#[derive(Debug, Clone, Serialize)]
pub struct SendEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: Option<String>,
}
