use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference into the external asset store. Only the reference lives here;
/// upload and deletion of the binary happen elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoRef {
    pub url: String,
    pub picture_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub username: String,
    pub name: String,
    pub description: String,
    pub photo: Option<PhotoRef>,
}

/// The identity record as the services see it, independent of the backing
/// store. Salt, password_hash and the reset fields never cross the HTTP
/// boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub salt: String,
    pub password_hash: String,
    pub session_token: String,
    pub profile: Profile,
    pub reset_token: Option<String>,
    pub reset_token_issued_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---- request bodies ----

#[derive(Serialize, Deserialize)]
pub struct SignUpReq {
    pub email: String,
    pub password: String,
    pub username: String,
    pub name: String,
    pub description: String,
}

#[derive(Serialize, Deserialize)]
pub struct LogInReq {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct UpdatePasswordReq {
    #[serde(rename = "previousPassword")]
    pub previous_password: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

#[derive(Serialize, Deserialize)]
pub struct RecoverPasswordReq {
    pub email: String,
}

#[derive(Serialize, Deserialize)]
pub struct ResetPasswordReq {
    #[serde(rename = "updatePasswordToken")]
    pub update_password_token: String,
    pub password: String,
}

/// Partial profile update; absent or empty fields are left untouched.
#[derive(Serialize, Deserialize, Default)]
pub struct UpdateProfileReq {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct SetPictureReq {
    pub url: String,
    pub picture_id: String,
}

// ---- response bodies ----
// Field names are the API contract inherited from the original service:
// `_id`, `token`, `email`, `account`.

#[derive(Debug, Serialize, Deserialize)]
pub struct AccountRes {
    pub username: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<PhotoRef>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub token: String,
    pub email: String,
    pub account: AccountRes,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResetSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub token: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PublicProfileRes {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
    pub account: AccountRes,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageRes {
    pub message: String,
}

impl Identity {
    pub fn account_res(&self) -> AccountRes {
        AccountRes {
            username: self.profile.username.clone(),
            name: self.profile.name.clone(),
            description: self.profile.description.clone(),
            photo: self.profile.photo.clone(),
        }
    }

    /// Credential summary returned by signup/login/password change. Never
    /// includes salt, hash or reset fields.
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            token: self.session_token.clone(),
            email: self.email.clone(),
            account: self.account_res(),
        }
    }

    pub fn reset_summary(&self) -> ResetSummary {
        ResetSummary {
            id: self.id,
            token: self.session_token.clone(),
            email: self.email.clone(),
        }
    }

    pub fn public_profile(&self) -> PublicProfileRes {
        PublicProfileRes {
            id: self.id,
            email: self.email.clone(),
            account: self.account_res(),
        }
    }
}
