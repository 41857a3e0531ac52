use std::sync::Arc;

use crate::db::IdentityStore;
use crate::services::{account::AccountService, auth::AuthService, reset::PasswordResetService};
use crate::utils::mail::Mailer;

/// Explicitly constructed dependencies shared across requests. The store is
/// also reachable directly for the bearer middleware.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn IdentityStore>,
    pub auth: AuthService,
    pub reset: PasswordResetService,
    pub accounts: AccountService,
}

impl AppState {
    pub fn new(
        store: Arc<dyn IdentityStore>,
        mailer: Arc<dyn Mailer>,
        mail_from: String,
        reset_url: String,
    ) -> Self {
        AppState {
            auth: AuthService::new(store.clone(), mailer.clone(), mail_from.clone()),
            reset: PasswordResetService::new(store.clone(), mailer, mail_from, reset_url),
            accounts: AccountService::new(store.clone()),
            store,
        }
    }
}
