use std::sync::{Arc, Mutex};

use actix_web::{web, App};
use async_trait::async_trait;

use stay_auth::db::memory::MemoryStore;
use stay_auth::routes::configure_routes;
use stay_auth::state::AppState;
use stay_auth::types::{error::AppError, mail::SendEmail};
use stay_auth::utils::mail::Mailer;

/// Mail collaborator double: records every send, optionally fails them all.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<SendEmail>>,
    pub fail: bool,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: SendEmail) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::Internal("mail send failed".to_string()));
        }
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

pub struct TestContext {
    pub store: Arc<MemoryStore>,
    pub mailer: Arc<RecordingMailer>,
    pub state: AppState,
}

impl TestContext {
    pub fn new() -> TestContext {
        let store = Arc::new(MemoryStore::new());
        let mailer = Arc::new(RecordingMailer::default());
        let state = AppState::new(
            store.clone(),
            mailer.clone(),
            "noreply@stay.test".to_string(),
            "https://stay.test/change_password".to_string(),
        );
        TestContext {
            store,
            mailer,
            state,
        }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.state.clone()))
            .configure(configure_routes)
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use serde_json::{json, Value};

    pub fn sample_sign_up() -> Value {
        json!({
            "email": "a@x.com",
            "password": "pw1",
            "username": "alice",
            "name": "Alice",
            "description": "host in Lyon"
        })
    }

    pub fn sample_sign_up_with(email: &str, username: &str) -> Value {
        json!({
            "email": email,
            "password": "pw1",
            "username": username,
            "name": "Alice",
            "description": "host in Lyon"
        })
    }
}
