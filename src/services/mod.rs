pub mod account;
pub mod auth;
pub mod reset;

#[cfg(test)]
pub(crate) mod testsupport {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::db::memory::MemoryStore;
    use crate::types::{error::AppError, mail::SendEmail};
    use crate::utils::mail::Mailer;

    /// Records outgoing mail; optionally fails every send.
    #[derive(Default)]
    pub struct RecordingMailer {
        pub sent: Mutex<Vec<SendEmail>>,
        pub fail: bool,
    }

    impl RecordingMailer {
        pub fn failing() -> Self {
            Self {
                sent: Mutex::new(vec![]),
                fail: true,
            }
        }
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

    pub fn store() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::new())
    }
}
