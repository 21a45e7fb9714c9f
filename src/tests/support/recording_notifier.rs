//! Recording `UserEmailNotifier` for use case tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::email::application::ports::outgoing::user_email_notifier::{
    PartnerInviteDetails, UserEmailNotificationError, UserEmailNotifier,
};

#[derive(Debug, Clone, PartialEq)]
pub enum SentEmail {
    Verification { to: String, url: String },
    Welcome { to: String },
    PasswordReset { to: String, url: String },
    PasswordChanged { to: String },
    PartnerInvitation { to: String, url: String },
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub fail: bool,
    pub sent: Mutex<Vec<SentEmail>>,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn sent_emails(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, email: SentEmail) -> Result<(), UserEmailNotificationError> {
        if self.fail {
            return Err(UserEmailNotificationError::EmailSendingFailed(
                "smtp down".to_string(),
            ));
        }
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

#[async_trait]
impl UserEmailNotifier for RecordingNotifier {
    async fn send_verification_email(
        &self,
        to: &str,
        _first_name: &str,
        verification_url: &str,
    ) -> Result<(), UserEmailNotificationError> {
        self.record(SentEmail::Verification {
            to: to.to_string(),
            url: verification_url.to_string(),
        })
    }

    async fn send_welcome_email(
        &self,
        to: &str,
        _first_name: &str,
    ) -> Result<(), UserEmailNotificationError> {
        self.record(SentEmail::Welcome { to: to.to_string() })
    }

    async fn send_password_reset_email(
        &self,
        to: &str,
        _first_name: &str,
        reset_url: &str,
    ) -> Result<(), UserEmailNotificationError> {
        self.record(SentEmail::PasswordReset {
            to: to.to_string(),
            url: reset_url.to_string(),
        })
    }

    async fn send_password_changed_email(
        &self,
        to: &str,
        _first_name: &str,
    ) -> Result<(), UserEmailNotificationError> {
        self.record(SentEmail::PasswordChanged { to: to.to_string() })
    }

    async fn send_partner_invitation(
        &self,
        details: PartnerInviteDetails,
    ) -> Result<(), UserEmailNotificationError> {
        self.record(SentEmail::PartnerInvitation {
            to: details.email,
            url: details.url,
        })
    }
}
