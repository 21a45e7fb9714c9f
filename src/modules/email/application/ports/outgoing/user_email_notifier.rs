#[derive(Debug, thiserror::Error)]
pub enum UserEmailNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

/// Everything a partner-invitation e-mail needs to render.
#[derive(Debug, Clone)]
pub struct PartnerInviteDetails {
    pub name: String,
    pub email: String,
    pub parent_name: String,
    pub child_name: String,
    pub url: String,
}

/// Outgoing notifications keyed by account event. Implemented by
/// `UserEmailService`; use cases only see this trait so tests can swap in
/// a recording mock.
#[async_trait::async_trait]
pub trait UserEmailNotifier: Send + Sync {
    async fn send_verification_email(
        &self,
        to: &str,
        first_name: &str,
        verification_url: &str,
    ) -> Result<(), UserEmailNotificationError>;

    async fn send_welcome_email(
        &self,
        to: &str,
        first_name: &str,
    ) -> Result<(), UserEmailNotificationError>;

    async fn send_password_reset_email(
        &self,
        to: &str,
        first_name: &str,
        reset_url: &str,
    ) -> Result<(), UserEmailNotificationError>;

    async fn send_password_changed_email(
        &self,
        to: &str,
        first_name: &str,
    ) -> Result<(), UserEmailNotificationError>;

    async fn send_partner_invitation(
        &self,
        details: PartnerInviteDetails,
    ) -> Result<(), UserEmailNotificationError>;
}
