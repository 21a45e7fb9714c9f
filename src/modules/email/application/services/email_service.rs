use crate::email::application::ports::outgoing::email_sender::EmailSender;
use crate::email::application::ports::outgoing::user_email_notifier::{
    PartnerInviteDetails, UserEmailNotificationError, UserEmailNotifier,
};
use std::fmt;
use std::sync::Arc;

/// Renders the transactional e-mails (inline HTML) and hands them to the
/// configured sender.
#[derive(Clone)]
pub struct UserEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
}

impl fmt::Debug for UserEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserEmailService")
            .field("sender", &"<dyn EmailSender>")
            .finish()
    }
}

fn button(url: &str, label: &str) -> String {
    format!(
        r#"<a href="{}" style="display:inline-block;padding:10px 20px;background-color:#2F855A;color:white;text-decoration:none;border-radius:5px;">{}</a>"#,
        url, label
    )
}

impl UserEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>) -> Self {
        Self { sender }
    }

    async fn send(
        &self,
        to: &str,
        subject: &str,
        html: &str,
    ) -> Result<(), UserEmailNotificationError> {
        self.sender
            .send_email(to, subject, html)
            .await
            .map_err(UserEmailNotificationError::EmailSendingFailed)
    }
}

#[async_trait::async_trait]
impl UserEmailNotifier for UserEmailService {
    async fn send_verification_email(
        &self,
        to: &str,
        first_name: &str,
        verification_url: &str,
    ) -> Result<(), UserEmailNotificationError> {
        let html = format!(
            r#"
            <p>Hi {},</p>
            <p>Welcome to PathNest! To complete your registration, verify your email:</p>
            <p>{}</p>
            <p><strong>Note:</strong> This link is valid for 10 minutes. If it expires,
            you can request a new verification email.</p>
            <p>Thanks,<br>The PathNest Team</p>
            "#,
            first_name,
            button(verification_url, "Verify Your Email")
        );
        self.send(
            to,
            "Welcome to PathNest! Please Verify Your Email",
            &html,
        )
        .await
    }

    async fn send_welcome_email(
        &self,
        to: &str,
        first_name: &str,
    ) -> Result<(), UserEmailNotificationError> {
        let html = format!(
            r#"
            <p>Hi {},</p>
            <p>Your email is verified and your PathNest account is ready.</p>
            <p>Let's shape your child's future together!</p>
            <p>Thanks,<br>The PathNest Team</p>
            "#,
            first_name
        );
        self.send(to, "Welcome to PathNest!", &html).await
    }

    async fn send_password_reset_email(
        &self,
        to: &str,
        first_name: &str,
        reset_url: &str,
    ) -> Result<(), UserEmailNotificationError> {
        let html = format!(
            r#"
            <p>Hi {},</p>
            <p>We received a request to reset your PathNest password.</p>
            <p>{}</p>
            <p><strong>Note:</strong> This link is valid for 10 minutes. If you did not
            request a reset, you can safely ignore this email.</p>
            <p>Thanks,<br>The PathNest Team</p>
            "#,
            first_name,
            button(reset_url, "Reset Your Password")
        );
        self.send(to, "Reset Your PathNest Password", &html).await
    }

    async fn send_password_changed_email(
        &self,
        to: &str,
        first_name: &str,
    ) -> Result<(), UserEmailNotificationError> {
        let html = format!(
            r#"
            <p>Hi {},</p>
            <p>Your PathNest password was successfully changed.</p>
            <p>If this wasn't you, please contact support immediately.</p>
            <p>Thanks,<br>The PathNest Team</p>
            "#,
            first_name
        );
        self.send(to, "Your Password Was Successfully Changed", &html)
            .await
    }

    async fn send_partner_invitation(
        &self,
        details: PartnerInviteDetails,
    ) -> Result<(), UserEmailNotificationError> {
        let html = format!(
            r#"
            <p>Hi {},</p>
            <p>{} has invited you to co-manage {}'s profile on PathNest.</p>
            <p>{}</p>
            <p>Thanks,<br>The PathNest Team</p>
            "#,
            details.name,
            details.parent_name,
            details.child_name,
            button(&details.url, "View Invitation")
        );
        self.send(&details.email, "You've Been Invited to PathNest!", &html)
            .await
    }
}
