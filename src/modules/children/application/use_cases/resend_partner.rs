use async_trait::async_trait;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::children::application::ports::outgoing::ChildQuery;
use crate::children::application::use_cases::add_partner::invitation_url;
use crate::email::application::ports::outgoing::{PartnerInviteDetails, UserEmailNotifier};
use crate::users::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone)]
pub enum ResendPartnerError {
    ChildNotFound,
    UserNotFound,
    /// No pending invitation exists for the given address.
    NoPendingInvitation,
    EmailDeliveryFailed,
    RepositoryError(String),
}

/// Re-sends the invitation email for an existing pending invitation. The
/// stored row is left untouched so the original link keeps working.
#[async_trait]
pub trait IResendPartnerUseCase: Send + Sync {
    async fn execute(
        &self,
        parent_id: Uuid,
        child_id: Uuid,
        invitee_email: &str,
    ) -> Result<(), ResendPartnerError>;
}

pub struct ResendPartnerUseCase<C, U>
where
    C: ChildQuery,
    U: UserQuery,
{
    children: C,
    users: U,
    email_notifier: Arc<dyn UserEmailNotifier>,
    client_url: String,
}

impl<C, U> ResendPartnerUseCase<C, U>
where
    C: ChildQuery,
    U: UserQuery,
{
    pub fn new(
        children: C,
        users: U,
        email_notifier: Arc<dyn UserEmailNotifier>,
        client_url: String,
    ) -> Self {
        Self {
            children,
            users,
            email_notifier,
            client_url,
        }
    }
}

#[async_trait]
impl<C, U> IResendPartnerUseCase for ResendPartnerUseCase<C, U>
where
    C: ChildQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        parent_id: Uuid,
        child_id: Uuid,
        invitee_email: &str,
    ) -> Result<(), ResendPartnerError> {
        let owner = self
            .users
            .find_by_id(parent_id)
            .await
            .map_err(|e| ResendPartnerError::RepositoryError(e.to_string()))?
            .ok_or(ResendPartnerError::UserNotFound)?;

        let child = self
            .children
            .find_owned(child_id, parent_id)
            .await
            .map_err(|e| ResendPartnerError::RepositoryError(e.to_string()))?
            .ok_or(ResendPartnerError::ChildNotFound)?;

        let pending = child
            .pending_request_for(invitee_email)
            .ok_or(ResendPartnerError::NoPendingInvitation)?;

        let details = PartnerInviteDetails {
            name: pending.name.clone(),
            email: pending.email.clone(),
            parent_name: owner.name.clone(),
            child_name: child.name.clone(),
            url: invitation_url(&self.client_url, child_id, pending.id),
        };

        if let Err(e) = self.email_notifier.send_partner_invitation(details).await {
            error!(error = %e, "failed to re-send partner invitation email");
            return Err(ResendPartnerError::EmailDeliveryFailed);
        }

        Ok(())
    }
}
