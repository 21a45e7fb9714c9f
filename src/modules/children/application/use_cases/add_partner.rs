use async_trait::async_trait;
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::children::application::domain::entities::PartnerRequest;
use crate::children::application::domain::invitations::{
    check_new_invitation, InviteRuleViolation,
};
use crate::children::application::ports::outgoing::{ChildQuery, PartnerRequestRepository};
use crate::email::application::ports::outgoing::{PartnerInviteDetails, UserEmailNotifier};
use crate::users::application::ports::outgoing::UserQuery;

/// Validated invitation payload: who to invite, by display name and email.
#[derive(Debug, Clone)]
pub struct AddPartnerRequest {
    name: String,
    email: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddPartnerRequestError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Invalid email address")]
    InvalidEmail,
}

impl AddPartnerRequest {
    pub fn new(name: String, email: String) -> Result<Self, AddPartnerRequestError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AddPartnerRequestError::EmptyName);
        }
        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(AddPartnerRequestError::InvalidEmail);
        }
        Ok(Self { name, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl<'de> Deserialize<'de> for AddPartnerRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct AddPartnerHelper {
            name: String,
            email: String,
        }

        let helper = AddPartnerHelper::deserialize(deserializer)?;
        AddPartnerRequest::new(helper.name, helper.email).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone)]
pub enum AddPartnerError {
    ChildNotFound,
    UserNotFound,
    InviteRule(InviteRuleViolation),
    EmailDeliveryFailed,
    RepositoryError(String),
}

#[async_trait]
pub trait IAddPartnerUseCase: Send + Sync {
    async fn execute(
        &self,
        parent_id: Uuid,
        child_id: Uuid,
        request: AddPartnerRequest,
    ) -> Result<PartnerRequest, AddPartnerError>;
}

pub struct AddPartnerUseCase<C, U, P>
where
    C: ChildQuery,
    U: UserQuery,
    P: PartnerRequestRepository,
{
    children: C,
    users: U,
    requests: P,
    email_notifier: Arc<dyn UserEmailNotifier>,
    client_url: String,
}

impl<C, U, P> AddPartnerUseCase<C, U, P>
where
    C: ChildQuery,
    U: UserQuery,
    P: PartnerRequestRepository,
{
    pub fn new(
        children: C,
        users: U,
        requests: P,
        email_notifier: Arc<dyn UserEmailNotifier>,
        client_url: String,
    ) -> Self {
        Self {
            children,
            users,
            requests,
            email_notifier,
            client_url,
        }
    }
}

pub(crate) fn invitation_url(client_url: &str, child_id: Uuid, request_id: Uuid) -> String {
    format!(
        "{}/children/{}/partner-invitations/{}",
        client_url, child_id, request_id
    )
}

#[async_trait]
impl<C, U, P> IAddPartnerUseCase for AddPartnerUseCase<C, U, P>
where
    C: ChildQuery + Send + Sync,
    U: UserQuery + Send + Sync,
    P: PartnerRequestRepository + Send + Sync,
{
    /// Creates a pending invitation and mails the invitee a link carrying
    /// `(child_id, request_id)`. The pending row survives a failed send so
    /// the invitation can be re-sent later.
    async fn execute(
        &self,
        parent_id: Uuid,
        child_id: Uuid,
        request: AddPartnerRequest,
    ) -> Result<PartnerRequest, AddPartnerError> {
        let owner = self
            .users
            .find_by_id(parent_id)
            .await
            .map_err(|e| AddPartnerError::RepositoryError(e.to_string()))?
            .ok_or(AddPartnerError::UserNotFound)?;

        let child = self
            .children
            .find_owned(child_id, parent_id)
            .await
            .map_err(|e| AddPartnerError::RepositoryError(e.to_string()))?
            .ok_or(AddPartnerError::ChildNotFound)?;

        check_new_invitation(&child, &owner.email, request.email())
            .map_err(AddPartnerError::InviteRule)?;

        let created = self
            .requests
            .add_request(child_id, request.name, request.email)
            .await
            .map_err(|e| AddPartnerError::RepositoryError(e.to_string()))?;

        let details = PartnerInviteDetails {
            name: created.name.clone(),
            email: created.email.clone(),
            parent_name: owner.name.clone(),
            child_name: child.name.clone(),
            url: invitation_url(&self.client_url, child_id, created.id),
        };

        if let Err(e) = self.email_notifier.send_partner_invitation(details).await {
            error!(error = %e, "failed to send partner invitation email");
            return Err(AddPartnerError::EmailDeliveryFailed);
        }

        Ok(created)
    }
}
