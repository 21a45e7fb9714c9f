use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::children::application::domain::entities::Child;
use crate::children::application::ports::outgoing::{
    ChildRepository, ChildRepositoryError, ChildUpdate,
};
use crate::children::application::use_cases::create_child::MAX_CHILD_NAME_LEN;
use crate::users::application::domain::entities::Gender;
use crate::users::application::helpers::naming::slugify;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateChildRequest {
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub dob: Option<NaiveDate>,
    pub gender: Option<Gender>,
}

impl UpdateChildRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.nickname.is_none()
            && self.dob.is_none()
            && self.gender.is_none()
    }
}

#[derive(Debug, Clone)]
pub enum UpdateChildError {
    NothingToUpdate,
    InvalidName,
    ChildNotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateChildUseCase: Send + Sync {
    async fn execute(
        &self,
        parent_id: Uuid,
        child_id: Uuid,
        request: UpdateChildRequest,
    ) -> Result<Child, UpdateChildError>;
}

pub struct UpdateChildUseCase<R>
where
    R: ChildRepository,
{
    repository: R,
}

impl<R> UpdateChildUseCase<R>
where
    R: ChildRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateChildUseCase for UpdateChildUseCase<R>
where
    R: ChildRepository + Send + Sync,
{
    async fn execute(
        &self,
        parent_id: Uuid,
        child_id: Uuid,
        request: UpdateChildRequest,
    ) -> Result<Child, UpdateChildError> {
        if request.is_empty() {
            return Err(UpdateChildError::NothingToUpdate);
        }

        let name = match request.name {
            Some(raw) => {
                let trimmed = raw.trim().to_string();
                if trimmed.is_empty() || trimmed.chars().count() > MAX_CHILD_NAME_LEN {
                    return Err(UpdateChildError::InvalidName);
                }
                Some(trimmed)
            }
            None => None,
        };

        let update = ChildUpdate {
            // The slug follows the display name.
            slug: name.as_deref().map(slugify),
            name,
            nickname: request.nickname,
            dob: request.dob,
            gender: request.gender,
        };

        self.repository
            .update_child(child_id, parent_id, update)
            .await
            .map_err(|e| match e {
                ChildRepositoryError::ChildNotFound => UpdateChildError::ChildNotFound,
                other => UpdateChildError::RepositoryError(other.to_string()),
            })
    }
}
