use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

use crate::children::application::domain::entities::Child;
use crate::children::application::ports::outgoing::{ChildRepository, NewChild};
use crate::users::application::domain::entities::Gender;
use crate::users::application::helpers::naming::slugify;

pub const MAX_CHILD_NAME_LEN: usize = 60;

/// Validated child creation request.
#[derive(Debug, Clone)]
pub struct CreateChildRequest {
    name: String,
    nickname: Option<String>,
    dob: NaiveDate,
    gender: Option<Gender>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateChildRequestError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Name must be at most 60 characters")]
    NameTooLong,
}

impl CreateChildRequest {
    pub fn new(
        name: String,
        nickname: Option<String>,
        dob: NaiveDate,
        gender: Option<Gender>,
    ) -> Result<Self, CreateChildRequestError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(CreateChildRequestError::EmptyName);
        }
        if name.chars().count() > MAX_CHILD_NAME_LEN {
            return Err(CreateChildRequestError::NameTooLong);
        }
        Ok(Self {
            name,
            nickname,
            dob,
            gender,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<'de> Deserialize<'de> for CreateChildRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct CreateChildHelper {
            name: String,
            nickname: Option<String>,
            dob: NaiveDate,
            gender: Option<Gender>,
        }

        let helper = CreateChildHelper::deserialize(deserializer)?;
        CreateChildRequest::new(helper.name, helper.nickname, helper.dob, helper.gender)
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone)]
pub enum CreateChildError {
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateChildUseCase: Send + Sync {
    async fn execute(
        &self,
        parent_id: Uuid,
        request: CreateChildRequest,
    ) -> Result<Child, CreateChildError>;
}

pub struct CreateChildUseCase<R>
where
    R: ChildRepository,
{
    repository: R,
}

impl<R> CreateChildUseCase<R>
where
    R: ChildRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICreateChildUseCase for CreateChildUseCase<R>
where
    R: ChildRepository + Send + Sync,
{
    /// The caller becomes the owning parent. A new child starts with no
    /// partner, no invitations and an empty history.
    async fn execute(
        &self,
        parent_id: Uuid,
        request: CreateChildRequest,
    ) -> Result<Child, CreateChildError> {
        let new_child = NewChild {
            slug: slugify(request.name()),
            name: request.name,
            nickname: request.nickname,
            dob: request.dob,
            gender: request.gender,
            parent_id,
        };

        self.repository
            .create_child(new_child)
            .await
            .map_err(|e| CreateChildError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::in_memory_children::InMemoryChildren;

    #[tokio::test]
    async fn test_create_child_derives_slug_and_sets_owner() {
        let store = InMemoryChildren::default();
        let use_case = CreateChildUseCase::new(store.clone());
        let parent_id = Uuid::new_v4();

        let request = CreateChildRequest::new(
            "Milo James".to_string(),
            Some("MJ".to_string()),
            NaiveDate::from_ymd_opt(2021, 3, 2).unwrap(),
            Some(Gender::Male),
        )
        .unwrap();

        let child = use_case.execute(parent_id, request).await.unwrap();
        assert_eq!(child.slug, "milo-james");
        assert_eq!(child.parent_id, parent_id);
        assert!(child.partner_parent_id.is_none());
        assert!(child.partner_requests.is_empty());
        assert!(child.recommendation_history.is_empty());
        assert_eq!(store.children.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_request_rejects_overlong_name() {
        let result = CreateChildRequest::new(
            "x".repeat(61),
            None,
            NaiveDate::from_ymd_opt(2021, 3, 2).unwrap(),
            None,
        );
        assert!(matches!(result, Err(CreateChildRequestError::NameTooLong)));
    }
}
