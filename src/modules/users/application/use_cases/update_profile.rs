use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::users::application::domain::entities::{Gender, User};
use crate::users::application::helpers::naming::slugify;
use crate::users::application::ports::outgoing::{
    ProfileUpdate, UserRepository, UserRepositoryError,
};

/// Fields a user may change on their own profile. Email, role and the
/// password never travel through here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub username: Option<String>,
    pub gender: Option<Gender>,
    pub bio: Option<String>,
}

impl UpdateProfileRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.username.is_none()
            && self.gender.is_none()
            && self.bio.is_none()
    }
}

#[derive(Debug, Clone)]
pub enum UpdateProfileError {
    NothingToUpdate,
    EmptyName,
    UserNotFound,
    UsernameTaken,
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<User, UpdateProfileError>;
}

pub struct UpdateProfileUseCase<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> UpdateProfileUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateProfileUseCase for UpdateProfileUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    /// The slug is re-derived here whenever the name changes; no storage
    /// layer hook does it behind the scenes.
    async fn execute(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<User, UpdateProfileError> {
        if request.is_empty() {
            return Err(UpdateProfileError::NothingToUpdate);
        }

        let name = match request.name {
            Some(name) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(UpdateProfileError::EmptyName);
                }
                Some(name)
            }
            None => None,
        };

        let update = ProfileUpdate {
            slug: name.as_deref().map(slugify),
            name,
            username: request.username,
            gender: request.gender,
            bio: request.bio,
        };

        self.repository
            .update_profile(user_id, update)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateProfileError::UserNotFound,
                UserRepositoryError::DuplicateValue => UpdateProfileError::UsernameTaken,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })
    }
}
