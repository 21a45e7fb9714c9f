//! In-memory stand-in for the user store, shared by use case tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::users::application::domain::entities::{PartnerLink, User, UserRole};
use crate::users::application::helpers::naming::slugify;
use crate::users::application::ports::outgoing::{
    NewUser, ProfileUpdate, UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};

pub struct StoredUser {
    pub user: User,
    pub verification_token_hash: Option<String>,
    pub verification_token_expires: Option<DateTime<Utc>>,
    pub reset_token_hash: Option<String>,
    pub reset_token_expires: Option<DateTime<Utc>>,
}

/// Clones share the same backing store, so one handle can drive the use
/// case while another inspects state.
#[derive(Default, Clone)]
pub struct InMemoryUsers {
    pub users: Arc<Mutex<Vec<StoredUser>>>,
    pub partner_links: Arc<Mutex<Vec<(Uuid, Uuid, Uuid)>>>,
    /// When set, every call reports a database failure.
    pub fail: bool,
}

pub fn make_user(name: &str, email: &str) -> User {
    User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        username: format!("{}_abc123def456", name.to_lowercase().replace(' ', "_")),
        email: email.to_string(),
        slug: slugify(name),
        gender: None,
        bio: None,
        role: UserRole::User,
        password_hash: "hashed:password123".to_string(),
        password_changed_at: None,
        is_verified: true,
        active: true,
        last_login: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

impl InMemoryUsers {
    pub fn with_users(users: Vec<User>) -> Self {
        let store = Self::default();
        {
            let mut guard = store.users.lock().unwrap();
            for user in users {
                guard.push(StoredUser {
                    user,
                    verification_token_hash: None,
                    verification_token_expires: None,
                    reset_token_hash: None,
                    reset_token_expires: None,
                });
            }
        }
        store
    }

    pub fn get(&self, user_id: Uuid) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.user.id == user_id)
            .map(|s| s.user.clone())
    }

    pub fn stored_verification_token(&self, user_id: Uuid) -> Option<String> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.user.id == user_id)
            .and_then(|s| s.verification_token_hash.clone())
    }

    pub fn stored_reset_token(&self, user_id: Uuid) -> Option<String> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.user.id == user_id)
            .and_then(|s| s.reset_token_hash.clone())
    }

    fn guard(&self) -> Result<(), String> {
        if self.fail {
            Err("forced failure".to_string())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        self.guard().map_err(UserQueryError::DatabaseError)?;
        Ok(self.get(user_id))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        self.guard().map_err(UserQueryError::DatabaseError)?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.user.username == username && s.user.active)
            .map(|s| s.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        self.guard().map_err(UserQueryError::DatabaseError)?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.user.email == email && s.user.active)
            .map(|s| s.user.clone()))
    }

    async fn find_by_email_any(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        self.guard().map_err(UserQueryError::DatabaseError)?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.user.email == email)
            .map(|s| s.user.clone()))
    }

    async fn find_by_verification_token(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, UserQueryError> {
        self.guard().map_err(UserQueryError::DatabaseError)?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|s| {
                s.verification_token_hash.as_deref() == Some(token_hash)
                    && s.verification_token_expires.map(|e| e > now).unwrap_or(false)
            })
            .map(|s| s.user.clone()))
    }

    async fn find_by_reset_token(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, UserQueryError> {
        self.guard().map_err(UserQueryError::DatabaseError)?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|s| {
                s.reset_token_hash.as_deref() == Some(token_hash)
                    && s.reset_token_expires.map(|e| e > now).unwrap_or(false)
            })
            .map(|s| s.user.clone()))
    }

    async fn list_active(&self) -> Result<Vec<User>, UserQueryError> {
        self.guard().map_err(UserQueryError::DatabaseError)?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.user.active)
            .map(|s| s.user.clone())
            .collect())
    }

    async fn partners_of(&self, user_id: Uuid) -> Result<Vec<PartnerLink>, UserQueryError> {
        self.guard().map_err(UserQueryError::DatabaseError)?;
        Ok(self
            .partner_links
            .lock()
            .unwrap()
            .iter()
            .filter(|(uid, _, _)| *uid == user_id)
            .map(|(_, partner_id, child_id)| PartnerLink {
                partner_id: *partner_id,
                child_id: *child_id,
            })
            .collect())
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        self.guard().map_err(UserRepositoryError::DatabaseError)?;
        let mut guard = self.users.lock().unwrap();
        if guard
            .iter()
            .any(|s| s.user.email == user.email || s.user.username == user.username)
        {
            return Err(UserRepositoryError::DuplicateValue);
        }
        let mut created = make_user(&user.name, &user.email);
        created.username = user.username;
        created.slug = user.slug;
        created.password_hash = user.password_hash;
        created.is_verified = false;
        guard.push(StoredUser {
            user: created.clone(),
            verification_token_hash: Some(user.verification_token_hash),
            verification_token_expires: Some(user.verification_token_expires),
            reset_token_hash: None,
            reset_token_expires: None,
        });
        Ok(created)
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> Result<User, UserRepositoryError> {
        self.guard().map_err(UserRepositoryError::DatabaseError)?;
        let mut guard = self.users.lock().unwrap();
        let stored = guard
            .iter_mut()
            .find(|s| s.user.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        if let Some(name) = update.name {
            stored.user.name = name;
        }
        if let Some(username) = update.username {
            stored.user.username = username;
        }
        if let Some(gender) = update.gender {
            stored.user.gender = Some(gender);
        }
        if let Some(bio) = update.bio {
            stored.user.bio = Some(bio);
        }
        if let Some(slug) = update.slug {
            stored.user.slug = slug;
        }
        stored.user.updated_at = Utc::now();
        Ok(stored.user.clone())
    }

    async fn set_verification_token(
        &self,
        user_id: Uuid,
        token_hash: String,
        expires: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        self.guard().map_err(UserRepositoryError::DatabaseError)?;
        let mut guard = self.users.lock().unwrap();
        let stored = guard
            .iter_mut()
            .find(|s| s.user.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        stored.verification_token_hash = Some(token_hash);
        stored.verification_token_expires = Some(expires);
        Ok(())
    }

    async fn mark_verified(&self, user_id: Uuid) -> Result<User, UserRepositoryError> {
        self.guard().map_err(UserRepositoryError::DatabaseError)?;
        let mut guard = self.users.lock().unwrap();
        let stored = guard
            .iter_mut()
            .find(|s| s.user.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        stored.user.is_verified = true;
        stored.verification_token_hash = None;
        stored.verification_token_expires = None;
        Ok(stored.user.clone())
    }

    async fn set_reset_token(
        &self,
        user_id: Uuid,
        token_hash: String,
        expires: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        self.guard().map_err(UserRepositoryError::DatabaseError)?;
        let mut guard = self.users.lock().unwrap();
        let stored = guard
            .iter_mut()
            .find(|s| s.user.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        stored.reset_token_hash = Some(token_hash);
        stored.reset_token_expires = Some(expires);
        Ok(())
    }

    async fn clear_reset_token(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        self.guard().map_err(UserRepositoryError::DatabaseError)?;
        let mut guard = self.users.lock().unwrap();
        let stored = guard
            .iter_mut()
            .find(|s| s.user.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        stored.reset_token_hash = None;
        stored.reset_token_expires = None;
        Ok(())
    }

    async fn reset_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        self.guard().map_err(UserRepositoryError::DatabaseError)?;
        let mut guard = self.users.lock().unwrap();
        let stored = guard
            .iter_mut()
            .find(|s| s.user.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        stored.user.password_hash = new_password_hash;
        stored.user.password_changed_at = Some(Utc::now());
        stored.reset_token_hash = None;
        stored.reset_token_expires = None;
        Ok(())
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        self.guard().map_err(UserRepositoryError::DatabaseError)?;
        let mut guard = self.users.lock().unwrap();
        let stored = guard
            .iter_mut()
            .find(|s| s.user.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        stored.user.password_hash = new_password_hash;
        stored.user.password_changed_at = Some(Utc::now());
        Ok(())
    }

    async fn set_active(&self, username: &str, active: bool) -> Result<User, UserRepositoryError> {
        self.guard().map_err(UserRepositoryError::DatabaseError)?;
        let mut guard = self.users.lock().unwrap();
        let stored = guard
            .iter_mut()
            .find(|s| s.user.username == username)
            .ok_or(UserRepositoryError::UserNotFound)?;
        stored.user.active = active;
        Ok(stored.user.clone())
    }

    async fn set_last_login(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        self.guard().map_err(UserRepositoryError::DatabaseError)?;
        let mut guard = self.users.lock().unwrap();
        let stored = guard
            .iter_mut()
            .find(|s| s.user.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        stored.user.last_login = Some(Utc::now());
        Ok(())
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        self.guard().map_err(UserRepositoryError::DatabaseError)?;
        let mut guard = self.users.lock().unwrap();
        let before = guard.len();
        guard.retain(|s| s.user.id != user_id);
        if guard.len() == before {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }

    async fn add_partner_link(
        &self,
        user_id: Uuid,
        partner_id: Uuid,
        child_id: Uuid,
    ) -> Result<(), UserRepositoryError> {
        self.guard().map_err(UserRepositoryError::DatabaseError)?;
        self.partner_links
            .lock()
            .unwrap()
            .push((user_id, partner_id, child_id));
        Ok(())
    }

    async fn remove_partner_link(
        &self,
        user_id: Uuid,
        partner_id: Uuid,
        child_id: Uuid,
    ) -> Result<(), UserRepositoryError> {
        self.guard().map_err(UserRepositoryError::DatabaseError)?;
        self.partner_links
            .lock()
            .unwrap()
            .retain(|(u, p, c)| !(*u == user_id && *p == partner_id && *c == child_id));
        Ok(())
    }
}
