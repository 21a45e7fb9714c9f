use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::users::application::domain::entities::{User, UserRole};
use crate::users::application::ports::outgoing::{
    NewUser, ProfileUpdate, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::user_partners::{
    ActiveModel as PartnerActiveModel, Column as PartnerColumn, Entity as PartnerEntity,
};
use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};
use super::user_query_postgres::map_user;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load(&self, user_id: Uuid) -> Result<UserActiveModel, UserRepositoryError> {
        let model = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;
        Ok(model.into())
    }
}

fn map_write_error(e: sea_orm::DbErr) -> UserRepositoryError {
    let err_str = e.to_string().to_lowercase();
    if err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
    {
        return UserRepositoryError::DuplicateValue;
    }
    UserRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let now = Utc::now();
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(user.name),
            username: Set(user.username),
            email: Set(user.email),
            slug: Set(user.slug),
            gender: NotSet,
            bio: NotSet,
            role: Set(UserRole::User.as_str().to_string()),
            password_hash: Set(user.password_hash),
            password_changed_at: NotSet,
            password_reset_token: NotSet,
            password_reset_expires: NotSet,
            verification_token: Set(Some(user.verification_token_hash)),
            verification_token_expires: Set(Some(user.verification_token_expires.into())),
            is_verified: Set(false),
            active: Set(true),
            last_login: NotSet,
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(map_write_error)?;
        Ok(map_user(inserted))
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> Result<User, UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;
        if let Some(name) = update.name {
            active_user.name = Set(name);
        }
        if let Some(username) = update.username {
            active_user.username = Set(username);
        }
        if let Some(gender) = update.gender {
            active_user.gender = Set(Some(gender.as_str().to_string()));
        }
        if let Some(bio) = update.bio {
            active_user.bio = Set(Some(bio));
        }
        if let Some(slug) = update.slug {
            active_user.slug = Set(slug);
        }

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(map_write_error)?;
        Ok(map_user(updated))
    }

    async fn set_verification_token(
        &self,
        user_id: Uuid,
        token_hash: String,
        expires: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;
        active_user.verification_token = Set(Some(token_hash));
        active_user.verification_token_expires = Set(Some(expires.into()));
        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    async fn mark_verified(&self, user_id: Uuid) -> Result<User, UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;
        active_user.is_verified = Set(true);
        active_user.verification_token = Set(None);
        active_user.verification_token_expires = Set(None);
        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;
        Ok(map_user(updated))
    }

    async fn set_reset_token(
        &self,
        user_id: Uuid,
        token_hash: String,
        expires: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;
        active_user.password_reset_token = Set(Some(token_hash));
        active_user.password_reset_expires = Set(Some(expires.into()));
        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    async fn clear_reset_token(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;
        active_user.password_reset_token = Set(None);
        active_user.password_reset_expires = Set(None);
        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    async fn reset_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;
        active_user.password_hash = Set(new_password_hash);
        active_user.password_changed_at = Set(Some(Utc::now().into()));
        active_user.password_reset_token = Set(None);
        active_user.password_reset_expires = Set(None);
        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;
        active_user.password_hash = Set(new_password_hash);
        active_user.password_changed_at = Set(Some(Utc::now().into()));
        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    async fn set_active(&self, username: &str, active: bool) -> Result<User, UserRepositoryError> {
        let model = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = model.into();
        active_user.active = Set(active);
        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;
        Ok(map_user(updated))
    }

    async fn set_last_login(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;
        active_user.last_login = Set(Some(Utc::now().into()));
        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let model = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        model
            .delete(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    async fn add_partner_link(
        &self,
        user_id: Uuid,
        partner_id: Uuid,
        child_id: Uuid,
    ) -> Result<(), UserRepositoryError> {
        let link = PartnerActiveModel {
            user_id: Set(user_id),
            partner_id: Set(partner_id),
            child_id: Set(child_id),
        };

        // An accepted invitation may be replayed by the wiring above it;
        // an already present pair is not an error.
        match link.insert(&*self.db).await {
            Ok(_) => Ok(()),
            Err(e) => match map_write_error(e) {
                UserRepositoryError::DuplicateValue => Ok(()),
                other => Err(other),
            },
        }
    }

    async fn remove_partner_link(
        &self,
        user_id: Uuid,
        partner_id: Uuid,
        child_id: Uuid,
    ) -> Result<(), UserRepositoryError> {
        PartnerEntity::delete_many()
            .filter(PartnerColumn::UserId.eq(user_id))
            .filter(PartnerColumn::PartnerId.eq(partner_id))
            .filter(PartnerColumn::ChildId.eq(child_id))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}
