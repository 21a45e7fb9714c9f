use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::users::application::domain::entities::{Gender, PartnerLink, User, UserRole};
use crate::users::application::ports::outgoing::{UserQuery, UserQueryError};

use super::sea_orm_entity::user_partners::{
    Column as PartnerColumn, Entity as PartnerEntity,
};
use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity, Model as UserModel};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Unknown stored role strings fall back to the plain user role rather
/// than failing the whole read.
pub(super) fn map_user(model: UserModel) -> User {
    User {
        id: model.id,
        name: model.name,
        username: model.username,
        email: model.email,
        slug: model.slug,
        gender: model.gender.as_deref().and_then(Gender::parse),
        bio: model.bio,
        role: UserRole::parse(&model.role).unwrap_or(UserRole::User),
        password_hash: model.password_hash,
        password_changed_at: model.password_changed_at.map(DateTime::<Utc>::from),
        is_verified: model.is_verified,
        active: model.active,
        last_login: model.last_login.map(DateTime::<Utc>::from),
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        let model = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;
        Ok(model.map(map_user))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        let model = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .filter(UserColumn::Active.eq(true))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;
        Ok(model.map(map_user))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let model = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .filter(UserColumn::Active.eq(true))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;
        Ok(model.map(map_user))
    }

    async fn find_by_email_any(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let model = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;
        Ok(model.map(map_user))
    }

    async fn find_by_verification_token(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, UserQueryError> {
        let model = UserEntity::find()
            .filter(UserColumn::VerificationToken.eq(token_hash))
            .filter(UserColumn::VerificationTokenExpires.gt(now))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;
        Ok(model.map(map_user))
    }

    async fn find_by_reset_token(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, UserQueryError> {
        let model = UserEntity::find()
            .filter(UserColumn::PasswordResetToken.eq(token_hash))
            .filter(UserColumn::PasswordResetExpires.gt(now))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;
        Ok(model.map(map_user))
    }

    async fn list_active(&self) -> Result<Vec<User>, UserQueryError> {
        let models = UserEntity::find()
            .filter(UserColumn::Active.eq(true))
            .order_by_asc(UserColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;
        Ok(models.into_iter().map(map_user).collect())
    }

    async fn partners_of(&self, user_id: Uuid) -> Result<Vec<PartnerLink>, UserQueryError> {
        let rows = PartnerEntity::find()
            .filter(PartnerColumn::UserId.eq(user_id))
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;
        Ok(rows
            .into_iter()
            .map(|row| PartnerLink {
                partner_id: row.partner_id,
                child_id: row.child_id,
            })
            .collect())
    }
}
