use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::children::application::domain::entities::Child;
use crate::children::application::ports::outgoing::{
    ChildRepository, ChildRepositoryError, ChildUpdate, NewChild,
};
use crate::users::application::domain::entities::Gender;

use super::child_query_postgres::{map_recommendation, map_request};
use super::sea_orm_entity::children::{
    ActiveModel as ChildActiveModel, Column as ChildColumn, Entity as ChildEntity,
    Model as ChildModel,
};
use super::sea_orm_entity::partner_requests::{
    Column as RequestColumn, Entity as RequestEntity,
};
use super::sea_orm_entity::recommendations::{
    Column as RecommendationColumn, Entity as RecommendationEntity,
};

#[derive(Clone, Debug)]
pub struct ChildRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ChildRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Assembles the full aggregate after a write; writes always return
    /// the state a subsequent read would see.
    async fn with_rows(&self, model: ChildModel) -> Result<Child, ChildRepositoryError> {
        let requests = RequestEntity::find()
            .filter(RequestColumn::ChildId.eq(model.id))
            .all(&*self.db)
            .await
            .map_err(|e| ChildRepositoryError::DatabaseError(e.to_string()))?;
        let recommendations = RecommendationEntity::find()
            .filter(RecommendationColumn::ChildId.eq(model.id))
            .all(&*self.db)
            .await
            .map_err(|e| ChildRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Child {
            id: model.id,
            name: model.name,
            nickname: model.nickname,
            dob: model.dob,
            gender: model.gender.as_deref().and_then(Gender::parse),
            slug: model.slug,
            parent_id: model.parent_id,
            partner_parent_id: model.partner_parent_id,
            partner_requests: requests.into_iter().map(map_request).collect(),
            recommendation_history: recommendations
                .into_iter()
                .map(map_recommendation)
                .collect(),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}

#[async_trait]
impl ChildRepository for ChildRepositoryPostgres {
    async fn create_child(&self, child: NewChild) -> Result<Child, ChildRepositoryError> {
        let now = Utc::now();
        let active_child = ChildActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(child.name),
            nickname: Set(child.nickname),
            dob: Set(child.dob),
            gender: Set(child.gender.map(|g| g.as_str().to_string())),
            slug: Set(child.slug),
            parent_id: Set(child.parent_id),
            partner_parent_id: NotSet,
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let inserted = active_child
            .insert(&*self.db)
            .await
            .map_err(|e| ChildRepositoryError::DatabaseError(e.to_string()))?;
        self.with_rows(inserted).await
    }

    async fn update_child(
        &self,
        child_id: Uuid,
        parent_id: Uuid,
        update: ChildUpdate,
    ) -> Result<Child, ChildRepositoryError> {
        let model = ChildEntity::find()
            .filter(ChildColumn::Id.eq(child_id))
            .filter(ChildColumn::ParentId.eq(parent_id))
            .one(&*self.db)
            .await
            .map_err(|e| ChildRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ChildRepositoryError::ChildNotFound)?;

        let mut active_child: ChildActiveModel = model.into();
        if let Some(name) = update.name {
            active_child.name = Set(name);
        }
        if let Some(nickname) = update.nickname {
            active_child.nickname = Set(Some(nickname));
        }
        if let Some(dob) = update.dob {
            active_child.dob = Set(dob);
        }
        if let Some(gender) = update.gender {
            active_child.gender = Set(Some(gender.as_str().to_string()));
        }
        if let Some(slug) = update.slug {
            active_child.slug = Set(slug);
        }

        let updated = active_child
            .update(&*self.db)
            .await
            .map_err(|e| ChildRepositoryError::DatabaseError(e.to_string()))?;
        self.with_rows(updated).await
    }

    async fn delete_child(
        &self,
        child_id: Uuid,
        parent_id: Uuid,
    ) -> Result<bool, ChildRepositoryError> {
        let result = ChildEntity::delete_many()
            .filter(ChildColumn::Id.eq(child_id))
            .filter(ChildColumn::ParentId.eq(parent_id))
            .exec(&*self.db)
            .await
            .map_err(|e| ChildRepositoryError::DatabaseError(e.to_string()))?;
        Ok(result.rows_affected > 0)
    }

    async fn set_partner_parent(
        &self,
        child_id: Uuid,
        partner_parent_id: Option<Uuid>,
    ) -> Result<(), ChildRepositoryError> {
        let model = ChildEntity::find_by_id(child_id)
            .one(&*self.db)
            .await
            .map_err(|e| ChildRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ChildRepositoryError::ChildNotFound)?;

        let mut active_child: ChildActiveModel = model.into();
        active_child.partner_parent_id = Set(partner_parent_id);
        active_child
            .update(&*self.db)
            .await
            .map_err(|e| ChildRepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}
