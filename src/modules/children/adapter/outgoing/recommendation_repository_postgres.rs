use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::children::application::domain::entities::Recommendation;
use crate::children::application::ports::outgoing::{
    NewRecommendation, RecommendationRepository, RecommendationRepositoryError,
};

use super::child_query_postgres::map_recommendation;
use super::sea_orm_entity::recommendations::{
    ActiveModel as RecommendationActiveModel, Column as RecommendationColumn,
    Entity as RecommendationEntity,
};

#[derive(Clone, Debug)]
pub struct RecommendationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RecommendationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecommendationRepository for RecommendationRepositoryPostgres {
    async fn add(
        &self,
        child_id: Uuid,
        entry: NewRecommendation,
    ) -> Result<Recommendation, RecommendationRepositoryError> {
        let active_entry = RecommendationActiveModel {
            id: Set(Uuid::new_v4()),
            child_id: Set(child_id),
            recommendation: Set(entry.recommendation),
            inputs: Set(json!(entry.inputs)),
            description: Set(entry.description),
            created_at: Set(Utc::now().into()),
        };

        let inserted = active_entry
            .insert(&*self.db)
            .await
            .map_err(|e| RecommendationRepositoryError::DatabaseError(e.to_string()))?;
        Ok(map_recommendation(inserted))
    }

    async fn remove(
        &self,
        child_id: Uuid,
        recommendation_id: Uuid,
    ) -> Result<bool, RecommendationRepositoryError> {
        let result = RecommendationEntity::delete_many()
            .filter(RecommendationColumn::Id.eq(recommendation_id))
            .filter(RecommendationColumn::ChildId.eq(child_id))
            .exec(&*self.db)
            .await
            .map_err(|e| RecommendationRepositoryError::DatabaseError(e.to_string()))?;
        Ok(result.rows_affected > 0)
    }

    async fn remove_all(&self, child_id: Uuid) -> Result<(), RecommendationRepositoryError> {
        RecommendationEntity::delete_many()
            .filter(RecommendationColumn::ChildId.eq(child_id))
            .exec(&*self.db)
            .await
            .map_err(|e| RecommendationRepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}
