use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::children::application::domain::entities::{
    Child, PartnerRequest, PartnerRequestStatus, Recommendation,
};
use crate::children::application::ports::outgoing::{ChildQuery, ChildQueryError};
use crate::users::application::domain::entities::Gender;

use super::sea_orm_entity::children::{
    Column as ChildColumn, Entity as ChildEntity, Model as ChildModel,
};
use super::sea_orm_entity::partner_requests::{
    Entity as RequestEntity, Model as RequestModel,
};
use super::sea_orm_entity::recommendations::{
    Entity as RecommendationEntity, Model as RecommendationModel,
};

#[derive(Clone, Debug)]
pub struct ChildQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ChildQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Loads the owned invitation and recommendation rows for a batch of
    /// children in two queries and assembles the aggregates.
    async fn hydrate(&self, models: Vec<ChildModel>) -> Result<Vec<Child>, ChildQueryError> {
        let requests = models
            .load_many(RequestEntity, &*self.db)
            .await
            .map_err(|e| ChildQueryError::DatabaseError(e.to_string()))?;
        let recommendations = models
            .load_many(RecommendationEntity, &*self.db)
            .await
            .map_err(|e| ChildQueryError::DatabaseError(e.to_string()))?;

        Ok(models
            .into_iter()
            .zip(requests)
            .zip(recommendations)
            .map(|((child, requests), recommendations)| {
                assemble(child, requests, recommendations)
            })
            .collect())
    }

    async fn one(
        &self,
        model: Option<ChildModel>,
    ) -> Result<Option<Child>, ChildQueryError> {
        match model {
            Some(model) => Ok(self.hydrate(vec![model]).await?.pop()),
            None => Ok(None),
        }
    }
}

pub(super) fn map_request(model: RequestModel) -> PartnerRequest {
    PartnerRequest {
        id: model.id,
        child_id: model.child_id,
        name: model.name,
        email: model.email,
        // A malformed stored status must not read as pending, it would
        // block new invitations.
        status: PartnerRequestStatus::parse(&model.status)
            .unwrap_or(PartnerRequestStatus::Rejected),
        created_at: model.created_at.into(),
    }
}

pub(super) fn map_recommendation(model: RecommendationModel) -> Recommendation {
    Recommendation {
        id: model.id,
        child_id: model.child_id,
        recommendation: model.recommendation,
        inputs: serde_json::from_value(model.inputs).unwrap_or_default(),
        description: model.description,
        created_at: model.created_at.into(),
    }
}

fn assemble(
    child: ChildModel,
    requests: Vec<RequestModel>,
    recommendations: Vec<RecommendationModel>,
) -> Child {
    Child {
        id: child.id,
        name: child.name,
        nickname: child.nickname,
        dob: child.dob,
        gender: child.gender.as_deref().and_then(Gender::parse),
        slug: child.slug,
        parent_id: child.parent_id,
        partner_parent_id: child.partner_parent_id,
        partner_requests: requests.into_iter().map(map_request).collect(),
        recommendation_history: recommendations
            .into_iter()
            .map(map_recommendation)
            .collect(),
        created_at: child.created_at.into(),
        updated_at: child.updated_at.into(),
    }
}

#[async_trait]
impl ChildQuery for ChildQueryPostgres {
    async fn find_owned(
        &self,
        child_id: Uuid,
        parent_id: Uuid,
    ) -> Result<Option<Child>, ChildQueryError> {
        let model = ChildEntity::find()
            .filter(ChildColumn::Id.eq(child_id))
            .filter(ChildColumn::ParentId.eq(parent_id))
            .one(&*self.db)
            .await
            .map_err(|e| ChildQueryError::DatabaseError(e.to_string()))?;
        self.one(model).await
    }

    async fn find_by_id(&self, child_id: Uuid) -> Result<Option<Child>, ChildQueryError> {
        let model = ChildEntity::find_by_id(child_id)
            .one(&*self.db)
            .await
            .map_err(|e| ChildQueryError::DatabaseError(e.to_string()))?;
        self.one(model).await
    }

    async fn list_by_parent(&self, parent_id: Uuid) -> Result<Vec<Child>, ChildQueryError> {
        let models = ChildEntity::find()
            .filter(ChildColumn::ParentId.eq(parent_id))
            .order_by_asc(ChildColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| ChildQueryError::DatabaseError(e.to_string()))?;
        self.hydrate(models).await
    }

    async fn list_by_partner(&self, partner_id: Uuid) -> Result<Vec<Child>, ChildQueryError> {
        let models = ChildEntity::find()
            .filter(ChildColumn::PartnerParentId.eq(partner_id))
            .order_by_asc(ChildColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| ChildQueryError::DatabaseError(e.to_string()))?;
        self.hydrate(models).await
    }

    async fn find_as_partner(
        &self,
        child_id: Uuid,
        partner_id: Uuid,
    ) -> Result<Option<Child>, ChildQueryError> {
        let model = ChildEntity::find()
            .filter(ChildColumn::Id.eq(child_id))
            .filter(ChildColumn::PartnerParentId.eq(partner_id))
            .one(&*self.db)
            .await
            .map_err(|e| ChildQueryError::DatabaseError(e.to_string()))?;
        self.one(model).await
    }
}
