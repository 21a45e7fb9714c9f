use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::children::application::domain::entities::{PartnerRequest, PartnerRequestStatus};
use crate::children::application::ports::outgoing::{
    PartnerRequestRepository, PartnerRequestRepositoryError,
};

use super::child_query_postgres::map_request;
use super::sea_orm_entity::partner_requests::{
    ActiveModel as RequestActiveModel, Column as RequestColumn, Entity as RequestEntity,
};

#[derive(Clone, Debug)]
pub struct PartnerRequestRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PartnerRequestRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PartnerRequestRepository for PartnerRequestRepositoryPostgres {
    async fn add_request(
        &self,
        child_id: Uuid,
        name: String,
        email: String,
    ) -> Result<PartnerRequest, PartnerRequestRepositoryError> {
        let active_request = RequestActiveModel {
            id: Set(Uuid::new_v4()),
            child_id: Set(child_id),
            name: Set(name),
            email: Set(email),
            status: Set(PartnerRequestStatus::Pending.as_str().to_string()),
            created_at: Set(Utc::now().into()),
        };

        let inserted = active_request
            .insert(&*self.db)
            .await
            .map_err(|e| PartnerRequestRepositoryError::DatabaseError(e.to_string()))?;
        Ok(map_request(inserted))
    }

    async fn resolve_request(
        &self,
        child_id: Uuid,
        request_id: Uuid,
        invitee_email: &str,
        new_status: PartnerRequestStatus,
    ) -> Result<Option<PartnerRequest>, PartnerRequestRepositoryError> {
        // Conditional single-row update: the WHERE clause carries the whole
        // entitlement check, so a concurrent accept of the same invitation
        // can fire at most once.
        let result = RequestEntity::update_many()
            .col_expr(
                RequestColumn::Status,
                Expr::value(new_status.as_str()),
            )
            .filter(RequestColumn::Id.eq(request_id))
            .filter(RequestColumn::ChildId.eq(child_id))
            .filter(RequestColumn::Email.eq(invitee_email))
            .filter(RequestColumn::Status.eq(PartnerRequestStatus::Pending.as_str()))
            .exec(&*self.db)
            .await
            .map_err(|e| PartnerRequestRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        let updated = RequestEntity::find_by_id(request_id)
            .one(&*self.db)
            .await
            .map_err(|e| PartnerRequestRepositoryError::DatabaseError(e.to_string()))?;
        Ok(updated.map(map_request))
    }

    async fn clear_requests(&self, child_id: Uuid) -> Result<(), PartnerRequestRepositoryError> {
        RequestEntity::delete_many()
            .filter(RequestColumn::ChildId.eq(child_id))
            .exec(&*self.db)
            .await
            .map_err(|e| PartnerRequestRepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use super::super::sea_orm_entity::partner_requests::Model as RequestModel;

    #[tokio::test]
    async fn test_resolve_request_misses_when_no_row_matches() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repository = PartnerRequestRepositoryPostgres::new(Arc::new(db));

        let resolved = repository
            .resolve_request(
                Uuid::new_v4(),
                Uuid::new_v4(),
                "bo@example.com",
                PartnerRequestStatus::Accepted,
            )
            .await
            .unwrap();
        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn test_resolve_request_returns_the_updated_row() {
        let request_id = Uuid::new_v4();
        let child_id = Uuid::new_v4();
        let updated = RequestModel {
            id: request_id,
            child_id,
            name: "Bo".to_string(),
            email: "bo@example.com".to_string(),
            status: "accepted".to_string(),
            created_at: Utc::now().fixed_offset(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .append_query_results([vec![updated]])
            .into_connection();
        let repository = PartnerRequestRepositoryPostgres::new(Arc::new(db));

        let resolved = repository
            .resolve_request(
                child_id,
                request_id,
                "bo@example.com",
                PartnerRequestStatus::Accepted,
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(resolved.status, PartnerRequestStatus::Accepted);
    }
}
