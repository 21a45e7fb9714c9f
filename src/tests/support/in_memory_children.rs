//! In-memory stand-in for the child store, shared by use case tests.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::children::application::domain::entities::{
    Child, PartnerRequest, PartnerRequestStatus, Recommendation,
};
use crate::children::application::ports::outgoing::{
    ChildQuery, ChildQueryError, ChildRepository, ChildRepositoryError, ChildUpdate, NewChild,
    NewRecommendation, PartnerRequestRepository, PartnerRequestRepositoryError,
    RecommendationRepository, RecommendationRepositoryError,
};
use crate::users::application::helpers::naming::slugify;

/// Clones share the same backing store.
#[derive(Default, Clone)]
pub struct InMemoryChildren {
    pub children: Arc<Mutex<Vec<Child>>>,
    pub fail: bool,
}

pub fn make_child(name: &str, parent_id: Uuid) -> Child {
    Child {
        id: Uuid::new_v4(),
        name: name.to_string(),
        nickname: None,
        dob: NaiveDate::from_ymd_opt(2020, 6, 15).unwrap(),
        gender: None,
        slug: slugify(name),
        parent_id,
        partner_parent_id: None,
        partner_requests: Vec::new(),
        recommendation_history: Vec::new(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn make_pending_request(child_id: Uuid, name: &str, email: &str) -> PartnerRequest {
    PartnerRequest {
        id: Uuid::new_v4(),
        child_id,
        name: name.to_string(),
        email: email.to_string(),
        status: PartnerRequestStatus::Pending,
        created_at: Utc::now(),
    }
}

impl InMemoryChildren {
    pub fn with_children(children: Vec<Child>) -> Self {
        let store = Self::default();
        *store.children.lock().unwrap() = children;
        store
    }

    pub fn get(&self, child_id: Uuid) -> Option<Child> {
        self.children
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == child_id)
            .cloned()
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
impl ChildQuery for InMemoryChildren {
    async fn find_owned(
        &self,
        child_id: Uuid,
        parent_id: Uuid,
    ) -> Result<Option<Child>, ChildQueryError> {
        self.guard().map_err(ChildQueryError::DatabaseError)?;
        Ok(self
            .get(child_id)
            .filter(|c| c.parent_id == parent_id))
    }

    async fn find_by_id(&self, child_id: Uuid) -> Result<Option<Child>, ChildQueryError> {
        self.guard().map_err(ChildQueryError::DatabaseError)?;
        Ok(self.get(child_id))
    }

    async fn list_by_parent(&self, parent_id: Uuid) -> Result<Vec<Child>, ChildQueryError> {
        self.guard().map_err(ChildQueryError::DatabaseError)?;
        Ok(self
            .children
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.parent_id == parent_id)
            .cloned()
            .collect())
    }

    async fn list_by_partner(&self, partner_id: Uuid) -> Result<Vec<Child>, ChildQueryError> {
        self.guard().map_err(ChildQueryError::DatabaseError)?;
        Ok(self
            .children
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.partner_parent_id == Some(partner_id))
            .cloned()
            .collect())
    }

    async fn find_as_partner(
        &self,
        child_id: Uuid,
        partner_id: Uuid,
    ) -> Result<Option<Child>, ChildQueryError> {
        self.guard().map_err(ChildQueryError::DatabaseError)?;
        Ok(self
            .get(child_id)
            .filter(|c| c.partner_parent_id == Some(partner_id)))
    }
}

#[async_trait]
impl ChildRepository for InMemoryChildren {
    async fn create_child(&self, child: NewChild) -> Result<Child, ChildRepositoryError> {
        self.guard().map_err(ChildRepositoryError::DatabaseError)?;
        let created = Child {
            id: Uuid::new_v4(),
            name: child.name,
            nickname: child.nickname,
            dob: child.dob,
            gender: child.gender,
            slug: child.slug,
            parent_id: child.parent_id,
            partner_parent_id: None,
            partner_requests: Vec::new(),
            recommendation_history: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.children.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_child(
        &self,
        child_id: Uuid,
        parent_id: Uuid,
        update: ChildUpdate,
    ) -> Result<Child, ChildRepositoryError> {
        self.guard().map_err(ChildRepositoryError::DatabaseError)?;
        let mut guard = self.children.lock().unwrap();
        let child = guard
            .iter_mut()
            .find(|c| c.id == child_id && c.parent_id == parent_id)
            .ok_or(ChildRepositoryError::ChildNotFound)?;
        if let Some(name) = update.name {
            child.name = name;
        }
        if let Some(nickname) = update.nickname {
            child.nickname = Some(nickname);
        }
        if let Some(dob) = update.dob {
            child.dob = dob;
        }
        if let Some(gender) = update.gender {
            child.gender = Some(gender);
        }
        if let Some(slug) = update.slug {
            child.slug = slug;
        }
        child.updated_at = Utc::now();
        Ok(child.clone())
    }

    async fn delete_child(
        &self,
        child_id: Uuid,
        parent_id: Uuid,
    ) -> Result<bool, ChildRepositoryError> {
        self.guard().map_err(ChildRepositoryError::DatabaseError)?;
        let mut guard = self.children.lock().unwrap();
        let before = guard.len();
        guard.retain(|c| !(c.id == child_id && c.parent_id == parent_id));
        Ok(guard.len() != before)
    }

    async fn set_partner_parent(
        &self,
        child_id: Uuid,
        partner_parent_id: Option<Uuid>,
    ) -> Result<(), ChildRepositoryError> {
        self.guard().map_err(ChildRepositoryError::DatabaseError)?;
        let mut guard = self.children.lock().unwrap();
        let child = guard
            .iter_mut()
            .find(|c| c.id == child_id)
            .ok_or(ChildRepositoryError::ChildNotFound)?;
        child.partner_parent_id = partner_parent_id;
        Ok(())
    }
}

#[async_trait]
impl PartnerRequestRepository for InMemoryChildren {
    async fn add_request(
        &self,
        child_id: Uuid,
        name: String,
        email: String,
    ) -> Result<PartnerRequest, PartnerRequestRepositoryError> {
        self.guard()
            .map_err(PartnerRequestRepositoryError::DatabaseError)?;
        let request = make_pending_request(child_id, &name, &email);
        let mut guard = self.children.lock().unwrap();
        let child = guard
            .iter_mut()
            .find(|c| c.id == child_id)
            .ok_or_else(|| {
                PartnerRequestRepositoryError::DatabaseError("no such child".to_string())
            })?;
        child.partner_requests.push(request.clone());
        Ok(request)
    }

    async fn resolve_request(
        &self,
        child_id: Uuid,
        request_id: Uuid,
        invitee_email: &str,
        new_status: PartnerRequestStatus,
    ) -> Result<Option<PartnerRequest>, PartnerRequestRepositoryError> {
        self.guard()
            .map_err(PartnerRequestRepositoryError::DatabaseError)?;
        let mut guard = self.children.lock().unwrap();
        let Some(child) = guard.iter_mut().find(|c| c.id == child_id) else {
            return Ok(None);
        };
        let Some(request) = child.partner_requests.iter_mut().find(|r| {
            r.id == request_id
                && r.email == invitee_email
                && r.status == PartnerRequestStatus::Pending
        }) else {
            return Ok(None);
        };
        request.status = new_status;
        Ok(Some(request.clone()))
    }

    async fn clear_requests(&self, child_id: Uuid) -> Result<(), PartnerRequestRepositoryError> {
        self.guard()
            .map_err(PartnerRequestRepositoryError::DatabaseError)?;
        let mut guard = self.children.lock().unwrap();
        if let Some(child) = guard.iter_mut().find(|c| c.id == child_id) {
            child.partner_requests.clear();
        }
        Ok(())
    }
}

#[async_trait]
impl RecommendationRepository for InMemoryChildren {
    async fn add(
        &self,
        child_id: Uuid,
        entry: NewRecommendation,
    ) -> Result<Recommendation, RecommendationRepositoryError> {
        self.guard()
            .map_err(RecommendationRepositoryError::DatabaseError)?;
        let record = Recommendation {
            id: Uuid::new_v4(),
            child_id,
            recommendation: entry.recommendation,
            inputs: entry.inputs,
            description: entry.description,
            created_at: Utc::now(),
        };
        let mut guard = self.children.lock().unwrap();
        let child = guard
            .iter_mut()
            .find(|c| c.id == child_id)
            .ok_or_else(|| {
                RecommendationRepositoryError::DatabaseError("no such child".to_string())
            })?;
        child.recommendation_history.push(record.clone());
        Ok(record)
    }

    async fn remove(
        &self,
        child_id: Uuid,
        recommendation_id: Uuid,
    ) -> Result<bool, RecommendationRepositoryError> {
        self.guard()
            .map_err(RecommendationRepositoryError::DatabaseError)?;
        let mut guard = self.children.lock().unwrap();
        let Some(child) = guard.iter_mut().find(|c| c.id == child_id) else {
            return Ok(false);
        };
        let before = child.recommendation_history.len();
        child
            .recommendation_history
            .retain(|r| r.id != recommendation_id);
        Ok(child.recommendation_history.len() != before)
    }

    async fn remove_all(&self, child_id: Uuid) -> Result<(), RecommendationRepositoryError> {
        self.guard()
            .map_err(RecommendationRepositoryError::DatabaseError)?;
        let mut guard = self.children.lock().unwrap();
        if let Some(child) = guard.iter_mut().find(|c| c.id == child_id) {
            child.recommendation_history.clear();
        }
        Ok(())
    }
}
