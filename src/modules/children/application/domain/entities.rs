use crate::users::application::domain::entities::Gender;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerRequestStatus {
    Pending,
    Accepted,
    Rejected,
}

impl PartnerRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartnerRequestStatus::Pending => "pending",
            PartnerRequestStatus::Accepted => "accepted",
            PartnerRequestStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(PartnerRequestStatus::Pending),
            "accepted" => Some(PartnerRequestStatus::Accepted),
            "rejected" => Some(PartnerRequestStatus::Rejected),
            _ => None,
        }
    }
}

/// An invitation row owned by a child record, addressed by
/// `(child_id, request_id)`.
#[derive(Debug, Clone, Serialize)]
pub struct PartnerRequest {
    pub id: Uuid,
    pub child_id: Uuid,
    pub name: String,
    pub email: String,
    pub status: PartnerRequestStatus,
    pub created_at: DateTime<Utc>,
}

/// A recommendation history entry. `inputs` always holds exactly
/// [`RECOMMENDATION_INPUTS`] numbers once validated.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub id: Uuid,
    pub child_id: Uuid,
    pub recommendation: String,
    pub inputs: Vec<f64>,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

pub const RECOMMENDATION_INPUTS: usize = 10;

#[derive(Debug, Clone)]
pub struct Child {
    pub id: Uuid,
    pub name: String,
    pub nickname: Option<String>,
    pub dob: NaiveDate,
    pub gender: Option<Gender>,
    pub slug: String,
    /// The owning primary parent; immutable after creation.
    pub parent_id: Uuid,
    pub partner_parent_id: Option<Uuid>,
    pub partner_requests: Vec<PartnerRequest>,
    pub recommendation_history: Vec<Recommendation>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Child {
    pub fn pending_request_for(&self, email: &str) -> Option<&PartnerRequest> {
        self.partner_requests
            .iter()
            .find(|r| r.email == email && r.status == PartnerRequestStatus::Pending)
    }
}
