// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

use crate::children::application::domain::entities::{Child, PartnerRequest, Recommendation};
use crate::users::application::domain::entities::User;

/// Standard success envelope: resource payloads are nested one level
/// under `data`.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// `success`
    #[schema(example = "success")]
    pub status: String,
    pub data: DataWrapper<T>,
}

#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct DataWrapper<T> {
    pub data: T,
}

/// Operational error envelope: `fail` for 4xx, `error` for 5xx.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "fail")]
    pub status: String,
    #[schema(example = "Invalid request")]
    pub message: String,
}

/// Public view of a user account. Never carries the password hash or
/// any token material.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserDto {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane_doe_4f6a8b2c1d3e")]
    pub username: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "jane-doe")]
    pub slug: String,
    #[schema(example = "female")]
    pub gender: Option<String>,
    pub bio: Option<String>,
    #[schema(example = "user")]
    pub role: String,
    pub is_verified: bool,
    pub active: bool,
    pub created_at: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            username: user.username,
            email: user.email,
            slug: user.slug,
            gender: user.gender.map(|g| g.as_str().to_string()),
            bio: user.bio,
            role: user.role.as_str().to_string(),
            is_verified: user.is_verified,
            active: user.active,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

/// Identity summary embedded where a full profile would be noise.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserSummaryDto {
    pub id: String,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
}

impl From<User> for UserSummaryDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PartnerRequestDto {
    pub id: String,
    #[schema(example = "Bo Field")]
    pub name: String,
    #[schema(example = "bo@example.com")]
    pub email: String,
    #[schema(example = "pending")]
    pub status: String,
    pub created_at: String,
}

impl From<PartnerRequest> for PartnerRequestDto {
    fn from(request: PartnerRequest) -> Self {
        Self {
            id: request.id.to_string(),
            name: request.name,
            email: request.email,
            status: request.status.as_str().to_string(),
            created_at: request.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecommendationDto {
    pub id: String,
    #[schema(example = "More outdoor play")]
    pub recommendation: String,
    pub inputs: Vec<f64>,
    pub description: String,
    pub created_at: String,
}

impl From<Recommendation> for RecommendationDto {
    fn from(entry: Recommendation) -> Self {
        Self {
            id: entry.id.to_string(),
            recommendation: entry.recommendation,
            inputs: entry.inputs,
            description: entry.description,
            created_at: entry.created_at.to_rfc3339(),
        }
    }
}

/// A child profile with its owned invitation and recommendation rows.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChildDto {
    pub id: String,
    #[schema(example = "Milo James")]
    pub name: String,
    pub nickname: Option<String>,
    #[schema(example = "2021-03-02")]
    pub dob: String,
    #[schema(example = "male")]
    pub gender: Option<String>,
    #[schema(example = "milo-james")]
    pub slug: String,
    pub parent_id: String,
    pub partner_parent_id: Option<String>,
    pub partner_requests: Vec<PartnerRequestDto>,
    pub recommendation_history: Vec<RecommendationDto>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Child> for ChildDto {
    fn from(child: Child) -> Self {
        Self {
            id: child.id.to_string(),
            name: child.name,
            nickname: child.nickname,
            dob: child.dob.to_string(),
            gender: child.gender.map(|g| g.as_str().to_string()),
            slug: child.slug,
            parent_id: child.parent_id.to_string(),
            partner_parent_id: child.partner_parent_id.map(|id| id.to_string()),
            partner_requests: child
                .partner_requests
                .into_iter()
                .map(PartnerRequestDto::from)
                .collect(),
            recommendation_history: child
                .recommendation_history
                .into_iter()
                .map(RecommendationDto::from)
                .collect(),
            created_at: child.created_at.to_rfc3339(),
            updated_at: child.updated_at.to_rfc3339(),
        }
    }
}

/// A child together with the identities of the accounts attached to it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChildDetailsDto {
    #[serde(flatten)]
    pub child: ChildDto,
    pub parent: Option<UserSummaryDto>,
    pub partner_parent: Option<UserSummaryDto>,
}

/// A user together with the children they own.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserWithChildrenDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub children: Vec<ChildDto>,
}

/// Body shape shared by every operation that opens a session: the JWT
/// travels both in the body and in the `jwt` cookie.
#[derive(Serialize, ToSchema)]
pub struct SessionResponse {
    #[schema(example = "success")]
    pub status: String,
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    pub data: SessionUserData,
}

#[derive(Serialize, ToSchema)]
pub struct SessionUserData {
    pub user: UserDto,
}

impl SessionResponse {
    pub fn new(token: String, user: User) -> Self {
        Self {
            status: "success".to_string(),
            token,
            data: SessionUserData {
                user: UserDto::from(user),
            },
        }
    }
}
