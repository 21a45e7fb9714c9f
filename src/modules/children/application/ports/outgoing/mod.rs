pub mod child_query;
pub mod child_repository;
pub mod partner_request_repository;
pub mod recommendation_repository;

pub use child_query::{ChildQuery, ChildQueryError};
pub use child_repository::{ChildRepository, ChildRepositoryError, ChildUpdate, NewChild};
pub use partner_request_repository::{PartnerRequestRepository, PartnerRequestRepositoryError};
pub use recommendation_repository::{
    NewRecommendation, RecommendationRepository, RecommendationRepositoryError,
};
