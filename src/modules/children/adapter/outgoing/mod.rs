mod child_query_postgres;
mod child_repository_postgres;
mod partner_request_repository_postgres;
mod recommendation_repository_postgres;
pub mod sea_orm_entity;

pub use child_query_postgres::ChildQueryPostgres;
pub use child_repository_postgres::ChildRepositoryPostgres;
pub use partner_request_repository_postgres::PartnerRequestRepositoryPostgres;
pub use recommendation_repository_postgres::RecommendationRepositoryPostgres;
