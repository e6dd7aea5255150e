mod collection_visibility_postgres;
mod comment_repository_postgres;
mod follow_repository_postgres;
mod like_repository_postgres;
pub mod sea_orm_entity;
mod telemetry_repository_postgres;

pub use collection_visibility_postgres::CollectionVisibilityPostgres;
pub use comment_repository_postgres::CommentRepositoryPostgres;
pub use follow_repository_postgres::FollowRepositoryPostgres;
pub use like_repository_postgres::LikeRepositoryPostgres;
pub use telemetry_repository_postgres::TelemetryRepositoryPostgres;
