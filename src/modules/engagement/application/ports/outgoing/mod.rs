pub mod collection_visibility;
pub mod comment_repository;
pub mod follow_repository;
pub mod like_repository;
pub mod telemetry_repository;

pub use collection_visibility::{CollectionVisibilityQuery, VisibilityQueryError};
pub use comment_repository::{CommentRepository, CommentRepositoryError};
pub use follow_repository::{FollowRepository, FollowRepositoryError};
pub use like_repository::{LikeRepository, LikeRepositoryError};
pub use telemetry_repository::{TelemetryRepository, TelemetryRepositoryError};
