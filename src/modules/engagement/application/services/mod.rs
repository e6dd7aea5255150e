mod comment_service;
mod follow_service;
mod like_service;
mod telemetry_service;
mod visibility;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use comment_service::CommentService;
pub use follow_service::FollowService;
pub use like_service::LikeService;
pub use telemetry_service::TelemetryService;
