use std::sync::Arc;

use crate::modules::engagement::application::ports::incoming::use_cases::{
    AddCommentUseCase, DeleteCommentUseCase, FollowUserUseCase, LikeCollectionUseCase,
    ListCommentsUseCase, ListFollowsUseCase, RecordViewUseCase, TrackClickUseCase,
    UnfollowUserUseCase, UnlikeCollectionUseCase,
};

#[derive(Clone)]
pub struct EngagementUseCases {
    pub like: Arc<dyn LikeCollectionUseCase + Send + Sync>,
    pub unlike: Arc<dyn UnlikeCollectionUseCase + Send + Sync>,
    pub follow: Arc<dyn FollowUserUseCase + Send + Sync>,
    pub unfollow: Arc<dyn UnfollowUserUseCase + Send + Sync>,
    pub list_follows: Arc<dyn ListFollowsUseCase + Send + Sync>,
    pub list_comments: Arc<dyn ListCommentsUseCase + Send + Sync>,
    pub add_comment: Arc<dyn AddCommentUseCase + Send + Sync>,
    pub delete_comment: Arc<dyn DeleteCommentUseCase + Send + Sync>,
    pub record_view: Arc<dyn RecordViewUseCase + Send + Sync>,
    pub track_click: Arc<dyn TrackClickUseCase + Send + Sync>,
}
