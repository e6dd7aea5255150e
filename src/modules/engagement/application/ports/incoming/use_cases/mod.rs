mod comments;
mod follows;
mod likes;
mod telemetry;

pub use comments::{
    AddCommentError, AddCommentUseCase, DeleteCommentError, DeleteCommentUseCase,
    ListCommentsError, ListCommentsUseCase,
};
pub use follows::{
    FollowUserError, FollowUserUseCase, ListFollowsError, ListFollowsUseCase, UnfollowUserUseCase,
};
pub use likes::{LikeCollectionError, LikeCollectionUseCase, UnlikeCollectionUseCase};
pub use telemetry::{
    ClickRequest, RecordViewError, RecordViewUseCase, TrackClickError, TrackClickUseCase,
};
