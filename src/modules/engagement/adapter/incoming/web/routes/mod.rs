mod comments;
mod follows;
mod likes;
mod telemetry;

pub use comments::{
    add_comment_handler, __path_add_comment_handler, delete_comment_handler,
    __path_delete_comment_handler, list_comments_handler, __path_list_comments_handler,
    AddCommentRequest,
};
pub use follows::{
    follow_user_handler, __path_follow_user_handler, list_followers_handler,
    __path_list_followers_handler, list_following_handler, __path_list_following_handler,
    unfollow_user_handler, __path_unfollow_user_handler, FollowListQuery,
};
pub use likes::{
    like_collection_handler, __path_like_collection_handler, unlike_collection_handler,
    __path_unlike_collection_handler,
};
pub use telemetry::{
    collection_click_handler, __path_collection_click_handler, product_click_handler,
    __path_product_click_handler, record_view_handler, __path_record_view_handler,
};
