mod get_me;
mod get_user_profile;
mod login_user;
mod register_user;
mod update_profile;
mod user_dto;

pub use get_me::{get_me_handler, __path_get_me_handler};
pub use get_user_profile::{get_user_profile_handler, __path_get_user_profile_handler};
pub use login_user::{login_user_handler, __path_login_user_handler, LoginRequest};
pub use register_user::{
    register_user_handler, __path_register_user_handler, AuthResponse, RegisterUserRequest,
};
pub use update_profile::{
    update_profile_handler, __path_update_profile_handler, UpdateProfileRequest,
};
pub use user_dto::{UserProfileResponse, UserResponse};
