mod get_user_profile_service;
mod login_user_service;
mod register_user_service;
mod update_profile_service;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use get_user_profile_service::GetUserProfileService;
pub use login_user_service::LoginUserService;
pub use register_user_service::RegisterUserService;
pub use update_profile_service::UpdateProfileService;
