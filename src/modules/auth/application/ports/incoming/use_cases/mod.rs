mod get_user_profile;
mod login_user;
mod register_user;
mod update_profile;

pub use get_user_profile::{GetUserProfileError, GetUserProfileUseCase, ProfileLookup};
pub use login_user::{LoginUserError, LoginUserInput, LoginUserUseCase};
pub use register_user::{AuthOutput, RegisterUserError, RegisterUserInput, RegisterUserUseCase};
pub use update_profile::{UpdateProfileError, UpdateProfileUseCase};
