use std::sync::Arc;

use crate::modules::auth::application::ports::incoming::use_cases::{
    GetUserProfileUseCase, LoginUserUseCase, RegisterUserUseCase, UpdateProfileUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub get_profile: Arc<dyn GetUserProfileUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
}
