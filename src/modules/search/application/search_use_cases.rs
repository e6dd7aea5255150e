use std::sync::Arc;

use crate::modules::search::application::ports::incoming::use_cases::SearchUseCase;

#[derive(Clone)]
pub struct SearchUseCases {
    pub search: Arc<dyn SearchUseCase + Send + Sync>,
}
