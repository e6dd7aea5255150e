use std::sync::Arc;

use crate::modules::analytics::application::ports::incoming::use_cases::{
    BrandReportUseCase, CreatorReportUseCase,
};

#[derive(Clone)]
pub struct AnalyticsUseCases {
    pub brand_report: Arc<dyn BrandReportUseCase + Send + Sync>,
    pub creator_report: Arc<dyn CreatorReportUseCase + Send + Sync>,
}
