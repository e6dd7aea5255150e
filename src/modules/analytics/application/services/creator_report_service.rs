use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

use crate::modules::analytics::application::domain::entities::{CollectionViews, CreatorReport};
use crate::modules::analytics::application::domain::window::{
    bucket_by_day, top_by_count, total, ReportWindow, TOP_N,
};
use crate::modules::analytics::application::ports::incoming::use_cases::{
    CreatorReportError, CreatorReportUseCase,
};
use crate::modules::analytics::application::ports::outgoing::AnalyticsRepository;
use crate::modules::auth::application::domain::entities::UserId;

pub struct CreatorReportService<R>
where
    R: AnalyticsRepository,
{
    repository: R,
}

impl<R> CreatorReportService<R>
where
    R: AnalyticsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreatorReportUseCase for CreatorReportService<R>
where
    R: AnalyticsRepository + Send + Sync,
{
    async fn execute(&self, creator: UserId) -> Result<CreatorReport, CreatorReportError> {
        let owner_id = creator.value();
        let window = ReportWindow::ending_now();
        let since = window.start();

        let (collections, views, clicks, likes) = futures::try_join!(
            self.repository.creator_collections(owner_id),
            self.repository.creator_views(owner_id, since),
            self.repository.creator_clicks(owner_id, since),
            self.repository.creator_likes(owner_id, since),
        )
        .map_err(|e| CreatorReportError::RepositoryError(e.to_string()))?;

        let daily_views = bucket_by_day(&window, views.iter().map(|e| e.at));
        let daily_clicks = bucket_by_day(&window, clicks.iter().map(|e| e.at));
        let daily_likes = bucket_by_day(&window, likes.iter().map(|e| e.at));

        let titles: HashMap<Uuid, &str> = collections
            .iter()
            .map(|c| (c.collection_id, c.title.as_str()))
            .collect();

        let top_collections = top_by_count(
            views
                .iter()
                .filter(|e| window.contains(e.at.date_naive()))
                .map(|e| e.subject_id),
            TOP_N,
        )
        .into_iter()
        .filter_map(|(collection_id, views)| {
            titles.get(&collection_id).map(|title| CollectionViews {
                collection_id,
                title: title.to_string(),
                views,
            })
        })
        .collect();

        Ok(CreatorReport {
            from: window.from,
            to: window.to,
            total_views: total(&daily_views),
            total_clicks: total(&daily_clicks),
            total_likes: total(&daily_likes),
            daily_views,
            daily_clicks,
            daily_likes,
            top_collections,
        })
    }
}
