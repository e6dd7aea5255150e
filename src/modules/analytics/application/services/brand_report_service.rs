use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

use crate::modules::analytics::application::domain::entities::{
    BrandReport, ProductClicks, ProductPlacement,
};
use crate::modules::analytics::application::domain::window::{
    bucket_by_day, top_by_count, total, ReportWindow, TOP_N,
};
use crate::modules::analytics::application::ports::incoming::use_cases::{
    BrandReportError, BrandReportUseCase,
};
use crate::modules::analytics::application::ports::outgoing::{
    AnalyticsRepository, AnalyticsRepositoryError,
};
use crate::modules::auth::application::domain::entities::Actor;

pub struct BrandReportService<R>
where
    R: AnalyticsRepository,
{
    repository: R,
}

impl<R> BrandReportService<R>
where
    R: AnalyticsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_err(e: AnalyticsRepositoryError) -> BrandReportError {
    BrandReportError::RepositoryError(e.to_string())
}

#[async_trait]
impl<R> BrandReportUseCase for BrandReportService<R>
where
    R: AnalyticsRepository + Send + Sync,
{
    async fn execute(&self, actor: Actor, brand_id: Uuid) -> Result<BrandReport, BrandReportError> {
        let owner_id = self
            .repository
            .brand_owner(brand_id)
            .await
            .map_err(map_err)?
            .ok_or(BrandReportError::NotFound)?;

        if !actor.can_manage(owner_id) {
            return Err(BrandReportError::NotOwner);
        }

        let window = ReportWindow::ending_now();
        let since = window.start();

        let (products, clicks, views) = futures::try_join!(
            self.repository.brand_products(brand_id),
            self.repository.brand_clicks(brand_id, since),
            self.repository.brand_collection_views(brand_id, since),
        )
        .map_err(map_err)?;

        let daily_clicks = bucket_by_day(&window, clicks.iter().map(|e| e.at));
        let daily_views = bucket_by_day(&window, views.iter().map(|e| e.at));

        let names: HashMap<Uuid, &str> = products
            .iter()
            .map(|p| (p.product_id, p.name.as_str()))
            .collect();

        let top_products = top_by_count(
            clicks
                .iter()
                .filter(|e| window.contains(e.at.date_naive()))
                .map(|e| e.subject_id),
            TOP_N,
        )
        .into_iter()
        .filter_map(|(product_id, clicks)| {
            names.get(&product_id).map(|name| ProductClicks {
                product_id,
                name: name.to_string(),
                clicks,
            })
        })
        .collect();

        let mut placements: Vec<ProductPlacement> = products
            .into_iter()
            .map(|p| ProductPlacement {
                product_id: p.product_id,
                name: p.name,
                collection_count: p.collection_count,
            })
            .collect();
        placements.sort_by(|a, b| {
            b.collection_count
                .cmp(&a.collection_count)
                .then_with(|| a.name.cmp(&b.name))
        });

        Ok(BrandReport {
            brand_id,
            from: window.from,
            to: window.to,
            total_clicks: total(&daily_clicks),
            total_views: total(&daily_views),
            daily_clicks,
            daily_views,
            top_products,
            placements,
        })
    }
}
