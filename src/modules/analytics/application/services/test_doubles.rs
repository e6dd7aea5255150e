use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::modules::analytics::application::domain::entities::TimedEvent;
use crate::modules::analytics::application::ports::outgoing::{
    AnalyticsRepository, AnalyticsRepositoryError, BrandProduct, CreatorCollection,
};

/// `n` events for `subject_id`, `days_ago` days before now.
pub fn events(subject_id: Uuid, days_ago: i64, n: usize) -> Vec<TimedEvent> {
    let at = Utc::now() - Duration::days(days_ago);
    vec![TimedEvent { subject_id, at }; n]
}

#[derive(Default)]
pub struct MockAnalyticsRepository {
    /// `None`: brand missing
    pub brand_owner: Option<Option<Uuid>>,
    pub brand_products: Vec<BrandProduct>,
    pub clicks: Vec<TimedEvent>,
    pub views: Vec<TimedEvent>,
    pub likes: Vec<TimedEvent>,
    pub collections: Vec<CreatorCollection>,
    pub fail: bool,
}

impl MockAnalyticsRepository {
    fn check(&self) -> Result<(), AnalyticsRepositoryError> {
        if self.fail {
            return Err(AnalyticsRepositoryError::DatabaseError("timeout".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl AnalyticsRepository for MockAnalyticsRepository {
    async fn brand_owner(
        &self,
        _brand_id: Uuid,
    ) -> Result<Option<Option<Uuid>>, AnalyticsRepositoryError> {
        Ok(self.brand_owner)
    }

    async fn brand_products(
        &self,
        _brand_id: Uuid,
    ) -> Result<Vec<BrandProduct>, AnalyticsRepositoryError> {
        self.check()?;
        Ok(self.brand_products.clone())
    }

    async fn brand_clicks(
        &self,
        _brand_id: Uuid,
        _since: DateTime<Utc>,
    ) -> Result<Vec<TimedEvent>, AnalyticsRepositoryError> {
        self.check()?;
        Ok(self.clicks.clone())
    }

    async fn brand_collection_views(
        &self,
        _brand_id: Uuid,
        _since: DateTime<Utc>,
    ) -> Result<Vec<TimedEvent>, AnalyticsRepositoryError> {
        self.check()?;
        Ok(self.views.clone())
    }

    async fn creator_collections(
        &self,
        _owner_id: Uuid,
    ) -> Result<Vec<CreatorCollection>, AnalyticsRepositoryError> {
        self.check()?;
        Ok(self.collections.clone())
    }

    async fn creator_views(
        &self,
        _owner_id: Uuid,
        _since: DateTime<Utc>,
    ) -> Result<Vec<TimedEvent>, AnalyticsRepositoryError> {
        self.check()?;
        Ok(self.views.clone())
    }

    async fn creator_clicks(
        &self,
        _owner_id: Uuid,
        _since: DateTime<Utc>,
    ) -> Result<Vec<TimedEvent>, AnalyticsRepositoryError> {
        self.check()?;
        Ok(self.clicks.clone())
    }

    async fn creator_likes(
        &self,
        _owner_id: Uuid,
        _since: DateTime<Utc>,
    ) -> Result<Vec<TimedEvent>, AnalyticsRepositoryError> {
        self.check()?;
        Ok(self.likes.clone())
    }
}
