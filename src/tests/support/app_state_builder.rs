use std::sync::Arc;

use crate::modules::analytics::application::analytics_use_cases::AnalyticsUseCases;
use crate::modules::analytics::application::ports::incoming::use_cases::{
    BrandReportUseCase, CreatorReportUseCase,
};
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::helpers::UserIdentityResolver;
use crate::modules::auth::application::ports::incoming::use_cases::{
    GetUserProfileUseCase, LoginUserUseCase, RegisterUserUseCase, UpdateProfileUseCase,
};
use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::modules::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreateBrandUseCase, CreateCampaignUseCase, CreateCategoryUseCase, CreateProductUseCase,
    GetBrandUseCase, GetCampaignUseCase, GetProductSummaryUseCase, GetProductUseCase,
    LinkCampaignProductUseCase, ListCategoriesUseCase, ScrapeProductUseCase,
};
use crate::modules::collection::application::collection_use_cases::CollectionUseCases;
use crate::modules::collection::application::ports::incoming::use_cases::{
    AddCollectionItemUseCase, CreateCollectionUseCase, DeleteCollectionUseCase,
    GetCollectionUseCase, ListFeedUseCase, ListUserCollectionsUseCase,
    RemoveCollectionItemUseCase, ReorderCollectionItemsUseCase, UpdateCollectionUseCase,
};
use crate::modules::engagement::application::engagement_use_cases::EngagementUseCases;
use crate::modules::engagement::application::ports::incoming::use_cases::{
    AddCommentUseCase, DeleteCommentUseCase, FollowUserUseCase, LikeCollectionUseCase,
    ListCommentsUseCase, ListFollowsUseCase, RecordViewUseCase, TrackClickUseCase,
    UnfollowUserUseCase, UnlikeCollectionUseCase,
};
use crate::modules::media::application::media_use_cases::MediaUseCases;
use crate::modules::media::application::ports::incoming::use_cases::UploadImageUseCase;
use crate::modules::search::application::ports::incoming::use_cases::SearchUseCase;
use crate::modules::search::application::search_use_cases::SearchUseCases;
use crate::tests::support::stubs::{KnownUser, NotUsed};
use crate::AppState;

/// Starts from an `AppState` where every use case panics if called, so each
/// test only wires what its handler touches.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    catalog: CatalogUseCases,
    collection: CollectionUseCases,
    engagement: EngagementUseCases,
    search: SearchUseCases,
    analytics: AnalyticsUseCases,
    media: MediaUseCases,
    user_identity_resolver: UserIdentityResolver,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                register: Arc::new(NotUsed),
                login: Arc::new(NotUsed),
                get_profile: Arc::new(NotUsed),
                update_profile: Arc::new(NotUsed),
            },
            catalog: CatalogUseCases {
                create_brand: Arc::new(NotUsed),
                get_brand: Arc::new(NotUsed),
                create_product: Arc::new(NotUsed),
                get_product: Arc::new(NotUsed),
                scrape_product: Arc::new(NotUsed),
                product_summary: Arc::new(NotUsed),
                list_categories: Arc::new(NotUsed),
                create_category: Arc::new(NotUsed),
                create_campaign: Arc::new(NotUsed),
                get_campaign: Arc::new(NotUsed),
                link_campaign_product: Arc::new(NotUsed),
            },
            collection: CollectionUseCases {
                create: Arc::new(NotUsed),
                get: Arc::new(NotUsed),
                feed: Arc::new(NotUsed),
                list_by_user: Arc::new(NotUsed),
                update: Arc::new(NotUsed),
                delete: Arc::new(NotUsed),
                add_item: Arc::new(NotUsed),
                remove_item: Arc::new(NotUsed),
                reorder_items: Arc::new(NotUsed),
            },
            engagement: EngagementUseCases {
                like: Arc::new(NotUsed),
                unlike: Arc::new(NotUsed),
                follow: Arc::new(NotUsed),
                unfollow: Arc::new(NotUsed),
                list_follows: Arc::new(NotUsed),
                list_comments: Arc::new(NotUsed),
                add_comment: Arc::new(NotUsed),
                delete_comment: Arc::new(NotUsed),
                record_view: Arc::new(NotUsed),
                track_click: Arc::new(NotUsed),
            },
            search: SearchUseCases {
                search: Arc::new(NotUsed),
            },
            analytics: AnalyticsUseCases {
                brand_report: Arc::new(NotUsed),
                creator_report: Arc::new(NotUsed),
            },
            media: MediaUseCases {
                upload_image: Arc::new(NotUsed),
            },
            user_identity_resolver: UserIdentityResolver::new(Arc::new(KnownUser::nobody())),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(mut self, uc: impl RegisterUserUseCase + 'static) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_get_user_profile(mut self, uc: impl GetUserProfileUseCase + 'static) -> Self {
        self.auth.get_profile = Arc::new(uc);
        self
    }

    pub fn with_update_profile(mut self, uc: impl UpdateProfileUseCase + 'static) -> Self {
        self.auth.update_profile = Arc::new(uc);
        self
    }

    pub fn with_create_brand(mut self, uc: impl CreateBrandUseCase + 'static) -> Self {
        self.catalog.create_brand = Arc::new(uc);
        self
    }

    pub fn with_get_brand(mut self, uc: impl GetBrandUseCase + 'static) -> Self {
        self.catalog.get_brand = Arc::new(uc);
        self
    }

    pub fn with_create_product(mut self, uc: impl CreateProductUseCase + 'static) -> Self {
        self.catalog.create_product = Arc::new(uc);
        self
    }

    pub fn with_get_product(mut self, uc: impl GetProductUseCase + 'static) -> Self {
        self.catalog.get_product = Arc::new(uc);
        self
    }

    pub fn with_scrape_product(mut self, uc: impl ScrapeProductUseCase + 'static) -> Self {
        self.catalog.scrape_product = Arc::new(uc);
        self
    }

    pub fn with_product_summary(mut self, uc: impl GetProductSummaryUseCase + 'static) -> Self {
        self.catalog.product_summary = Arc::new(uc);
        self
    }

    pub fn with_list_categories(mut self, uc: impl ListCategoriesUseCase + 'static) -> Self {
        self.catalog.list_categories = Arc::new(uc);
        self
    }

    pub fn with_create_category(mut self, uc: impl CreateCategoryUseCase + 'static) -> Self {
        self.catalog.create_category = Arc::new(uc);
        self
    }

    pub fn with_create_campaign(mut self, uc: impl CreateCampaignUseCase + 'static) -> Self {
        self.catalog.create_campaign = Arc::new(uc);
        self
    }

    pub fn with_get_campaign(mut self, uc: impl GetCampaignUseCase + 'static) -> Self {
        self.catalog.get_campaign = Arc::new(uc);
        self
    }

    pub fn with_link_campaign_product(mut self, uc: impl LinkCampaignProductUseCase + 'static) -> Self {
        self.catalog.link_campaign_product = Arc::new(uc);
        self
    }

    pub fn with_create_collection(mut self, uc: impl CreateCollectionUseCase + 'static) -> Self {
        self.collection.create = Arc::new(uc);
        self
    }

    pub fn with_get_collection(mut self, uc: impl GetCollectionUseCase + 'static) -> Self {
        self.collection.get = Arc::new(uc);
        self
    }

    pub fn with_list_feed(mut self, uc: impl ListFeedUseCase + 'static) -> Self {
        self.collection.feed = Arc::new(uc);
        self
    }

    pub fn with_list_user_collections(mut self, uc: impl ListUserCollectionsUseCase + 'static) -> Self {
        self.collection.list_by_user = Arc::new(uc);
        self
    }

    pub fn with_update_collection(mut self, uc: impl UpdateCollectionUseCase + 'static) -> Self {
        self.collection.update = Arc::new(uc);
        self
    }

    pub fn with_delete_collection(mut self, uc: impl DeleteCollectionUseCase + 'static) -> Self {
        self.collection.delete = Arc::new(uc);
        self
    }

    pub fn with_add_collection_item(mut self, uc: impl AddCollectionItemUseCase + 'static) -> Self {
        self.collection.add_item = Arc::new(uc);
        self
    }

    pub fn with_remove_collection_item(mut self, uc: impl RemoveCollectionItemUseCase + 'static) -> Self {
        self.collection.remove_item = Arc::new(uc);
        self
    }

    pub fn with_reorder_collection_items(mut self, uc: impl ReorderCollectionItemsUseCase + 'static) -> Self {
        self.collection.reorder_items = Arc::new(uc);
        self
    }

    pub fn with_like(mut self, uc: impl LikeCollectionUseCase + 'static) -> Self {
        self.engagement.like = Arc::new(uc);
        self
    }

    pub fn with_unlike(mut self, uc: impl UnlikeCollectionUseCase + 'static) -> Self {
        self.engagement.unlike = Arc::new(uc);
        self
    }

    pub fn with_follow(mut self, uc: impl FollowUserUseCase + 'static) -> Self {
        self.engagement.follow = Arc::new(uc);
        self
    }

    pub fn with_unfollow(mut self, uc: impl UnfollowUserUseCase + 'static) -> Self {
        self.engagement.unfollow = Arc::new(uc);
        self
    }

    pub fn with_list_follows(mut self, uc: impl ListFollowsUseCase + 'static) -> Self {
        self.engagement.list_follows = Arc::new(uc);
        self
    }

    pub fn with_list_comments(mut self, uc: impl ListCommentsUseCase + 'static) -> Self {
        self.engagement.list_comments = Arc::new(uc);
        self
    }

    pub fn with_add_comment(mut self, uc: impl AddCommentUseCase + 'static) -> Self {
        self.engagement.add_comment = Arc::new(uc);
        self
    }

    pub fn with_delete_comment(mut self, uc: impl DeleteCommentUseCase + 'static) -> Self {
        self.engagement.delete_comment = Arc::new(uc);
        self
    }

    pub fn with_record_view(mut self, uc: impl RecordViewUseCase + 'static) -> Self {
        self.engagement.record_view = Arc::new(uc);
        self
    }

    pub fn with_track_click(mut self, uc: impl TrackClickUseCase + 'static) -> Self {
        self.engagement.track_click = Arc::new(uc);
        self
    }

    pub fn with_search(mut self, uc: impl SearchUseCase + 'static) -> Self {
        self.search.search = Arc::new(uc);
        self
    }

    pub fn with_brand_report(mut self, uc: impl BrandReportUseCase + 'static) -> Self {
        self.analytics.brand_report = Arc::new(uc);
        self
    }

    pub fn with_creator_report(mut self, uc: impl CreatorReportUseCase + 'static) -> Self {
        self.analytics.creator_report = Arc::new(uc);
        self
    }

    pub fn with_upload_image(mut self, uc: impl UploadImageUseCase + 'static) -> Self {
        self.media.upload_image = Arc::new(uc);
        self
    }

    pub fn with_user_query(mut self, query: impl UserQuery + 'static) -> Self {
        self.user_identity_resolver = UserIdentityResolver::new(Arc::new(query));
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            auth: self.auth,
            catalog: self.catalog,
            collection: self.collection,
            engagement: self.engagement,
            search: self.search,
            analytics: self.analytics,
            media: self.media,
            user_identity_resolver: self.user_identity_resolver,
        }
    }
}
