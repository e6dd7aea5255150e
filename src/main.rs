pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use actix_web::{middleware::Logger, web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::modules::analytics::adapter::outgoing::AnalyticsRepositoryPostgres;
use crate::modules::analytics::application::analytics_use_cases::AnalyticsUseCases;
use crate::modules::analytics::application::services::{BrandReportService, CreatorReportService};
use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::adapter::outgoing::security::Argon2Hasher;
use crate::modules::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::helpers::UserIdentityResolver;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::auth::application::services::{
    GetUserProfileService, LoginUserService, RegisterUserService, UpdateProfileService,
};
use crate::modules::catalog::adapter::outgoing::http::{OpenAiSummaryGenerator, ReqwestPageFetcher};
use crate::modules::catalog::adapter::outgoing::{
    BrandRepositoryPostgres, CampaignRepositoryPostgres, CategoryRepositoryPostgres,
    ProductRepositoryPostgres,
};
use crate::modules::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::modules::catalog::application::domain::ai_budget::AiCallBudget;
use crate::modules::catalog::application::services::{
    CreateBrandService, CreateCampaignService, CreateCategoryService, CreateProductService,
    GetBrandService, GetCampaignService, GetProductService, LinkCampaignProductService,
    ListCategoriesService, ProductSummaryService, ScrapeProductService,
};
use crate::modules::collection::adapter::outgoing::{
    CollectionQueryPostgres, CollectionRepositoryPostgres,
};
use crate::modules::collection::application::collection_use_cases::CollectionUseCases;
use crate::modules::collection::application::services::{
    AddCollectionItemService, CreateCollectionService, DeleteCollectionService,
    GetCollectionService, ListFeedService, ListUserCollectionsService,
    RemoveCollectionItemService, ReorderCollectionItemsService, UpdateCollectionService,
};
use crate::modules::engagement::adapter::outgoing::{
    CollectionVisibilityPostgres, CommentRepositoryPostgres, FollowRepositoryPostgres,
    LikeRepositoryPostgres, TelemetryRepositoryPostgres,
};
use crate::modules::engagement::application::engagement_use_cases::EngagementUseCases;
use crate::modules::engagement::application::services::{
    CommentService, FollowService, LikeService, TelemetryService,
};
use crate::modules::media::adapter::outgoing::ReqwestImageHost;
use crate::modules::media::application::media_use_cases::MediaUseCases;
use crate::modules::media::application::services::UploadImageService;
use crate::modules::search::adapter::outgoing::SearchRepositoryPostgres;
use crate::modules::search::application::search_use_cases::SearchUseCases;
use crate::modules::search::application::services::SearchService;
use crate::shared::api::{custom_json_config, custom_query_config};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub catalog: CatalogUseCases,
    pub collection: CollectionUseCases,
    pub engagement: EngagementUseCases,
    pub search: SearchUseCases,
    pub analytics: AnalyticsUseCases,
    pub media: MediaUseCases,
    pub user_identity_resolver: UserIdentityResolver,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;
    let server_url = config.server_url();

    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db = Arc::new(Database::connect(opt).await?);

    if config.run_migrations {
        info!("Applying pending migrations");
        Migrator::up(db.as_ref(), None).await?;
    }

    let http_client = reqwest::Client::builder()
        .timeout(config.http_client_timeout)
        .build()?;

    let jwt_service = JwtTokenService::new(JwtConfig::from_env()?);
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let hasher = Arc::new(Argon2Hasher::from_env()?);

    // Auth
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db));
    let user_query = UserQueryPostgres::new(Arc::clone(&db));
    let auth = AuthUseCases {
        register: Arc::new(RegisterUserService::new(
            user_repo.clone(),
            hasher.clone(),
            Arc::clone(&token_provider),
        )),
        login: Arc::new(LoginUserService::new(
            user_query.clone(),
            hasher,
            Arc::clone(&token_provider),
        )),
        get_profile: Arc::new(GetUserProfileService::new(user_query.clone())),
        update_profile: Arc::new(UpdateProfileService::new(user_repo)),
    };
    let user_identity_resolver = UserIdentityResolver::new(Arc::new(user_query));

    // Catalog
    let brand_repo = BrandRepositoryPostgres::new(Arc::clone(&db));
    let product_repo = ProductRepositoryPostgres::new(Arc::clone(&db));
    let category_repo = CategoryRepositoryPostgres::new(Arc::clone(&db));
    let campaign_repo = CampaignRepositoryPostgres::new(Arc::clone(&db));
    let budget = Arc::new(AiCallBudget::new(config.ai.daily_limit));
    let summary_generator = Arc::new(OpenAiSummaryGenerator::new(
        http_client.clone(),
        config.ai.clone(),
    ));
    let catalog = CatalogUseCases {
        create_brand: Arc::new(CreateBrandService::new(brand_repo.clone())),
        get_brand: Arc::new(GetBrandService::new(brand_repo.clone())),
        create_product: Arc::new(CreateProductService::new(product_repo.clone())),
        get_product: Arc::new(GetProductService::new(product_repo.clone())),
        scrape_product: Arc::new(ScrapeProductService::new(Arc::new(ReqwestPageFetcher::new(
            http_client.clone(),
        )))),
        product_summary: Arc::new(ProductSummaryService::new(
            product_repo.clone(),
            summary_generator,
            budget,
        )),
        list_categories: Arc::new(ListCategoriesService::new(category_repo.clone())),
        create_category: Arc::new(CreateCategoryService::new(category_repo)),
        create_campaign: Arc::new(CreateCampaignService::new(campaign_repo.clone(), brand_repo)),
        get_campaign: Arc::new(GetCampaignService::new(campaign_repo.clone())),
        link_campaign_product: Arc::new(LinkCampaignProductService::new(
            campaign_repo,
            product_repo,
        )),
    };

    // Collections
    let collection_repo = CollectionRepositoryPostgres::new(Arc::clone(&db));
    let collection_query = CollectionQueryPostgres::new(Arc::clone(&db));
    let collection = CollectionUseCases {
        create: Arc::new(CreateCollectionService::new(collection_repo.clone())),
        get: Arc::new(GetCollectionService::new(collection_query.clone())),
        feed: Arc::new(ListFeedService::new(collection_query.clone())),
        list_by_user: Arc::new(ListUserCollectionsService::new(collection_query)),
        update: Arc::new(UpdateCollectionService::new(collection_repo.clone())),
        delete: Arc::new(DeleteCollectionService::new(collection_repo.clone())),
        add_item: Arc::new(AddCollectionItemService::new(collection_repo.clone())),
        remove_item: Arc::new(RemoveCollectionItemService::new(collection_repo.clone())),
        reorder_items: Arc::new(ReorderCollectionItemsService::new(collection_repo)),
    };

    // Engagement
    let visibility = CollectionVisibilityPostgres::new(Arc::clone(&db));
    let likes = Arc::new(LikeService::new(
        LikeRepositoryPostgres::new(Arc::clone(&db)),
        visibility.clone(),
    ));
    let follows = Arc::new(FollowService::new(FollowRepositoryPostgres::new(Arc::clone(&db))));
    let comments = Arc::new(CommentService::new(
        CommentRepositoryPostgres::new(Arc::clone(&db)),
        visibility.clone(),
    ));
    let telemetry = Arc::new(TelemetryService::new(
        TelemetryRepositoryPostgres::new(Arc::clone(&db)),
        visibility,
    ));
    let engagement = EngagementUseCases {
        like: likes.clone(),
        unlike: likes,
        follow: follows.clone(),
        unfollow: follows.clone(),
        list_follows: follows,
        list_comments: comments.clone(),
        add_comment: comments.clone(),
        delete_comment: comments,
        record_view: telemetry.clone(),
        track_click: telemetry,
    };

    let search = SearchUseCases {
        search: Arc::new(SearchService::new(SearchRepositoryPostgres::new(Arc::clone(&db)))),
    };

    let analytics_repo = AnalyticsRepositoryPostgres::new(Arc::clone(&db));
    let analytics = AnalyticsUseCases {
        brand_report: Arc::new(BrandReportService::new(analytics_repo.clone())),
        creator_report: Arc::new(CreatorReportService::new(analytics_repo)),
    };

    let media = MediaUseCases {
        upload_image: Arc::new(UploadImageService::new(Arc::new(ReqwestImageHost::new(
            http_client,
            config.image_host.clone(),
        )))),
    };

    let state = AppState {
        auth,
        catalog,
        collection,
        engagement,
        search,
        analytics,
        media,
        user_identity_resolver,
    };

    info!(server_url = %server_url, "Server listening");

    let db_for_server = Arc::clone(&db);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::analytics::adapter::incoming::web::routes as analytics;
    use crate::modules::auth::adapter::incoming::web::routes as auth;
    use crate::modules::catalog::adapter::incoming::web::routes as catalog;
    use crate::modules::collection::adapter::incoming::web::routes as collection;
    use crate::modules::engagement::adapter::incoming::web::routes as engagement;
    use crate::modules::media::adapter::incoming::web::routes as media;
    use crate::modules::search::adapter::incoming::web::routes as search;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth::register_user_handler);
    cfg.service(auth::login_user_handler);
    cfg.service(auth::get_me_handler);
    cfg.service(auth::update_profile_handler);
    cfg.service(auth::get_user_profile_handler);
    // Catalog
    cfg.service(catalog::create_brand_handler);
    cfg.service(catalog::get_brand_handler);
    cfg.service(catalog::scrape_product_handler);
    cfg.service(catalog::create_product_handler);
    cfg.service(catalog::get_product_handler);
    cfg.service(catalog::get_product_summary_handler);
    cfg.service(catalog::list_categories_handler);
    cfg.service(catalog::create_category_handler);
    cfg.service(catalog::create_campaign_handler);
    cfg.service(catalog::get_campaign_handler);
    cfg.service(catalog::link_campaign_product_handler);
    // Collections
    cfg.service(collection::list_collections_handler);
    cfg.service(collection::create_collection_handler);
    cfg.service(collection::get_collection_handler);
    cfg.service(collection::update_collection_handler);
    cfg.service(collection::delete_collection_handler);
    cfg.service(collection::reorder_collection_items_handler);
    cfg.service(collection::add_collection_item_handler);
    cfg.service(collection::remove_collection_item_handler);
    cfg.service(collection::list_user_collections_handler);
    // Engagement
    cfg.service(engagement::like_collection_handler);
    cfg.service(engagement::unlike_collection_handler);
    cfg.service(engagement::follow_user_handler);
    cfg.service(engagement::unfollow_user_handler);
    cfg.service(engagement::list_followers_handler);
    cfg.service(engagement::list_following_handler);
    cfg.service(engagement::list_comments_handler);
    cfg.service(engagement::add_comment_handler);
    cfg.service(engagement::delete_comment_handler);
    cfg.service(engagement::record_view_handler);
    // `/r/p/..` must win over `/r/{collection_id}/..`
    cfg.service(engagement::product_click_handler);
    cfg.service(engagement::collection_click_handler);
    // Search, analytics, media
    cfg.service(search::search_handler);
    cfg.service(analytics::brand_report_handler);
    cfg.service(analytics::creator_report_handler);
    cfg.service(media::upload_image_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
